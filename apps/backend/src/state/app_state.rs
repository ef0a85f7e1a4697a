use std::sync::Arc;

use crate::config::EngineConfig;
use crate::repos::{BoardStateStore, GameStore, PlayerRoster};
use crate::services::events::GameEventSink;
use crate::services::game_locks::GameLocks;
use crate::services::join_code::JoinCodes;

/// Shared engine resources. Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<dyn GameStore>,
    pub boards: Arc<dyn BoardStateStore>,
    pub roster: Arc<dyn PlayerRoster>,
    pub events: Arc<dyn GameEventSink>,
    pub locks: Arc<GameLocks>,
    pub codes: Arc<JoinCodes>,
    pub config: EngineConfig,
}

impl AppState {
    pub fn new(
        games: Arc<dyn GameStore>,
        boards: Arc<dyn BoardStateStore>,
        roster: Arc<dyn PlayerRoster>,
        events: Arc<dyn GameEventSink>,
        codes: Arc<JoinCodes>,
        config: EngineConfig,
    ) -> Self {
        Self {
            games,
            boards,
            roster,
            events,
            locks: Arc::new(GameLocks::new()),
            codes,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("locks", &self.locks.len())
            .finish_non_exhaustive()
    }
}
