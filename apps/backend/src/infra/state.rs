use std::sync::Arc;

use crate::adapters::{BoardStateStoreMem, GameStoreMem, PlayerRosterMem};
use crate::config::EngineConfig;
use crate::error::AppError;
use crate::repos::{BoardStateStore, GameStore, PlayerRoster};
use crate::services::events::{BroadcastSink, GameEventSink};
use crate::services::join_code::JoinCodes;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and binaries).
///
/// Unset stores fall back to the in-memory adapters; an unset sink becomes a
/// `BroadcastSink` nobody subscribes to.
pub struct StateBuilder {
    config: EngineConfig,
    games: Option<Arc<dyn GameStore>>,
    boards: Option<Arc<dyn BoardStateStore>>,
    roster: Option<Arc<dyn PlayerRoster>>,
    events: Option<Arc<dyn GameEventSink>>,
    codes: Option<JoinCodes>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            games: None,
            boards: None,
            roster: None,
            events: None,
            codes: None,
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_games(mut self, games: Arc<dyn GameStore>) -> Self {
        self.games = Some(games);
        self
    }

    pub fn with_boards(mut self, boards: Arc<dyn BoardStateStore>) -> Self {
        self.boards = Some(boards);
        self
    }

    pub fn with_roster(mut self, roster: Arc<dyn PlayerRoster>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn with_events(mut self, events: Arc<dyn GameEventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Fixed seed for reproducible join codes.
    pub fn with_code_seed(mut self, seed: u64) -> Self {
        self.codes = Some(JoinCodes::seeded(seed));
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        self.config.validate()?;
        let games: Arc<dyn GameStore> = match self.games {
            Some(games) => games,
            None => Arc::new(GameStoreMem::new()),
        };
        let boards: Arc<dyn BoardStateStore> = match self.boards {
            Some(boards) => boards,
            None => Arc::new(BoardStateStoreMem::new()),
        };
        let roster: Arc<dyn PlayerRoster> = match self.roster {
            Some(roster) => roster,
            None => Arc::new(PlayerRosterMem::new()),
        };
        let events: Arc<dyn GameEventSink> = match self.events {
            Some(events) => events,
            None => Arc::new(BroadcastSink::new(self.config.event_capacity)),
        };
        let codes = Arc::new(self.codes.unwrap_or_default());
        Ok(AppState::new(
            games,
            boards,
            roster,
            events,
            codes,
            self.config,
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
