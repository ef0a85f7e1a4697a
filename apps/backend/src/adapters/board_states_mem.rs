//! In-memory adapter for board snapshot history.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::GameId;
use crate::errors::domain::DomainError;
use crate::repos::board_states::BoardStateStore;

/// Append-only snapshot list per game, latest last.
#[derive(Debug, Default)]
pub struct BoardStateStoreMem {
    snapshots: DashMap<GameId, Vec<String>>,
}

impl BoardStateStoreMem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots stored for a game.
    pub fn history_len(&self, game_id: GameId) -> usize {
        self.snapshots.get(&game_id).map(|h| h.len()).unwrap_or(0)
    }
}

#[async_trait]
impl BoardStateStore for BoardStateStoreMem {
    async fn load_latest(&self, game_id: GameId) -> Result<Option<String>, DomainError> {
        Ok(self
            .snapshots
            .get(&game_id)
            .and_then(|history| history.last().cloned()))
    }

    async fn append(&self, game_id: GameId, snapshot: String) -> Result<(), DomainError> {
        self.snapshots.entry(game_id).or_default().push(snapshot);
        Ok(())
    }
}
