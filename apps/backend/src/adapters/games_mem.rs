//! In-memory adapter for the game store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::games::{Game, GameStore};

#[derive(Debug, Default)]
struct GameTable {
    by_id: HashMap<GameId, Game>,
    by_code: HashMap<String, GameId>,
}

/// In-memory implementation of GameStore.
///
/// Id and code indexes share one lock so `create` checks and inserts atomically.
#[derive(Debug, Default)]
pub struct GameStoreMem {
    table: RwLock<GameTable>,
}

impl GameStoreMem {
    pub fn new() -> Self {
        Self::default()
    }

    fn modify(&self, game_id: GameId, f: impl FnOnce(&mut Game)) -> Result<(), DomainError> {
        let mut table = self.table.write();
        let game = table.by_id.get_mut(&game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
        })?;
        f(game);
        game.modified_at = OffsetDateTime::now_utc();
        Ok(())
    }
}

#[async_trait]
impl GameStore for GameStoreMem {
    async fn load(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.table.read().by_id.get(&game_id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Game>, DomainError> {
        let table = self.table.read();
        Ok(table
            .by_code
            .get(code)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn create(&self, game: Game) -> Result<Game, DomainError> {
        let mut table = self.table.write();
        if table.by_code.contains_key(&game.code) {
            return Err(DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                format!("join code {} already in use", game.code),
            ));
        }
        if table.by_id.contains_key(&game.id) {
            return Err(DomainError::conflict(
                ConflictKind::Other("GAME_ID".into()),
                format!("game {} already exists", game.id),
            ));
        }
        table.by_code.insert(game.code.clone(), game.id);
        table.by_id.insert(game.id, game.clone());
        Ok(game)
    }

    async fn save_started(&self, game_id: GameId) -> Result<(), DomainError> {
        self.modify(game_id, |game| game.started = true)
    }

    async fn save_turn_count(&self, game_id: GameId, turn_count: u64) -> Result<(), DomainError> {
        self.modify(game_id, |game| game.turn_count = turn_count)
    }

    async fn save_complete(&self, game_id: GameId, winner: PlayerId) -> Result<(), DomainError> {
        self.modify(game_id, |game| {
            game.complete = true;
            game.winner = Some(winner);
        })
    }
}
