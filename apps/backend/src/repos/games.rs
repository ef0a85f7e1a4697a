//! Game records and the store seam the lifecycle reads and advances.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Game domain model.
///
/// The engine reads and advances `turn_count` and decides `complete`; the
/// store owns durability.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub code: String,
    pub board_width: usize,
    pub board_height: usize,
    pub started: bool,
    pub complete: bool,
    pub turn_count: u64,
    pub winner: Option<PlayerId>,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
}

impl Game {
    pub fn new(id: GameId, code: String, board_width: usize, board_height: usize) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id,
            code,
            board_width,
            board_height,
            started: false,
            complete: false,
            turn_count: 0,
            winner: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// Reject games that cannot take a move: created-but-not-started or complete.
    pub fn ensure_playable(&self) -> Result<(), DomainError> {
        if !self.started {
            return Err(DomainError::validation(
                ValidationKind::GameNotStarted,
                format!("game {} has not started", self.id),
            ));
        }
        if self.complete {
            return Err(DomainError::conflict(
                ConflictKind::GameComplete,
                format!("game {} is complete", self.id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn load(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Game>, DomainError>;

    /// Insert a new game. Fails with `JoinCodeConflict` if the code is taken.
    async fn create(&self, game: Game) -> Result<Game, DomainError>;

    async fn save_started(&self, game_id: GameId) -> Result<(), DomainError>;

    async fn save_turn_count(&self, game_id: GameId, turn_count: u64) -> Result<(), DomainError>;

    async fn save_complete(&self, game_id: GameId, winner: PlayerId) -> Result<(), DomainError>;
}

/// Load a game or fail with `GameNotFound`.
pub async fn require_game(store: &dyn GameStore, game_id: GameId) -> Result<Game, DomainError> {
    store
        .load(game_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found")))
}
