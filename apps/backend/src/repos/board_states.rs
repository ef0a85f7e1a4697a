//! Append-only board snapshot history per game.

use async_trait::async_trait;

use crate::domain::{Board, GameId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait BoardStateStore: Send + Sync {
    /// Most recently appended snapshot, if any.
    async fn load_latest(&self, game_id: GameId) -> Result<Option<String>, DomainError>;

    async fn append(&self, game_id: GameId, snapshot: String) -> Result<(), DomainError>;
}

/// Decode the latest board, failing with `NoGameStateFound` if none was stored.
pub async fn require_latest_board(
    store: &dyn BoardStateStore,
    game_id: GameId,
) -> Result<Board, DomainError> {
    let snapshot = store.load_latest(game_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::GameState,
            format!("no board snapshot for game {game_id}"),
        )
    })?;
    Board::from_snapshot(&snapshot)
}

/// Encode and append a board.
pub async fn append_board(
    store: &dyn BoardStateStore,
    game_id: GameId,
    board: &Board,
) -> Result<(), DomainError> {
    store.append(game_id, board.to_snapshot()?).await
}
