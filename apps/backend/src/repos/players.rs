//! Game membership and join order.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId, PlayerOrder};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Identity handed in by the caller; registration lives outside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerProfile {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamePlayer {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub name: String,
    pub joined_at: OffsetDateTime,
}

#[async_trait]
pub trait PlayerRoster: Send + Sync {
    /// Add a player. Fails with `PlayerAlreadyInGame` on a repeat join.
    async fn join(&self, game_id: GameId, player: PlayerProfile)
        -> Result<GamePlayer, DomainError>;

    async fn find(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Option<GamePlayer>, DomainError>;

    /// Players in join order.
    async fn list(&self, game_id: GameId) -> Result<Vec<GamePlayer>, DomainError>;

    /// Rank of the player by join time plus the number of joined players.
    async fn order(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Option<PlayerOrder>, DomainError>;
}

pub async fn require_player(
    roster: &dyn PlayerRoster,
    game_id: GameId,
    player_id: PlayerId,
) -> Result<GamePlayer, DomainError> {
    roster
        .find(game_id, player_id)
        .await?
        .ok_or_else(|| player_not_found(game_id, player_id))
}

pub async fn require_order(
    roster: &dyn PlayerRoster,
    game_id: GameId,
    player_id: PlayerId,
) -> Result<PlayerOrder, DomainError> {
    roster
        .order(game_id, player_id)
        .await?
        .ok_or_else(|| player_not_found(game_id, player_id))
}

fn player_not_found(game_id: GameId, player_id: PlayerId) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("player {player_id} has not joined game {game_id}"),
    )
}
