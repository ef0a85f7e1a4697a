//! In-memory adapter for game membership.

use async_trait::async_trait;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::{GameId, PlayerId, PlayerOrder};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::players::{GamePlayer, PlayerProfile, PlayerRoster};

/// Members per game in join order.
#[derive(Debug, Default)]
pub struct PlayerRosterMem {
    members: DashMap<GameId, Vec<GamePlayer>>,
}

impl PlayerRosterMem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRoster for PlayerRosterMem {
    async fn join(
        &self,
        game_id: GameId,
        player: PlayerProfile,
    ) -> Result<GamePlayer, DomainError> {
        let mut members = self.members.entry(game_id).or_default();
        if members.iter().any(|m| m.player_id == player.id) {
            return Err(DomainError::conflict(
                ConflictKind::PlayerAlreadyInGame,
                format!("player {} already joined game {game_id}", player.id),
            ));
        }
        let member = GamePlayer {
            game_id,
            player_id: player.id,
            name: player.name,
            joined_at: OffsetDateTime::now_utc(),
        };
        members.push(member.clone());
        Ok(member)
    }

    async fn find(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Option<GamePlayer>, DomainError> {
        Ok(self.members.get(&game_id).and_then(|members| {
            members
                .iter()
                .find(|m| m.player_id == player_id)
                .cloned()
        }))
    }

    async fn list(&self, game_id: GameId) -> Result<Vec<GamePlayer>, DomainError> {
        Ok(self
            .members
            .get(&game_id)
            .map(|members| members.value().clone())
            .unwrap_or_default())
    }

    async fn order(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Option<PlayerOrder>, DomainError> {
        let Some(members) = self.members.get(&game_id) else {
            return Ok(None);
        };
        let order = members
            .iter()
            .position(|m| m.player_id == player_id)
            .map(|ordinal| PlayerOrder {
                ordinal: ordinal as u32,
                total_players: members.len() as u32,
            });
        Ok(order)
    }
}
