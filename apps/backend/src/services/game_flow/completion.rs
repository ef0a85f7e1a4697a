use tracing::info;

use super::GameFlowService;
use crate::domain::{game_has_ended, GameEvent, GameId, PlayerId};
use crate::error::AppError;
use crate::repos::board_states::require_latest_board;
use crate::repos::games::require_game;
use crate::repos::players::{require_order, require_player};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEndCheck {
    pub ended: bool,
    /// Winner's display name once the game has ended.
    pub winner: Option<String>,
}

impl GameFlowService {
    /// Decide whether the game is over, marking it complete if so.
    ///
    /// The asking player is recorded as winner when this call is the one that
    /// closes the game. Games that are already complete report their stored
    /// winner.
    pub async fn check_game_end(
        &self,
        state: &AppState,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<GameEndCheck, AppError> {
        let _guard = state.locks.lock(game_id).await;
        let game = require_game(state.games.as_ref(), game_id).await?;
        let order = require_order(state.roster.as_ref(), game_id, player_id).await?;

        if game.complete {
            let winner = match game.winner {
                Some(winner_id) => state
                    .roster
                    .find(game_id, winner_id)
                    .await?
                    .map(|p| p.name),
                None => None,
            };
            return Ok(GameEndCheck {
                ended: true,
                winner,
            });
        }

        // Cheap gate first: no snapshot read until everyone has moved
        if game.turn_count <= u64::from(order.total_players) {
            return Ok(GameEndCheck::default());
        }

        let board = require_latest_board(state.boards.as_ref(), game_id).await?;
        if !game_has_ended(game.turn_count, order.total_players, &board) {
            return Ok(GameEndCheck::default());
        }

        let player = require_player(state.roster.as_ref(), game_id, player_id).await?;
        state.games.save_complete(game_id, player_id).await?;
        info!(%game_id, winner_id = %player_id, turn_count = game.turn_count, "Game completed");
        state.events.publish(GameEvent::GameCompleted {
            game_id,
            winner_id: player_id,
            winner_name: player.name.clone(),
        });

        Ok(GameEndCheck {
            ended: true,
            winner: Some(player.name),
        })
    }
}
