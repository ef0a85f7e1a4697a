use super::GameFlowService;
use crate::domain::{Board, GameId, PlayerId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::board_states::require_latest_board;
use crate::repos::games::require_game;
use crate::repos::players::require_order;
use crate::state::AppState;

/// A player's view of a started game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateView {
    pub game_id: GameId,
    pub board: Board,
    pub players_turn: bool,
    pub ordinal: u32,
    pub total_players: u32,
    pub turn_count: u64,
    pub complete: bool,
    /// Display names in join order; index is the player's color.
    pub players: Vec<String>,
}

impl GameFlowService {
    pub async fn get_game_state(
        &self,
        state: &AppState,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<GameStateView, AppError> {
        // Same section as writers so board and turn count come from one commit
        let _guard = state.locks.lock(game_id).await;
        let game = require_game(state.games.as_ref(), game_id).await?;
        if !game.started {
            return Err(DomainError::validation(
                ValidationKind::GameNotStarted,
                format!("game {game_id} has not started"),
            )
            .into());
        }

        let order = require_order(state.roster.as_ref(), game_id, player_id).await?;
        let board = require_latest_board(state.boards.as_ref(), game_id).await?;
        let players = state
            .roster
            .list(game_id)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();

        Ok(GameStateView {
            game_id,
            board,
            players_turn: !game.complete && order.is_turn(game.turn_count),
            ordinal: order.ordinal,
            total_players: order.total_players,
            turn_count: game.turn_count,
            complete: game.complete,
            players,
        })
    }
}
