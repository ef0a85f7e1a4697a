use tracing::{debug, info, warn};

use super::GameFlowService;
use crate::domain::turns::current_ordinal;
use crate::domain::{game_has_ended, BoardAction, GameEvent, GameId, PlayerId};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::board_states::{append_board, require_latest_board};
use crate::repos::games::require_game;
use crate::repos::players::{require_order, require_player};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub player_id: PlayerId,
    pub name: String,
}

/// Result of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Every increment and explosion of the move, in the order it happened.
    pub actions: Vec<BoardAction>,
    /// Turn count after the move.
    pub turn_count: u64,
    /// Set when this move ended the game.
    pub winner: Option<Winner>,
}

impl GameFlowService {
    /// Place one charge for `player_id` at `(row, column)`.
    ///
    /// Runs inside the game's exclusive section. A rejected move changes
    /// nothing; a failed snapshot write leaves the turn where it was. Once the
    /// turn is committed the move is reported even if recording the win
    /// fails; the game then refuses further moves until `check_game_end`
    /// closes it.
    pub async fn apply_move(
        &self,
        state: &AppState,
        game_id: GameId,
        player_id: PlayerId,
        row: usize,
        column: usize,
    ) -> Result<MoveOutcome, AppError> {
        let _guard = state.locks.lock(game_id).await;

        let result = self
            .apply_move_locked(state, game_id, player_id, row, column)
            .await;
        if let Err(e) = &result {
            debug!(%game_id, %player_id, row, column, code = %e.code(), "Move rejected");
        }
        result
    }

    async fn apply_move_locked(
        &self,
        state: &AppState,
        game_id: GameId,
        player_id: PlayerId,
        row: usize,
        column: usize,
    ) -> Result<MoveOutcome, AppError> {
        let game = require_game(state.games.as_ref(), game_id).await?;
        game.ensure_playable()?;

        let order = require_order(state.roster.as_ref(), game_id, player_id).await?;
        if !order.is_turn(game.turn_count) {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!(
                    "turn {} belongs to ordinal {}, not {}",
                    game.turn_count,
                    current_ordinal(game.turn_count, order.total_players),
                    order.ordinal
                ),
            )
            .into());
        }

        let mut board = require_latest_board(state.boards.as_ref(), game_id).await?;
        if game_has_ended(game.turn_count, order.total_players, &board) {
            return Err(DomainError::conflict(
                ConflictKind::GameComplete,
                format!("game {game_id} is decided and awaits completion"),
            )
            .into());
        }
        let actions = board.apply_move(row, column, order.color())?;

        append_board(state.boards.as_ref(), game_id, &board).await?;
        let turn_count = game.turn_count + 1;
        state.games.save_turn_count(game_id, turn_count).await?;

        let explosions = actions.len() - 1;
        info!(
            %game_id,
            %player_id,
            row,
            column,
            turn_count,
            explosions,
            "Move applied"
        );

        let winner = if game_has_ended(turn_count, order.total_players, &board) {
            match record_winner(state, game_id, player_id).await {
                Ok(winner) => {
                    info!(%game_id, winner_id = %player_id, turn_count, "Game completed");
                    Some(winner)
                }
                Err(e) => {
                    warn!(
                        %game_id,
                        winner_id = %player_id,
                        turn_count,
                        error = %e,
                        "Move committed but completion was not stored"
                    );
                    None
                }
            }
        } else {
            None
        };

        state.events.publish(GameEvent::MoveApplied {
            game_id,
            player_id,
            turn_count,
            actions: actions.clone(),
        });
        if let Some(winner) = &winner {
            state.events.publish(GameEvent::GameCompleted {
                game_id,
                winner_id: winner.player_id,
                winner_name: winner.name.clone(),
            });
        }

        Ok(MoveOutcome {
            actions,
            turn_count,
            winner,
        })
    }
}

async fn record_winner(
    state: &AppState,
    game_id: GameId,
    player_id: PlayerId,
) -> Result<Winner, AppError> {
    let player = require_player(state.roster.as_ref(), game_id, player_id).await?;
    state.games.save_complete(game_id, player_id).await?;
    Ok(Winner {
        player_id,
        name: player.name,
    })
}
