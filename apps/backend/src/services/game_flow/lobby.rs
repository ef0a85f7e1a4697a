use tracing::{debug, info, warn};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{Board, GameEvent, GameId};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::repos::board_states::append_board;
use crate::repos::games::{require_game, Game};
use crate::repos::PlayerProfile;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedGame {
    pub game_id: GameId,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    pub game_id: GameId,
    /// The player was already a member; nothing changed.
    pub already_joined: bool,
}

impl GameFlowService {
    /// Create a game with a fresh join code and join its creator.
    ///
    /// Dimensions default to the configured board size and must lie within
    /// `[2, max_board_dim]`.
    pub async fn create_game(
        &self,
        state: &AppState,
        creator: PlayerProfile,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<CreatedGame, AppError> {
        let config = state.config();
        let width = width.unwrap_or(config.default_width);
        let height = height.unwrap_or(config.default_height);
        if !config.dimension_allowed(width) || !config.dimension_allowed(height) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBoardSize,
                format!(
                    "board {width}x{height} is outside the allowed range 2..={}",
                    config.max_board_dim
                ),
            )
            .into());
        }

        let game_id = Uuid::new_v4();
        let mut created = None;
        for attempt in 1..=config.join_code_attempts {
            let code = state.codes.next_code(config.join_code_length);
            if state.games.find_by_code(&code).await?.is_some() {
                debug!(attempt, "Join code already taken; retrying");
                continue;
            }
            match state
                .games
                .create(Game::new(game_id, code, width, height))
                .await
            {
                Ok(game) => {
                    created = Some(game);
                    break;
                }
                // Lost a race for the same code since the lookup
                Err(DomainError::Conflict(ConflictKind::JoinCodeConflict, _)) => {
                    debug!(attempt, "Join code claimed concurrently; retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let Some(game) = created else {
            warn!(
                attempts = config.join_code_attempts,
                "Could not generate an unused join code"
            );
            return Err(DomainError::infra(
                InfraErrorKind::CodeGenerationExhausted,
                format!(
                    "no unused join code after {} attempts",
                    config.join_code_attempts
                ),
            )
            .into());
        };

        state.roster.join(game.id, creator.clone()).await?;
        info!(
            game_id = %game.id,
            creator_id = %creator.id,
            width,
            height,
            "Game created"
        );

        Ok(CreatedGame {
            game_id: game.id,
            code: game.code,
        })
    }

    /// Join a game by code.
    ///
    /// Joining again is not an error, even once the game has started; the
    /// outcome reports `already_joined`.
    pub async fn join_game(
        &self,
        state: &AppState,
        code: &str,
        player: PlayerProfile,
    ) -> Result<JoinOutcome, AppError> {
        let game = state.games.find_by_code(code).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("no game with code {code}"))
        })?;

        let _guard = state.locks.lock(game.id).await;
        let game = require_game(state.games.as_ref(), game.id).await?;

        if state.roster.find(game.id, player.id).await?.is_some() {
            debug!(game_id = %game.id, player_id = %player.id, "Player already joined");
            return Ok(JoinOutcome {
                game_id: game.id,
                already_joined: true,
            });
        }
        if game.started {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                format!("game {} has already started", game.id),
            )
            .into());
        }

        let player_id = player.id;
        let already_joined = match state.roster.join(game.id, player).await {
            Ok(_) => false,
            Err(DomainError::Conflict(ConflictKind::PlayerAlreadyInGame, _)) => true,
            Err(e) => return Err(e.into()),
        };
        info!(game_id = %game.id, %player_id, already_joined, "Player joined game");

        Ok(JoinOutcome {
            game_id: game.id,
            already_joined,
        })
    }

    /// Persist the initial board and open the game for moves.
    pub async fn start_game(&self, state: &AppState, game_id: GameId) -> Result<Board, AppError> {
        let _guard = state.locks.lock(game_id).await;
        let game = require_game(state.games.as_ref(), game_id).await?;

        if game.complete {
            return Err(DomainError::conflict(
                ConflictKind::GameComplete,
                format!("game {game_id} is complete"),
            )
            .into());
        }
        if game.started {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                format!("game {game_id} has already started"),
            )
            .into());
        }

        let players = state.roster.list(game_id).await?;
        if players.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NoPlayers,
                format!("game {game_id} has no players"),
            )
            .into());
        }

        let board = Board::new(game.board_width, game.board_height);
        append_board(state.boards.as_ref(), game_id, &board).await?;
        state.games.save_started(game_id).await?;

        info!(%game_id, players = players.len(), "Game started");
        state.events.publish(GameEvent::GameStarted { game_id });

        Ok(board)
    }
}
