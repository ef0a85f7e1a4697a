//! Error codes for the dots engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! transport layer puts in its responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player has not joined the game
    PlayerNotFound,
    /// Started game has no board snapshot
    NoGameStateFound,

    // Lifecycle Conflicts
    /// Game was already started
    GameAlreadyStarted,
    /// Game already has a winner
    GameComplete,
    /// Player is already a member of the game
    PlayerAlreadyInGame,
    /// Join code collides with an existing game
    JoinCodeConflict,

    // Move Validation
    /// Game has not been started yet
    GameNotStarted,
    /// Acting player is not the current player
    NotPlayersTurn,
    /// Target cell belongs to another color
    CellIncrementError,
    /// Target cell lies outside the board
    CellOutOfBounds,
    /// Requested board dimensions are not allowed
    InvalidBoardSize,
    /// Game has no joined players
    NoPlayers,
    /// General validation error
    ValidationError,
    /// General not found error
    NotFound,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// No unused join code could be generated
    CodeGenerationExhausted,
    /// Stored board snapshot is malformed
    MalformedBoardData,
    /// Persistence collaborator failed
    StorageError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NoGameStateFound => "NO_GAME_STATE_FOUND",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameComplete => "GAME_COMPLETE",
            Self::PlayerAlreadyInGame => "PLAYER_ALREADY_IN_GAME",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",

            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::CellIncrementError => "CELL_INCREMENT_ERROR",
            Self::CellOutOfBounds => "CELL_OUT_OF_BOUNDS",
            Self::InvalidBoardSize => "INVALID_BOARD_SIZE",
            Self::NoPlayers => "NO_PLAYERS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",

            Self::CodeGenerationExhausted => "CODE_GENERATION_EXHAUSTED",
            Self::MalformedBoardData => "MALFORMED_BOARD_DATA",
            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
