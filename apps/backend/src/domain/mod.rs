//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod cell;
pub mod game_event;
pub mod turns;

#[cfg(test)]
mod tests_props_board;

use uuid::Uuid;

pub type GameId = Uuid;
pub type PlayerId = Uuid;

// Re-exports for ergonomics
pub use board::{ActionKind, Board, BoardAction};
pub use cell::{Cell, Color};
pub use game_event::GameEvent;
pub use turns::{game_has_ended, is_players_turn, PlayerOrder};
