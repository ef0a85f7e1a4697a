//! Store seams for the domain layer.
//!
//! Each module defines a record type, an async trait the engine consumes, and
//! `require_*` helpers that turn a missing record into the matching domain error.

pub mod board_states;
pub mod games;
pub mod players;

pub use board_states::BoardStateStore;
pub use games::{Game, GameStore};
pub use players::{GamePlayer, PlayerProfile, PlayerRoster};
