//! In-memory implementations of the store seams in `crate::repos`.

pub mod board_states_mem;
pub mod games_mem;
pub mod players_mem;

pub use board_states_mem::BoardStateStoreMem;
pub use games_mem::GameStoreMem;
pub use players_mem::PlayerRosterMem;
