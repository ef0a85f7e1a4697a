//! Game lifecycle orchestration: bridges the pure board rules with the stores.
//!
//! Every operation that changes a game runs inside that game's exclusive
//! section (`GameLocks`) from its first read to its last write, and publishes
//! its events before releasing it.

mod completion;
mod lobby;
mod player_actions;
mod queries;

pub use completion::GameEndCheck;
pub use lobby::{CreatedGame, JoinOutcome};
pub use player_actions::{MoveOutcome, Winner};
pub use queries::GameStateView;

/// Stateless service; all shared resources come from `AppState`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }
}
