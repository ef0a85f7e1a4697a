//! Lifecycle events emitted to observers after each committed change.

use serde::{Deserialize, Serialize};

use crate::domain::board::BoardAction;
use crate::domain::{GameId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Game moved from created to started; the initial board is persisted.
    GameStarted { game_id: GameId },

    /// A move was committed. `actions` is the full replay log for the move.
    MoveApplied {
        game_id: GameId,
        player_id: PlayerId,
        turn_count: u64,
        actions: Vec<BoardAction>,
    },

    /// Game moved to complete.
    GameCompleted {
        game_id: GameId,
        winner_id: PlayerId,
        winner_name: String,
    },
}

impl GameEvent {
    pub fn game_id(&self) -> GameId {
        match self {
            GameEvent::GameStarted { game_id }
            | GameEvent::MoveApplied { game_id, .. }
            | GameEvent::GameCompleted { game_id, .. } => *game_id,
        }
    }
}
