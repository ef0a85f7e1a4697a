//! Round-robin turn math and the end-of-game gate.
//!
//! Every layer shares these helpers as the single source of truth for
//! "whose turn is it" and "has the game ended".

use serde::Serialize;

use crate::domain::board::Board;
use crate::domain::cell::Color;

/// A player's position in a game's join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerOrder {
    /// 0-based rank by join time.
    pub ordinal: u32,
    /// Number of players who joined the game.
    pub total_players: u32,
}

impl PlayerOrder {
    pub fn is_turn(&self, turn_count: u64) -> bool {
        is_players_turn(turn_count, self.ordinal, self.total_players)
    }

    /// Players paint the board with their ordinal.
    pub fn color(&self) -> Color {
        self.ordinal
    }
}

/// `turn_count mod total_players == ordinal`.
///
/// # Panics
///
/// If `total_players` is zero. Games cannot start without players, so this
/// only happens through a bug in the caller.
#[inline]
pub fn is_players_turn(turn_count: u64, ordinal: u32, total_players: u32) -> bool {
    assert!(total_players > 0, "turn order requires at least one player");
    turn_count % u64::from(total_players) == u64::from(ordinal)
}

/// Ordinal of the player expected to move at `turn_count`.
#[inline]
pub fn current_ordinal(turn_count: u64, total_players: u32) -> u32 {
    assert!(total_players > 0, "turn order requires at least one player");
    (turn_count % u64::from(total_players)) as u32
}

/// A game ends once every player has had a turn (`turn_count > total_players`)
/// and the board holds at most one color.
pub fn game_has_ended(turn_count: u64, total_players: u32, board: &Board) -> bool {
    turn_count > u64::from(total_players) && board.is_complete()
}
