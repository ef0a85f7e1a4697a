//! Property tests for the board (pure domain, no stores).
//!
//! Ruleset contract:
//! - Capacity is 3 minus the number of board edges a cell touches
//! - A legal move adds exactly one unit of charge to the board
//! - A rejected move leaves the board unchanged
//! - Between moves every cell holds at most its capacity
//! - Snapshots round-trip exactly

use proptest::prelude::*;

use crate::domain::board::Board;
use crate::domain::test_prelude;
use crate::errors::domain::{DomainError, ValidationKind};

/// Board dimensions plus a move list short enough to always settle.
///
/// Chip-firing on a graph with `E` edges terminates whenever the total charge
/// is below `E`. Moves are capped at `E / 2` so cascades also stay far inside
/// the per-move explosion cap.
fn board_and_moves() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize, u32)>)> {
    (2usize..=7, 2usize..=7).prop_flat_map(|(width, height)| {
        let edges = (width - 1) * height + (height - 1) * width;
        let moves = prop::collection::vec((0..height, 0..width, 0u32..3), 0..edges / 2);
        (Just(width), Just(height), moves)
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: capacity depends only on how many edges a cell touches.
    #[test]
    fn prop_capacity_from_geometry(width in 2usize..=16, height in 2usize..=16) {
        let board = Board::new(width, height);
        for (row, cells) in board.rows().iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let on_row_edge = row == 0 || row == height - 1;
                let on_col_edge = column == 0 || column == width - 1;
                let expected = match (on_row_edge, on_col_edge) {
                    (true, true) => 1,
                    (true, false) | (false, true) => 2,
                    (false, false) => 3,
                };
                prop_assert_eq!(cell.capacity(), expected);
            }
        }
    }

    /// Property: legal moves add one charge, illegal moves change nothing,
    /// and the board is at rest after every move.
    #[test]
    fn prop_moves_conserve_charge((width, height, moves) in board_and_moves()) {
        let mut board = Board::new(width, height);

        for (row, column, color) in moves {
            let before = board.clone();
            match board.apply_move(row, column, color) {
                Ok(actions) => {
                    prop_assert!(!actions.is_empty());
                    prop_assert_eq!(board.total_charge(), before.total_charge() + 1);
                }
                Err(DomainError::Validation(ValidationKind::CellIncrement, _)) => {
                    prop_assert_eq!(&board, &before);
                    let owner = before.cell(row, column).and_then(|c| c.owner());
                    prop_assert!(owner.is_some() && owner != Some(color));
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
            }
            prop_assert!(board
                .rows()
                .iter()
                .flatten()
                .all(|c| c.count() <= c.capacity()));
        }
    }

    /// Property: snapshot encoding is lossless for any reachable board.
    #[test]
    fn prop_snapshot_round_trip((width, height, moves) in board_and_moves()) {
        let mut board = Board::new(width, height);
        for (row, column, color) in moves {
            let _ = board.apply_move(row, column, color);
        }

        let snapshot = board.to_snapshot().unwrap();
        let restored = Board::from_snapshot(&snapshot).unwrap();
        prop_assert_eq!(restored.width(), width);
        prop_assert_eq!(restored.height(), height);
        prop_assert_eq!(&restored, &board);
    }
}
