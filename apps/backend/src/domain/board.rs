//! Board grid, chain-reaction propagation and snapshot encoding.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::domain::cell::{Cell, Color};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

/// Upper bound on explosions per move, per cell. Bounds the action log a
/// single move can produce; cascades on boards holding more charge than they
/// can at rest never settle and always hit it.
const EXPLOSIONS_PER_CELL: usize = 32;

/// Neighbor offsets in enqueue order: down, up, right, left.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Increment,
    Exploded,
}

/// One atomic event of a move, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardAction {
    pub row: usize,
    pub column: usize,
    pub kind: ActionKind,
    pub color: Color,
}

impl BoardAction {
    pub fn increment(row: usize, column: usize, color: Color) -> Self {
        Self {
            row,
            column,
            kind: ActionKind::Increment,
            color,
        }
    }

    pub fn exploded(row: usize, column: usize, color: Color) -> Self {
        Self {
            row,
            column,
            kind: ActionKind::Exploded,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Build an empty board. Corners hold 1, edges 2, interior cells 3.
    pub fn new(width: usize, height: usize) -> Self {
        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|column| Cell::new(edge_capacity(row, column, width, height)))
                    .collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Sum of charge over every cell.
    pub fn total_charge(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .map(|cell| u64::from(cell.count()))
            .sum()
    }

    /// Add one charge for `color` at `(row, column)` and resolve every
    /// resulting explosion breadth-first.
    ///
    /// Rejected moves leave the board untouched. Neighbors of an exploding
    /// cell are queued unconditionally; off-board coordinates are dropped when
    /// dequeued, and a coordinate may be processed several times in one move.
    pub fn apply_move(
        &mut self,
        row: usize,
        column: usize,
        color: Color,
    ) -> Result<Vec<BoardAction>, DomainError> {
        let target = self.cell(row, column).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CellOutOfBounds,
                format!(
                    "cell ({row}, {column}) is outside a {}x{} board",
                    self.height, self.width
                ),
            )
        })?;
        if let Some(owner) = target.owner() {
            if owner != color {
                return Err(DomainError::validation(
                    ValidationKind::CellIncrement,
                    format!("cell ({row}, {column}) is owned by color {owner}, not {color}"),
                ));
            }
        }

        self.rows[row][column].set_owner(Some(color));
        let mut actions = vec![BoardAction::increment(row, column, color)];

        let budget = EXPLOSIONS_PER_CELL * self.width * self.height;
        let mut explosions = 0usize;
        let mut queue: VecDeque<(isize, isize)> = VecDeque::new();
        queue.push_back((row as isize, column as isize));

        while let Some((r, c)) = queue.pop_front() {
            let Some((r, c)) = self.in_bounds(r, c) else {
                continue;
            };

            let cell = &mut self.rows[r][c];
            cell.set_owner(Some(color));
            if !cell.apply_charge() {
                continue;
            }

            cell.set_owner(None);
            actions.push(BoardAction::exploded(r, c, color));
            explosions += 1;
            if explosions >= budget {
                warn!(
                    explosions,
                    pending = queue.len(),
                    color,
                    "Cascade did not settle within the explosion budget; truncating"
                );
                break;
            }

            for (dr, dc) in NEIGHBOR_OFFSETS {
                queue.push_back((r as isize + dr, c as isize + dc));
            }
        }

        Ok(actions)
    }

    /// True when fewer than two distinct colors own cells.
    ///
    /// An all-neutral board counts as complete, so callers gate this behind a
    /// minimum number of turns.
    pub fn is_complete(&self) -> bool {
        let owners: HashSet<Color> = self
            .rows
            .iter()
            .flatten()
            .filter_map(Cell::owner)
            .collect();
        owners.len() < 2
    }

    /// Encode as a JSON array of rows of `{count, color, max_count}` objects.
    pub fn to_snapshot(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.rows).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::Other("SNAPSHOT_ENCODE".into()),
                format!("failed to encode board: {e}"),
            )
        })
    }

    /// Decode a snapshot produced by [`Board::to_snapshot`].
    pub fn from_snapshot(snapshot: &str) -> Result<Self, DomainError> {
        if snapshot.trim().is_empty() {
            return Err(malformed("empty board data"));
        }
        let rows: Vec<Vec<Cell>> = serde_json::from_str(snapshot)
            .map_err(|e| malformed(format!("invalid board json: {e}")))?;
        Self::from_rows(rows)
    }

    fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DomainError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(malformed("board has no cells"));
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(malformed(format!(
                    "row {row_idx} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.capacity() == 0 {
                    return Err(malformed(format!(
                        "cell ({row_idx}, {col_idx}) has zero capacity"
                    )));
                }
                if cell.count() > cell.capacity() {
                    return Err(malformed(format!(
                        "cell ({row_idx}, {col_idx}) holds {} over capacity {}",
                        cell.count(),
                        cell.capacity()
                    )));
                }
            }
        }

        Ok(Self {
            width,
            height,
            rows,
        })
    }

    fn in_bounds(&self, row: isize, column: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.height && column < self.width).then_some((row, column))
    }
}

fn edge_capacity(row: usize, column: usize, width: usize, height: usize) -> u32 {
    let mut capacity = 3;
    if column == 0 || column + 1 == width {
        capacity -= 1;
    }
    if row == 0 || row + 1 == height {
        capacity -= 1;
    }
    capacity
}

fn malformed(detail: impl Into<String>) -> DomainError {
    DomainError::infra(InfraErrorKind::DataCorruption, detail)
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        Board::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
