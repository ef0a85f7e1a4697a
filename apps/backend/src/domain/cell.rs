use serde::{Deserialize, Serialize};

/// Color identifier for a player; the player's join ordinal.
pub type Color = u32;

/// A single board location.
///
/// Serialized as `{"count": n, "color": c | null, "max_count": m}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    count: u32,
    #[serde(rename = "color", default)]
    owner: Option<Color>,
    #[serde(rename = "max_count")]
    capacity: u32,
}

impl Cell {
    pub fn new(capacity: u32) -> Self {
        Self {
            count: 0,
            owner: None,
            capacity,
        }
    }

    #[cfg(test)]
    pub(crate) fn restore(count: u32, owner: Option<Color>, capacity: u32) -> Self {
        Self {
            count,
            owner,
            capacity,
        }
    }

    pub fn owner(&self) -> Option<Color> {
        self.owner
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// No validation; callers decide whether the change is legal.
    pub fn set_owner(&mut self, owner: Option<Color>) {
        self.owner = owner;
    }

    /// Add one unit of charge. Returns `true` when the cell exceeded its
    /// capacity, in which case the count has been reset to zero.
    pub fn apply_charge(&mut self) -> bool {
        self.count += 1;
        if self.count > self.capacity {
            self.count = 0;
            return true;
        }
        false
    }
}
