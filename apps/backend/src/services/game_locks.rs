//! Per-game exclusive sections.
//!
//! Every state-changing operation on a game holds that game's guard from its
//! first read to its last write, so turn checks never run against a stale
//! `turn_count`. Different games never contend. A game's entry is removed as
//! soon as its last holder releases it with nobody waiting.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

use crate::domain::GameId;

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<GameId, Arc<Mutex<()>>>,
}

/// Held exclusive section for one game.
#[must_use = "the section ends when the guard drops"]
pub struct GameGuard<'a> {
    locks: &'a GameLocks,
    game_id: GameId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameGuard<'_> {
    fn drop(&mut self) {
        // Unlock before the idle check so our own Arc is gone
        self.guard.take();
        self.locks.release_idle(self.game_id);
    }
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the game's exclusive section. Released when the guard drops.
    pub async fn lock(&self, game_id: GameId) -> GameGuard<'_> {
        // Clone the Arc out so the map shard is not held across the await
        let lock = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        GameGuard {
            locks: self,
            game_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Remove the game's entry if nobody holds or waits on it.
    ///
    /// Waiters keep a clone of the mutex, and `lock` clones under the same
    /// shard lock `remove_if` takes, so a removed entry is never in use.
    fn release_idle(&self, game_id: GameId) -> bool {
        let removed = self
            .locks
            .remove_if(&game_id, |_, lock| Arc::strong_count(lock) == 1)
            .is_some();
        if removed {
            trace!(%game_id, remaining = self.locks.len(), "Released idle game lock");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
