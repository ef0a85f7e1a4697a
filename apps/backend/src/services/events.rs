//! Delivery of lifecycle events to observers.

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::GameEvent;

/// Receives events after the change they describe has been persisted.
///
/// Called while the game's exclusive section is held, so implementations must
/// not block or call back into the engine for the same game.
pub trait GameEventSink: Send + Sync {
    fn publish(&self, event: GameEvent);
}

/// Fans events out to every live subscriber over a broadcast channel.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<GameEvent>,
}

impl BroadcastSink {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.tx.subscribe()
    }
}

impl GameEventSink for BroadcastSink {
    fn publish(&self, event: GameEvent) {
        let game_id = event.game_id();
        if let Err(broadcast::error::SendError(event)) = self.tx.send(event) {
            debug!(%game_id, ?event, "No event subscribers; dropping event");
        }
    }
}
