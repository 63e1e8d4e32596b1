//! Event bus over a tokio broadcast channel

use tokio::sync::broadcast;
use tracing::debug;

use super::DomainEvent;

/// Broadcast bus for domain events
///
/// Cloning is cheap; every clone emits into the same channel. Emitting
/// with no live subscribers is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers, fire-and-forget
    pub fn emit(&self, event: DomainEvent) {
        debug!(event = event.name(), business = ?event.business_id(), "emit");
        // send only fails when nobody is subscribed
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_emitted_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.emit(DomainEvent::BusinessUpdated { id: "business:1".into() });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name(), "businessUpdated");
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_noop() {
        let bus = EventBus::new(8);
        bus.emit(DomainEvent::BusinessUpdated { id: "business:1".into() });
        assert_eq!(bus.receiver_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_the_channel() {
        let bus = EventBus::new(8);
        let clone = bus.clone();
        let mut rx = bus.subscribe();

        clone.emit(DomainEvent::NoteDeleted {
            id: "note:1".into(),
            business_id: "business:1".into(),
        });
        assert_eq!(rx.recv().await.unwrap().name(), "noteDeleted");
    }
}
