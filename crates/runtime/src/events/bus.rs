//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::WaveEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Ticket ledger changes (replenishment)
    Tickets,
    /// Wave outcomes (committed, cancelled)
    Waves,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Tickets, Topic::Waves];
}

/// Topic-based event bus
///
/// Cloning shares the underlying channels.
#[derive(Clone, Debug)]
pub struct WaveEventBus {
    tickets: broadcast::Sender<WaveEvent>,
    waves: broadcast::Sender<WaveEvent>,
}

impl WaveEventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(crate::RuntimeConfig::DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            tickets: broadcast::channel(capacity).0,
            waves: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<WaveEvent> {
        match topic {
            Topic::Tickets => &self.tickets,
            Topic::Waves => &self.waves,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: WaveEvent) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!(target: "runtime::events", ?topic, "No subscribers for topic");
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<WaveEvent> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<WaveEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for WaveEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use facility_core::Faction;

    use super::*;

    #[test]
    fn routes_events_by_topic() {
        let bus = WaveEventBus::with_capacity(4);
        let mut tickets = bus.subscribe(Topic::Tickets);
        let mut waves = bus.subscribe(Topic::Waves);

        bus.publish(WaveEvent::Cancelled {
            faction: Faction::ChaosInsurgency,
            admissible: 3,
        });

        assert!(tickets.try_recv().is_err());
        assert_eq!(
            waves.try_recv().unwrap(),
            WaveEvent::Cancelled {
                faction: Faction::ChaosInsurgency,
                admissible: 3,
            }
        );
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = WaveEventBus::default();
        bus.publish(WaveEvent::Replenished {
            faction: Faction::FoundationForces,
            granted: 5,
            tickets: 5,
        });
        assert_eq!(bus.subscriber_count(Topic::Tickets), 0);
    }

    #[test]
    fn clones_share_channels() {
        let bus = WaveEventBus::default();
        let mut rx = bus.clone().subscribe(Topic::Tickets);

        bus.publish(WaveEvent::Replenished {
            faction: Faction::ChaosInsurgency,
            granted: 5,
            tickets: 5,
        });

        assert!(matches!(
            rx.try_recv(),
            Ok(WaveEvent::Replenished { granted: 5, .. })
        ));
    }

    #[test]
    fn subscribe_multiple_opens_one_receiver_per_topic() {
        let bus = WaveEventBus::default();
        let mut receivers = bus.subscribe_multiple(&Topic::ALL);

        assert_eq!(receivers.len(), 2);
        assert_eq!(bus.subscriber_count(Topic::Tickets), 1);
        assert_eq!(bus.subscriber_count(Topic::Waves), 1);

        bus.publish(WaveEvent::Cancelled {
            faction: Faction::FoundationForces,
            admissible: 0,
        });

        let waves = receivers.get_mut(&Topic::Waves).unwrap();
        assert!(matches!(waves.try_recv(), Ok(WaveEvent::Cancelled { .. })));
        let tickets = receivers.get_mut(&Topic::Tickets).unwrap();
        assert!(tickets.try_recv().is_err());
    }
}
