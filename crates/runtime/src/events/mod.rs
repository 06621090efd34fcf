//! Topic-based event bus for respawn events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Publishing never blocks and never fails; a topic
//! without subscribers simply drops the event.

mod bus;
mod types;

pub use bus::{Topic, WaveEventBus};
pub use types::WaveEvent;
