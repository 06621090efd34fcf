use serde::{Deserialize, Serialize};

use facility_core::{ActorId, CommittedWave, Faction, TicketGrant};

use super::Topic;

/// Outcome notifications emitted by the respawn coordinator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveEvent {
    /// An empty faction was granted a fresh ticket allotment.
    Replenished {
        faction: Faction,
        granted: u32,
        tickets: u32,
    },

    /// A wave was committed and handed to the spawn executor.
    Committed {
        faction: Faction,
        actors: Vec<ActorId>,
        tickets_remaining: u32,
    },

    /// An observer denied the wave; no tickets were consumed.
    Cancelled { faction: Faction, admissible: u32 },
}

impl WaveEvent {
    pub fn topic(&self) -> Topic {
        match self {
            WaveEvent::Replenished { .. } => Topic::Tickets,
            WaveEvent::Committed { .. } | WaveEvent::Cancelled { .. } => Topic::Waves,
        }
    }

    pub fn faction(&self) -> Faction {
        match self {
            WaveEvent::Replenished { faction, .. }
            | WaveEvent::Committed { faction, .. }
            | WaveEvent::Cancelled { faction, .. } => *faction,
        }
    }
}

impl From<TicketGrant> for WaveEvent {
    fn from(grant: TicketGrant) -> Self {
        WaveEvent::Replenished {
            faction: grant.faction,
            granted: grant.amount,
            tickets: grant.balance,
        }
    }
}

impl From<&CommittedWave> for WaveEvent {
    fn from(wave: &CommittedWave) -> Self {
        WaveEvent::Committed {
            faction: wave.faction,
            actors: wave.actors.clone(),
            tickets_remaining: wave.tickets_remaining,
        }
    }
}
