//! Pure facility rules shared by every host integration.
//!
//! `facility-core` classifies roles into factions and sides, exposes per-role
//! capability views, and models the respawn ticket economy. Nothing here does
//! I/O or logging; orchestration lives in `facility-runtime`, and rules tables
//! are loaded by `facility-content`.
pub mod capability;
pub mod config;
pub mod error;
pub mod event;
pub mod faction;
pub mod host;
pub mod role;
pub mod tickets;
pub mod types;
pub mod wave;

pub use capability::{
    BlinkTimer, BreakneckSpeeds, Capability, CapabilityKind, CapabilityProvider, CapabilitySet,
    CapabilityState, Movement, ObserversTracker, TeleportAbility,
};
pub use config::{RulesError, TeamWave, WaveRules};
pub use error::{ErrorSeverity, RuleError};
pub use event::Deniable;
pub use faction::{Faction, LeadingFaction, Side};
pub use host::{HazardHandle, HazardPlacer, SpawnPlacement, placement_or_origin};
pub use role::{BasicRole, RoleId, RoleView, RoleViewError, Scp173Role, faction_of_raw};
pub use tickets::TicketLedger;
pub use types::{ActorId, Placement, RoleColor, Vec3};
pub use wave::{CancelledWave, CommittedWave, RespawnWave, TicketGrant, WaveOutcome, WavePhase};
