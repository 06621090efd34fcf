//! Narrow interfaces to host-owned subsystems.
//!
//! The rules crate never generates positions or creates world objects itself.
//! It asks the host through these traits and treats "nothing available" as an
//! ordinary answer.

use crate::role::RoleId;
use crate::types::{ActorId, Placement};

/// Handle to a hazard object created by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardHandle(pub u64);

/// Host service that places hazards into the world.
pub trait HazardPlacer {
    /// Places a tantrum hazard under `actor`.
    ///
    /// Returns `None` when the host refuses (for example, no floor below the actor).
    fn place_tantrum(&mut self, actor: ActorId) -> Option<HazardHandle>;
}

/// Host service that picks spawn points for roles.
pub trait SpawnPlacement {
    /// Returns a random spawn point for `role`, or `None` if the role has none.
    fn random_placement(&self, role: RoleId) -> Option<Placement>;
}

/// Picks a spawn point for `role`, falling back to [`Placement::ORIGIN`].
pub fn placement_or_origin<P: SpawnPlacement + ?Sized>(provider: &P, role: RoleId) -> Placement {
    provider.random_placement(role).unwrap_or(Placement::ORIGIN)
}
