//! Actor registry owning role assignments and capability state.
//!
//! The registry is the single owner of every actor's [`CapabilitySet`]. Role
//! views borrow from it, so a view cannot be held across a role change or a
//! disconnect.
//!
//! ```text
//! ActorRegistry
//! ├── actors: BTreeMap<ActorId, ActorRecord>  (role + capabilities + placement)
//! └── turned_away: BTreeSet<ActorId>          (per-round, cleared by reset_round)
//! ```

use std::collections::{BTreeMap, BTreeSet};

use facility_core::{
    ActorId, BasicRole, BlinkTimer, BreakneckSpeeds, CapabilityProvider, CapabilitySet, Faction,
    Movement, ObserversTracker, Placement, RoleId, Scp173Role, TeleportAbility,
};
use tracing::debug;

use crate::error::{Result, RuntimeError};

/// Stock capability values for a freshly assigned `SCP-173`.
pub mod scp173_kit {
    pub const BLINK_COOLDOWN: f32 = 3.0;
    pub const BLINK_DISTANCE: f32 = 8.0;
    pub const MAX_MOVEMENT_SPEED: f32 = 5.5;
}

/// Capability kit granted on role assignment.
pub fn default_capabilities(role: RoleId) -> CapabilitySet {
    match role {
        RoleId::Scp173 => CapabilitySet::new()
            .with(ObserversTracker::default())
            .with(BlinkTimer::new(scp173_kit::BLINK_COOLDOWN))
            .with(BreakneckSpeeds::default())
            .with(TeleportAbility::new(scp173_kit::BLINK_DISTANCE))
            .with(Movement::new(scp173_kit::MAX_MOVEMENT_SPEED)),
        _ => CapabilitySet::new(),
    }
}

/// Registry entry for one connected actor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActorRecord {
    role: RoleId,
    capabilities: CapabilitySet,
    placement: Option<Placement>,
}

impl ActorRecord {
    pub fn role(&self) -> RoleId {
        self.role
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Placement from the last spawn, if any.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActorRegistry {
    actors: BTreeMap<ActorId, ActorRecord>,
    turned_away: BTreeSet<ActorId>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `actor` with no role. Returns false if it was already connected.
    pub fn connect(&mut self, actor: ActorId) -> bool {
        if self.actors.contains_key(&actor) {
            return false;
        }
        self.actors.insert(actor, ActorRecord::default());
        debug!(target: "runtime::registry", %actor, "Actor connected");
        true
    }

    /// Removes `actor` along with every trace of it in other actors' state.
    pub fn disconnect(&mut self, actor: ActorId) -> Option<ActorRecord> {
        let record = self.actors.remove(&actor)?;
        self.turned_away.remove(&actor);
        for other in self.actors.values_mut() {
            if let Some(tracker) = other.capabilities.try_get_mut::<ObserversTracker>() {
                tracker.remove_observer(actor);
            }
        }
        debug!(target: "runtime::registry", %actor, role = %record.role, "Actor disconnected");
        Some(record)
    }

    /// Gives `actor` a new role with that role's stock capability kit.
    pub fn assign_role(
        &mut self,
        actor: ActorId,
        role: RoleId,
        placement: Option<Placement>,
    ) -> Result<()> {
        let record = self
            .actors
            .get_mut(&actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;

        let previous = record.role;
        record.role = role;
        record.capabilities = default_capabilities(role);
        record.placement = placement;

        debug!(
            target: "runtime::registry",
            %actor,
            from = %previous,
            to = %role,
            "Role assigned"
        );
        Ok(())
    }

    pub fn contains(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    pub fn get(&self, actor: ActorId) -> Option<&ActorRecord> {
        self.actors.get(&actor)
    }

    pub fn role(&self, actor: ActorId) -> Option<RoleId> {
        self.actors.get(&actor).map(ActorRecord::role)
    }

    /// Faction of `actor`, recomputed from its role.
    pub fn faction(&self, actor: ActorId) -> Option<Faction> {
        self.role(actor).map(RoleId::faction)
    }

    pub fn capabilities_mut(&mut self, actor: ActorId) -> Option<&mut CapabilitySet> {
        self.actors
            .get_mut(&actor)
            .map(|record| &mut record.capabilities)
    }

    /// Generic identity view for any actor.
    pub fn view(&self, actor: ActorId) -> Result<BasicRole> {
        let role = self.role(actor).ok_or(RuntimeError::UnknownActor(actor))?;
        Ok(BasicRole::new(actor, role))
    }

    /// `SCP-173` view over `actor`, failing if the actor has another role.
    pub fn scp173(&mut self, actor: ActorId) -> Result<Scp173Role<'_>> {
        let record = self
            .actors
            .get_mut(&actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        Ok(Scp173Role::new(actor, record.role, &mut record.capabilities)?)
    }

    /// Marks that `observer` is (or stopped) looking at `target`.
    ///
    /// Does nothing if `target` has no observer tracker.
    pub fn set_observing(&mut self, observer: ActorId, target: ActorId, observing: bool) -> bool {
        let Some(tracker) = self
            .capabilities_mut(target)
            .and_then(|caps| caps.try_get_mut::<ObserversTracker>())
        else {
            return false;
        };

        if observing {
            tracker.add_observer(observer)
        } else {
            tracker.remove_observer(observer)
        }
    }

    /// Records that `actor` turned away from an anomaly this round.
    ///
    /// Returns false if the actor is unknown or was already recorded.
    pub fn turn_away(&mut self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor) && self.turned_away.insert(actor)
    }

    pub fn is_turned_away(&self, actor: ActorId) -> bool {
        self.turned_away.contains(&actor)
    }

    pub fn turned_away(&self) -> &BTreeSet<ActorId> {
        &self.turned_away
    }

    /// Clears per-round state.
    pub fn reset_round(&mut self) {
        self.turned_away.clear();
    }

    /// Spectators waiting for a respawn wave, in id order. The host is never one.
    pub fn respawn_candidates(&self) -> Vec<ActorId> {
        self.actors
            .iter()
            .filter(|(actor, record)| !actor.is_host() && record.role == RoleId::Spectator)
            .map(|(actor, _)| *actor)
            .collect()
    }

    /// Actors whose role belongs to `faction`.
    pub fn members_of(&self, faction: Faction) -> impl Iterator<Item = ActorId> + '_ {
        self.actors
            .iter()
            .filter(move |(_, record)| record.role.faction() == faction)
            .map(|(actor, _)| *actor)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
