//! View over the statue-type anomaly (`SCP-173`).
//!
//! Everything here is composed from capability lookups. Reads fall back to a
//! neutral value when the capability is missing; writes to a missing
//! capability are skipped.

use std::collections::BTreeSet;

use crate::capability::{
    BlinkTimer, BreakneckSpeeds, CapabilityProvider, CapabilitySet, Movement, ObserversTracker,
    TeleportAbility,
};
use crate::host::{HazardHandle, HazardPlacer};
use crate::role::{RoleId, RoleView, RoleViewError};
use crate::types::ActorId;

/// Capability view bound to one `SCP-173` actor.
///
/// The view borrows the actor's capabilities mutably, so it cannot outlive a
/// role change or a disconnect on the owning registry.
pub struct Scp173Role<'a, P: CapabilityProvider = CapabilitySet> {
    owner: ActorId,
    capabilities: &'a mut P,
}

impl<'a, P: CapabilityProvider> Scp173Role<'a, P> {
    /// Breakneck cooldown in seconds. Fixed by the host.
    pub const BREAKNECK_COOLDOWN: f32 = 40.0;

    /// Tantrum cooldown in seconds. Fixed by the host.
    pub const TANTRUM_COOLDOWN: f32 = 30.0;

    /// Binds a view to `owner`, rejecting actors whose role is not `SCP-173`.
    pub fn new(owner: ActorId, role: RoleId, capabilities: &'a mut P) -> Result<Self, RoleViewError> {
        if role != RoleId::Scp173 {
            return Err(RoleViewError::RoleMismatch {
                actor: owner,
                expected: RoleId::Scp173,
                actual: role,
            });
        }

        Ok(Self {
            owner,
            capabilities,
        })
    }

    /// Returns true if one or more actors are looking at the owner.
    pub fn is_observed(&self) -> bool {
        self.capabilities
            .try_get::<ObserversTracker>()
            .is_some_and(ObserversTracker::is_observed)
    }

    /// Actors currently looking at the owner. Can be empty.
    pub fn observing_actors(&self) -> BTreeSet<ActorId> {
        self.capabilities
            .try_get::<ObserversTracker>()
            .map(|tracker| tracker.observers().clone())
            .unwrap_or_default()
    }

    pub fn max_movement_speed(&self) -> f32 {
        self.capabilities
            .try_get::<Movement>()
            .map_or(0.0, Movement::max_speed)
    }

    pub fn movement_speed(&self) -> f32 {
        self.capabilities
            .try_get::<Movement>()
            .map_or(0.0, Movement::speed)
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        if let Some(movement) = self.capabilities.try_get_mut::<Movement>() {
            movement.set_speed(speed);
        }
    }

    /// Returns true if the owner can blink right now.
    pub fn blink_ready(&self) -> bool {
        self.capabilities
            .try_get::<BlinkTimer>()
            .is_some_and(BlinkTimer::is_ready)
    }

    /// Setting `true` completes the current cooldown. Setting `false` does nothing;
    /// use [`set_blink_cooldown`](Self::set_blink_cooldown) to start one.
    pub fn set_blink_ready(&mut self, ready: bool) {
        if !ready {
            return;
        }
        if let Some(timer) = self.capabilities.try_get_mut::<BlinkTimer>() {
            timer.force_ready();
        }
    }

    /// Seconds until the next blink, or 0 without a blink timer.
    pub fn blink_cooldown(&self) -> f32 {
        self.capabilities
            .try_get::<BlinkTimer>()
            .map_or(0.0, BlinkTimer::remaining_cooldown)
    }

    /// Restarts the blink cooldown. Doubled while breakneck speeds are active.
    pub fn set_blink_cooldown(&mut self, cooldown: f32) {
        let scale = if self.breakneck_active() { 2.0 } else { 1.0 };
        if let Some(timer) = self.capabilities.try_get_mut::<BlinkTimer>() {
            timer.restart(cooldown * scale);
        }
    }

    /// Maximum blink distance, including the breakneck bonus.
    pub fn blink_distance(&self) -> f32 {
        let breakneck = self.breakneck_active();
        self.capabilities
            .try_get::<TeleportAbility>()
            .map_or(0.0, |teleport| teleport.effective_distance(breakneck))
    }

    pub fn breakneck_active(&self) -> bool {
        self.capabilities
            .try_get::<BreakneckSpeeds>()
            .is_some_and(BreakneckSpeeds::is_active)
    }

    pub fn set_breakneck_active(&mut self, active: bool) {
        if let Some(breakneck) = self.capabilities.try_get_mut::<BreakneckSpeeds>() {
            breakneck.set_active(active);
        }
    }

    /// The host hardcodes this value; it does not track the live cooldown.
    pub fn breakneck_cooldown(&self) -> f32 {
        Self::BREAKNECK_COOLDOWN
    }

    /// No-op: the host does not accept a breakneck cooldown.
    pub fn set_breakneck_cooldown(&mut self, _cooldown: f32) {}

    /// The host hardcodes this value; it does not track the live cooldown.
    pub fn tantrum_cooldown(&self) -> f32 {
        Self::TANTRUM_COOLDOWN
    }

    /// No-op: the host does not accept a tantrum cooldown.
    pub fn set_tantrum_cooldown(&mut self, _cooldown: f32) {}

    /// Places a tantrum under the owner.
    ///
    /// Returns `None` if `fail_if_observed` is set and someone is watching, or if
    /// the host refuses the placement.
    pub fn place_tantrum<H: HazardPlacer + ?Sized>(
        &self,
        host: &mut H,
        fail_if_observed: bool,
    ) -> Option<HazardHandle> {
        if fail_if_observed && self.is_observed() {
            return None;
        }

        host.place_tantrum(self.owner)
    }
}

impl<P: CapabilityProvider> RoleView for Scp173Role<'_, P> {
    fn owner(&self) -> ActorId {
        self.owner
    }

    fn role_id(&self) -> RoleId {
        RoleId::Scp173
    }
}
