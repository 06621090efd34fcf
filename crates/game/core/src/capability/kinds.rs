//! Capability states exposed by the statue-type anomaly.

use std::collections::BTreeSet;

use crate::types::ActorId;

/// Tracks which actors currently have line of sight on the owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserversTracker {
    observers: BTreeSet<ActorId>,
}

impl ObserversTracker {
    pub fn with_observers(observers: impl IntoIterator<Item = ActorId>) -> Self {
        Self {
            observers: observers.into_iter().collect(),
        }
    }

    pub fn is_observed(&self) -> bool {
        !self.observers.is_empty()
    }

    pub fn observers(&self) -> &BTreeSet<ActorId> {
        &self.observers
    }

    /// Returns true if the actor was not already observing.
    pub fn add_observer(&mut self, actor: ActorId) -> bool {
        self.observers.insert(actor)
    }

    pub fn remove_observer(&mut self, actor: ActorId) -> bool {
        self.observers.remove(&actor)
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

/// Cooldown gate between blinks.
///
/// While the owner is held in place ("sustaining") the timer is never ready,
/// even if the cooldown has elapsed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlinkTimer {
    total_cooldown: f32,
    remaining_cooldown: f32,
    sustaining: bool,
}

impl BlinkTimer {
    /// Creates a timer that has just started a cooldown of `total_cooldown` seconds.
    pub fn new(total_cooldown: f32) -> Self {
        let total_cooldown = total_cooldown.max(0.0);
        Self {
            total_cooldown,
            remaining_cooldown: total_cooldown,
            sustaining: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_cooldown <= 0.0 && !self.sustaining
    }

    pub fn remaining_cooldown(&self) -> f32 {
        self.remaining_cooldown
    }

    pub fn total_cooldown(&self) -> f32 {
        self.total_cooldown
    }

    pub fn is_sustaining(&self) -> bool {
        self.sustaining
    }

    pub fn set_sustaining(&mut self, sustaining: bool) {
        self.sustaining = sustaining;
    }

    /// Advances the cooldown by `elapsed` seconds.
    pub fn advance(&mut self, elapsed: f32) {
        self.remaining_cooldown = (self.remaining_cooldown - elapsed.max(0.0)).max(0.0);
    }

    /// Completes the cooldown and drops any sustain.
    pub fn force_ready(&mut self) {
        self.total_cooldown = 0.0;
        self.remaining_cooldown = 0.0;
        self.sustaining = false;
    }

    /// Starts a fresh cooldown of `cooldown` seconds.
    pub fn restart(&mut self, cooldown: f32) {
        self.total_cooldown = cooldown.max(0.0);
        self.remaining_cooldown = self.total_cooldown;
    }
}

/// Temporary speed-up that doubles blink cooldowns and extends blink range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakneckSpeeds {
    active: bool,
}

impl BreakneckSpeeds {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Blink teleport range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleportAbility {
    blink_distance: f32,
    breakneck_multiplier: f32,
}

impl TeleportAbility {
    pub const DEFAULT_BREAKNECK_MULTIPLIER: f32 = 1.8;

    pub fn new(blink_distance: f32) -> Self {
        Self::with_multiplier(blink_distance, Self::DEFAULT_BREAKNECK_MULTIPLIER)
    }

    pub fn with_multiplier(blink_distance: f32, breakneck_multiplier: f32) -> Self {
        Self {
            blink_distance: blink_distance.max(0.0),
            breakneck_multiplier,
        }
    }

    pub fn blink_distance(&self) -> f32 {
        self.blink_distance
    }

    /// Maximum blink distance, scaled while breakneck speeds are active.
    pub fn effective_distance(&self, breakneck_active: bool) -> f32 {
        if breakneck_active {
            self.blink_distance * self.breakneck_multiplier
        } else {
            self.blink_distance
        }
    }
}

/// Movement speed of the owner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    max_speed: f32,
    speed: f32,
}

impl Movement {
    /// Starts moving at full speed.
    pub fn new(max_speed: f32) -> Self {
        Self {
            max_speed,
            speed: max_speed,
        }
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}
