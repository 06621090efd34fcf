//! Typed access to role capabilities.
//!
//! A capability (the host calls them subroutines) is a self-contained piece of
//! role behavior such as a blink timer or an observer tracker. The host owns
//! the actual modules; this crate only sees them through
//! [`CapabilityProvider`], queried by type:
//!
//! ```ignore
//! if let Some(timer) = provider.try_get::<BlinkTimer>() {
//!     timer.remaining_cooldown();
//! }
//! ```
//!
//! A missing capability is an expected answer, not an error: roles expose
//! different subsets and callers branch on `None`.

mod kinds;

pub use kinds::{BlinkTimer, BreakneckSpeeds, Movement, ObserversTracker, TeleportAbility};

use arrayvec::ArrayVec;

/// Closed set of capability kinds known to the rules crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CapabilityKind {
    ObserversTracker,
    BlinkTimer,
    BreakneckSpeeds,
    TeleportAbility,
    Movement,
}

impl CapabilityKind {
    pub const COUNT: usize = 5;
}

/// State of a single capability, tagged by kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapabilityState {
    ObserversTracker(ObserversTracker),
    BlinkTimer(BlinkTimer),
    BreakneckSpeeds(BreakneckSpeeds),
    TeleportAbility(TeleportAbility),
    Movement(Movement),
}

impl CapabilityState {
    pub const fn kind(&self) -> CapabilityKind {
        match self {
            CapabilityState::ObserversTracker(_) => CapabilityKind::ObserversTracker,
            CapabilityState::BlinkTimer(_) => CapabilityKind::BlinkTimer,
            CapabilityState::BreakneckSpeeds(_) => CapabilityKind::BreakneckSpeeds,
            CapabilityState::TeleportAbility(_) => CapabilityKind::TeleportAbility,
            CapabilityState::Movement(_) => CapabilityKind::Movement,
        }
    }
}

/// A concrete capability type that can be projected out of [`CapabilityState`].
pub trait Capability: Sized {
    const KIND: CapabilityKind;

    fn project(state: &CapabilityState) -> Option<&Self>;

    fn project_mut(state: &mut CapabilityState) -> Option<&mut Self>;

    fn from_state(state: CapabilityState) -> Option<Self>;
}

macro_rules! impl_capability {
    ($ty:ident) => {
        impl Capability for $ty {
            const KIND: CapabilityKind = CapabilityKind::$ty;

            fn project(state: &CapabilityState) -> Option<&Self> {
                match state {
                    CapabilityState::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn project_mut(state: &mut CapabilityState) -> Option<&mut Self> {
                match state {
                    CapabilityState::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_state(state: CapabilityState) -> Option<Self> {
                match state {
                    CapabilityState::$ty(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for CapabilityState {
            fn from(value: $ty) -> Self {
                CapabilityState::$ty(value)
            }
        }
    };
}

impl_capability!(ObserversTracker);
impl_capability!(BlinkTimer);
impl_capability!(BreakneckSpeeds);
impl_capability!(TeleportAbility);
impl_capability!(Movement);

/// Source of capability state for one actor.
///
/// Implemented by [`CapabilitySet`]; hosts with their own module graph can
/// implement it directly.
pub trait CapabilityProvider {
    /// Returns the capability of type `C`, or `None` if the role lacks it.
    fn try_get<C: Capability>(&self) -> Option<&C>;

    /// Mutable variant of [`try_get`](Self::try_get).
    fn try_get_mut<C: Capability>(&mut self) -> Option<&mut C>;

    fn has<C: Capability>(&self) -> bool {
        self.try_get::<C>().is_some()
    }
}

/// Owned capability states for one actor, at most one per kind.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilitySet {
    states: ArrayVec<CapabilityState, { CapabilityKind::COUNT }>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, capability: impl Into<CapabilityState>) -> Self {
        self.insert(capability);
        self
    }

    /// Inserts a capability, replacing (and returning) any state of the same kind.
    pub fn insert(&mut self, capability: impl Into<CapabilityState>) -> Option<CapabilityState> {
        let state = capability.into();
        if let Some(index) = self.states.iter().position(|s| s.kind() == state.kind()) {
            return Some(core::mem::replace(&mut self.states[index], state));
        }
        // One slot per kind, so the set can never be full here.
        self.states.push(state);
        None
    }

    /// Removes the capability of type `C`, returning it if present.
    pub fn remove<C: Capability>(&mut self) -> Option<C> {
        let index = self.states.iter().position(|s| s.kind() == C::KIND)?;
        C::from_state(self.states.remove(index))
    }

    pub fn kinds(&self) -> impl Iterator<Item = CapabilityKind> + '_ {
        self.states.iter().map(CapabilityState::kind)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl CapabilityProvider for CapabilitySet {
    fn try_get<C: Capability>(&self) -> Option<&C> {
        self.states.iter().find_map(C::project)
    }

    fn try_get_mut<C: Capability>(&mut self) -> Option<&mut C> {
        self.states.iter_mut().find_map(C::project_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count_covers_every_kind() {
        assert_eq!(CapabilityKind::iter().count(), CapabilityKind::COUNT);
    }

    #[test]
    fn lookup_by_type() {
        let set = CapabilitySet::new()
            .with(BlinkTimer::new(3.0))
            .with(ObserversTracker::default());

        assert!(set.has::<BlinkTimer>());
        assert!(set.has::<ObserversTracker>());
        assert!(set.try_get::<TeleportAbility>().is_none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_replaces_same_kind() {
        let mut set = CapabilitySet::new().with(BreakneckSpeeds::default());

        let previous = set.insert(BreakneckSpeeds::active());

        assert_eq!(
            previous,
            Some(CapabilityState::BreakneckSpeeds(BreakneckSpeeds::default()))
        );
        assert_eq!(set.len(), 1);
        assert!(set.try_get::<BreakneckSpeeds>().unwrap().is_active());
    }

    #[test]
    fn every_kind_fits_at_once() {
        let set = CapabilitySet::new()
            .with(ObserversTracker::default())
            .with(BlinkTimer::new(3.0))
            .with(BreakneckSpeeds::default())
            .with(TeleportAbility::new(8.0))
            .with(Movement::new(5.5));

        let kinds: Vec<_> = set.kinds().collect();
        assert_eq!(kinds.len(), CapabilityKind::COUNT);
    }

    #[test]
    fn remove_returns_typed_state() {
        let mut set = CapabilitySet::new().with(TeleportAbility::new(8.0));

        let removed = set.remove::<TeleportAbility>();

        assert_eq!(removed, Some(TeleportAbility::new(8.0)));
        assert!(set.is_empty());
        assert_eq!(set.remove::<TeleportAbility>(), None);
    }

    #[test]
    fn mutation_through_provider() {
        let mut set = CapabilitySet::new().with(Movement::new(5.5));

        if let Some(movement) = set.try_get_mut::<Movement>() {
            movement.set_speed(2.0);
        }

        assert_eq!(set.try_get::<Movement>().map(Movement::speed), Some(2.0));
    }
}
