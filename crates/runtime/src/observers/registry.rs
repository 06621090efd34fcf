//! Observer registry for ordering and notifying wave observers.

use std::sync::Arc;

use facility_core::{Deniable, RespawnWave};
use tracing::debug;

use super::WaveObserver;

/// Ordered set of [`WaveObserver`]s.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn WaveObserver>>,
}

impl ObserverRegistry {
    /// Creates a registry from `observers`, sorted by priority.
    ///
    /// The sort is stable, so equal priorities keep the given order.
    pub fn new(mut observers: Vec<Arc<dyn WaveObserver>>) -> Self {
        observers.sort_by_key(|o| o.priority());
        Self { observers }
    }

    /// Adds an observer after every registered observer of equal or lower priority.
    pub fn register(&mut self, observer: Arc<dyn WaveObserver>) {
        let priority = observer.priority();
        let index = self
            .observers
            .partition_point(|existing| existing.priority() <= priority);
        self.observers.insert(index, observer);
    }

    /// Runs every observer against `wave` in order.
    ///
    /// A denied wave is still shown to the remaining observers; any of them may
    /// re-allow it.
    pub fn notify(&self, wave: &mut RespawnWave<'_>) {
        for observer in &self.observers {
            observer.on_respawning(wave);

            debug!(
                target: "runtime::observers",
                observer = observer.name(),
                priority = observer.priority(),
                target_faction = %wave.target(),
                admissible = wave.admissible(),
                allowed = wave.is_allowed(),
                "Observer ran"
            );
        }
    }

    /// Returns the number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Returns an iterator over observer names and priorities in execution order.
    pub fn observers(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.observers.iter().map(|o| (o.name(), o.priority()))
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.observers()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use facility_core::{ActorId, Faction, TicketLedger, WaveRules};

    use super::*;
    use crate::observers::FnObserver;

    fn named(name: &'static str, priority: i32) -> Arc<dyn WaveObserver> {
        Arc::new(FnObserver::new(name, |_: &mut RespawnWave<'_>| {}).with_priority(priority))
    }

    #[test]
    fn sorts_by_priority_keeping_registration_order() {
        let registry = ObserverRegistry::new(vec![
            named("late", 10),
            named("first_zero", 0),
            named("early", -5),
            named("second_zero", 0),
        ]);

        let order: Vec<_> = registry.observers().map(|(name, _)| name).collect();
        assert_eq!(order, ["early", "first_zero", "second_zero", "late"]);
    }

    #[test]
    fn register_inserts_after_equal_priority() {
        let mut registry = ObserverRegistry::new(vec![named("a", 0), named("z", 5)]);
        registry.register(named("b", 0));
        registry.register(named("front", -1));

        let order: Vec<_> = registry.observers().map(|(name, _)| name).collect();
        assert_eq!(order, ["front", "a", "b", "z"]);
    }

    #[test]
    fn notifies_in_order_and_later_overrides_win() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let first = FnObserver::new("clamp", move |wave: &mut RespawnWave<'_>| {
            log.lock().unwrap().push("clamp");
            wave.set_admissible(1);
        });
        let log = Arc::clone(&seen);
        let second = FnObserver::new("raise", move |wave: &mut RespawnWave<'_>| {
            log.lock().unwrap().push("raise");
            wave.set_admissible(4);
        })
        .with_priority(1);

        let registry = ObserverRegistry::new(vec![Arc::new(second), Arc::new(first)]);
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 10);
        let players = (1..=6).map(ActorId).collect();
        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, players, 6, Faction::FoundationForces);

        registry.notify(&mut wave);

        assert_eq!(*seen.lock().unwrap(), ["clamp", "raise"]);
        assert_eq!(wave.admissible(), 4);
    }
}
