//! Respawn coordinator owning the ticket ledger and wave rules.
//!
//! One call to [`RespawnCoordinator::run_wave`] drives a whole wave:
//!
//! ```text
//! propose ─► reissue ─► observers (priority order) ─► commit ─► executor ─► events
//! ```
//!
//! The coordinator needs `&mut self` for every ledger mutation. A host that
//! schedules waves from several threads wraps it in a single `Mutex`.

use std::sync::Arc;

use facility_content::RulesLoader;
use facility_core::{
    ActorId, Faction, RespawnWave, TicketLedger, WaveOutcome, WaveRules,
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::events::{Topic, WaveEvent, WaveEventBus};
use crate::observers::{ObserverRegistry, WaveObserver};
use crate::spawn::SpawnExecutor;

pub struct RespawnCoordinator {
    ledger: TicketLedger,
    rules: WaveRules,
    observers: ObserverRegistry,
    events: WaveEventBus,
}

impl RespawnCoordinator {
    /// Create a new coordinator builder
    pub fn builder() -> RespawnCoordinatorBuilder {
        RespawnCoordinatorBuilder::new()
    }

    /// Coordinator with `rules`, an empty ledger and no observers.
    pub fn new(rules: WaveRules) -> Self {
        Self {
            ledger: TicketLedger::new(),
            rules,
            observers: ObserverRegistry::default(),
            events: WaveEventBus::default(),
        }
    }

    /// Proposes a wave without running observers.
    ///
    /// The caller owns the rest of the lifecycle: it may apply overrides and
    /// must [`commit`](RespawnWave::commit) to consume tickets.
    pub fn propose(
        &mut self,
        players: Vec<ActorId>,
        requested_max: u32,
        target: Faction,
    ) -> RespawnWave<'_> {
        RespawnWave::propose(&mut self.ledger, &self.rules, players, requested_max, target)
    }

    /// Runs one complete wave.
    ///
    /// The executor is only called for a committed wave with at least one
    /// actor. An executor failure is returned after the tickets have been
    /// consumed, and no `Committed` event is published for that wave.
    pub fn run_wave(
        &mut self,
        players: Vec<ActorId>,
        requested_max: u32,
        target: Faction,
        executor: &mut dyn SpawnExecutor,
    ) -> Result<WaveOutcome> {
        let candidates = players.len();
        let mut wave =
            RespawnWave::propose(&mut self.ledger, &self.rules, players, requested_max, target);

        debug!(
            target: "runtime::respawn",
            faction = %target,
            candidates,
            requested_max,
            admissible = wave.admissible(),
            tickets = wave.tickets_available(),
            "Wave proposed"
        );

        self.observers.notify(&mut wave);
        let outcome = wave.commit();

        for grant in outcome.grants() {
            info!(
                target: "runtime::respawn",
                faction = %grant.faction,
                granted = grant.amount,
                tickets = grant.balance,
                "Tickets replenished"
            );
            self.events.publish(WaveEvent::from(*grant));
        }

        match &outcome {
            WaveOutcome::Cancelled(cancelled) => {
                info!(
                    target: "runtime::respawn",
                    faction = %cancelled.faction,
                    admissible = cancelled.admissible,
                    "Wave denied by observer"
                );
                self.events.publish(WaveEvent::Cancelled {
                    faction: cancelled.faction,
                    admissible: cancelled.admissible,
                });
            }
            WaveOutcome::Committed(committed) => {
                if !committed.is_empty()
                    && let Err(error) = executor.spawn_wave(committed)
                {
                    warn!(
                        target: "runtime::respawn",
                        executor = executor.name(),
                        faction = %committed.faction,
                        error = %error,
                        "Spawn executor failed"
                    );
                    return Err(error);
                }

                info!(
                    target: "runtime::respawn",
                    faction = %committed.faction,
                    spawned = committed.count(),
                    tickets_consumed = committed.tickets_consumed,
                    tickets_remaining = committed.tickets_remaining,
                    "Wave committed"
                );
                self.events.publish(WaveEvent::from(committed));
            }
        }

        Ok(outcome)
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    pub fn tickets(&self, faction: Faction) -> u32 {
        self.ledger.tickets(faction)
    }

    /// Adds tickets outside of a wave (objectives, admin commands).
    pub fn grant(&mut self, faction: Faction, amount: u32) -> u32 {
        let balance = self.ledger.grant(faction, amount);
        debug!(
            target: "runtime::respawn",
            faction = %faction,
            amount,
            balance,
            "Tickets granted"
        );
        balance
    }

    /// Drops every ticket balance, as at the start of a round.
    pub fn reset_round(&mut self) {
        self.ledger.clear();
        debug!(target: "runtime::respawn", "Ticket ledger reset");
    }

    pub fn rules(&self) -> &WaveRules {
        &self.rules
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn register_observer(&mut self, observer: impl WaveObserver + 'static) {
        self.observers.register(Arc::new(observer));
    }

    pub fn events(&self) -> &WaveEventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<WaveEvent> {
        self.events.subscribe(topic)
    }
}

/// Builder for [`RespawnCoordinator`].
pub struct RespawnCoordinatorBuilder {
    config: RuntimeConfig,
    rules: Option<WaveRules>,
    ledger: TicketLedger,
    observers: Vec<Arc<dyn WaveObserver>>,
}

impl RespawnCoordinatorBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rules: None,
            ledger: TicketLedger::new(),
            observers: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `rules` instead of loading them from the configuration.
    pub fn rules(mut self, rules: WaveRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Starting ticket balances
    pub fn ledger(mut self, ledger: TicketLedger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn observer(mut self, observer: impl WaveObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn observers(mut self, observers: impl IntoIterator<Item = Arc<dyn WaveObserver>>) -> Self {
        self.observers.extend(observers);
        self
    }

    /// Build the coordinator.
    ///
    /// Without explicit rules, the table comes from `config.rules_path` or the
    /// bundled table. Either way the rules are validated.
    pub fn build(self) -> Result<RespawnCoordinator> {
        let rules = match self.rules {
            Some(rules) => rules,
            None => match &self.config.rules_path {
                Some(path) => RulesLoader::load(path)?,
                None => RulesLoader::bundled()?,
            },
        };
        rules.validate()?;

        let observers = ObserverRegistry::new(self.observers);
        info!(
            target: "runtime::respawn",
            replenish_tickets = rules.replenish_tickets,
            teams = rules.teams.len(),
            observers = observers.len(),
            "Respawn coordinator ready"
        );

        Ok(RespawnCoordinator {
            ledger: self.ledger,
            rules,
            observers,
            events: WaveEventBus::with_capacity(self.config.event_capacity),
        })
    }
}
