//! Respawn wave admission.
//!
//! A [`RespawnWave`] is the mutable record of one pending wave. Its lifecycle is
//! strictly ordered:
//!
//! ```text
//! propose ──► Proposed ──reissue──► Resolved ──(observers)──► commit
//!                                       ▲   │                   ├─► Committed
//!                                       └───┘ set_target        └─► Cancelled
//! ```
//!
//! Every (re)targeting runs the reissue step against the shared
//! [`TicketLedger`]: an empty faction is granted a fresh allotment and the
//! admissible count becomes `min(tickets, cap)`. The requested size only seeds
//! the initial record. [`RespawnWave::commit`] consumes the record, so nothing
//! can touch it after the cutoff.

use crate::config::{TeamWave, WaveRules};
use crate::event::Deniable;
use crate::faction::Faction;
use crate::tickets::TicketLedger;
use crate::types::ActorId;

/// Lifecycle phase of a wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WavePhase {
    Proposed,
    Resolved,
    Committed,
    Cancelled,
}

/// Pending respawn wave, open to inspection and overrides until committed.
#[derive(Debug)]
pub struct RespawnWave<'a> {
    ledger: &'a mut TicketLedger,
    rules: &'a WaveRules,
    players: Vec<ActorId>,
    requested_max: u32,
    target: Faction,
    admissible: u32,
    allowed: bool,
    grants: Vec<TicketGrant>,
    phase: WavePhase,
}

impl<'a> RespawnWave<'a> {
    /// Proposes a wave for `target` from `players`.
    ///
    /// `requested_max` (clamped to the cap) is the initial admissible count; the
    /// returned wave is already resolved against the ledger, which replaces it.
    pub fn propose(
        ledger: &'a mut TicketLedger,
        rules: &'a WaveRules,
        players: Vec<ActorId>,
        requested_max: u32,
        target: Faction,
    ) -> Self {
        let mut wave = Self {
            ledger,
            rules,
            players,
            requested_max,
            target,
            admissible: requested_max.min(rules.max_wave_size(target)),
            allowed: true,
            grants: Vec::new(),
            phase: WavePhase::Proposed,
        };
        wave.reissue();
        wave
    }

    /// Candidate actors, in spawn priority order.
    pub fn players(&self) -> &[ActorId] {
        &self.players
    }

    /// Candidate list, open to reordering or filtering before commit.
    pub fn players_mut(&mut self) -> &mut Vec<ActorId> {
        &mut self.players
    }

    pub fn target(&self) -> Faction {
        self.target
    }

    pub fn requested_max(&self) -> u32 {
        self.requested_max
    }

    /// Number of actors the wave will admit at commit (before truncation to
    /// the candidate count).
    pub fn admissible(&self) -> u32 {
        self.admissible
    }

    /// Wave size cap of the current target.
    pub fn max_wave_size(&self) -> u32 {
        self.rules.max_wave_size(self.target)
    }

    /// Current ledger balance of the target.
    pub fn tickets_available(&self) -> u32 {
        self.ledger.tickets(self.target)
    }

    /// Tickets granted by replenishment since the wave was proposed.
    pub fn granted_tickets(&self) -> u32 {
        total_granted(&self.grants)
    }

    /// Replenishments made while resolving this wave, oldest first.
    pub fn grants(&self) -> &[TicketGrant] {
        &self.grants
    }

    pub fn team(&self) -> Option<&TeamWave> {
        self.rules.team(self.target)
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// Retargets the wave and re-resolves it against the new faction's tickets and cap.
    pub fn set_target(&mut self, target: Faction) {
        self.target = target;
        self.reissue();
    }

    /// Overrides the admissible count. Values above the current cap are clamped.
    pub fn set_admissible(&mut self, admissible: u32) {
        self.admissible = admissible.min(self.max_wave_size());
    }

    fn reissue(&mut self) {
        self.phase = WavePhase::Resolved;

        let Some(cap) = self.team().map(|team| team.max_wave_size) else {
            self.admissible = 0;
            return;
        };

        let mut tickets = self.ledger.tickets(self.target);
        if tickets == 0 {
            let amount = self.rules.replenish_tickets;
            tickets = self.ledger.grant(self.target, amount);
            self.grants.push(TicketGrant {
                faction: self.target,
                amount,
                balance: tickets,
            });
        }

        self.admissible = tickets.min(cap);
    }

    /// Finalizes the wave.
    ///
    /// A denied wave consumes nothing. Otherwise the spawn count is the
    /// admissible count limited by the number of candidates; exactly that many
    /// tickets are consumed (never below zero) and the candidate list is
    /// truncated to it.
    pub fn commit(mut self) -> WaveOutcome {
        if !self.allowed {
            return WaveOutcome::Cancelled(CancelledWave {
                faction: self.target,
                admissible: self.admissible,
                grants: self.grants,
            });
        }

        let cap = self.max_wave_size();
        debug_assert!(
            self.admissible <= cap,
            "admissible count {} exceeds cap {cap} of {}",
            self.admissible,
            self.target
        );

        let candidates = u32::try_from(self.players.len()).unwrap_or(u32::MAX);
        let count = self.admissible.min(cap).min(candidates);
        let consumed = self.ledger.consume(self.target, count);
        self.players.truncate(count as usize);

        WaveOutcome::Committed(CommittedWave {
            faction: self.target,
            team: self.team().cloned(),
            actors: self.players,
            tickets_consumed: consumed,
            tickets_remaining: self.ledger.tickets(self.target),
            grants: self.grants,
        })
    }
}

impl Deniable for RespawnWave<'_> {
    fn is_allowed(&self) -> bool {
        self.allowed
    }

    fn set_allowed(&mut self, allowed: bool) {
        self.allowed = allowed;
    }
}

/// Tickets added to an empty faction during reissue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketGrant {
    pub faction: Faction,
    pub amount: u32,
    /// Ledger balance right after the grant.
    pub balance: u32,
}

fn total_granted(grants: &[TicketGrant]) -> u32 {
    grants
        .iter()
        .fold(0u32, |total, grant| total.saturating_add(grant.amount))
}

/// Finalized wave handed to the spawn executor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommittedWave {
    pub faction: Faction,
    /// Wave table entry of the faction; `None` only for zero-sized waves.
    pub team: Option<TeamWave>,
    /// Actors to spawn, already truncated to the admitted count.
    pub actors: Vec<ActorId>,
    pub tickets_consumed: u32,
    pub tickets_remaining: u32,
    pub grants: Vec<TicketGrant>,
}

impl CommittedWave {
    pub fn count(&self) -> u32 {
        self.actors.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

/// Record of a wave denied before commit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CancelledWave {
    pub faction: Faction,
    /// Admissible count at the moment of cancellation.
    pub admissible: u32,
    pub grants: Vec<TicketGrant>,
}

/// Result of committing a [`RespawnWave`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveOutcome {
    Committed(CommittedWave),
    Cancelled(CancelledWave),
}

impl WaveOutcome {
    pub fn phase(&self) -> WavePhase {
        match self {
            WaveOutcome::Committed(_) => WavePhase::Committed,
            WaveOutcome::Cancelled(_) => WavePhase::Cancelled,
        }
    }

    pub fn faction(&self) -> Faction {
        match self {
            WaveOutcome::Committed(wave) => wave.faction,
            WaveOutcome::Cancelled(wave) => wave.faction,
        }
    }

    /// Number of actors spawned; zero for a cancelled wave.
    pub fn spawned(&self) -> u32 {
        match self {
            WaveOutcome::Committed(wave) => wave.count(),
            WaveOutcome::Cancelled(_) => 0,
        }
    }

    /// Replenishments made while the wave was open.
    pub fn grants(&self) -> &[TicketGrant] {
        match self {
            WaveOutcome::Committed(wave) => &wave.grants,
            WaveOutcome::Cancelled(wave) => &wave.grants,
        }
    }

    pub fn committed(&self) -> Option<&CommittedWave> {
        match self {
            WaveOutcome::Committed(wave) => Some(wave),
            WaveOutcome::Cancelled(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actors(n: u32) -> Vec<ActorId> {
        (1..=n).map(ActorId).collect()
    }

    #[test]
    fn empty_faction_is_replenished_before_admission() {
        let rules = WaveRules::default().with_max_wave_size(Faction::ChaosInsurgency, 7);
        let mut ledger = TicketLedger::new();

        let wave = RespawnWave::propose(&mut ledger, &rules, actors(12), 10, Faction::ChaosInsurgency);

        assert_eq!(wave.phase(), WavePhase::Resolved);
        assert_eq!(wave.granted_tickets(), 5);
        assert_eq!(wave.tickets_available(), 5);
        assert_eq!(wave.admissible(), 5);

        let outcome = wave.commit();
        assert_eq!(outcome.phase(), WavePhase::Committed);
        assert_eq!(outcome.spawned(), 5);
        assert_eq!(ledger.tickets(Faction::ChaosInsurgency), 0);
    }

    #[test]
    fn admission_is_capped_by_wave_size() {
        let rules = WaveRules::default().with_max_wave_size(Faction::FoundationForces, 5);
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 8);

        let wave = RespawnWave::propose(&mut ledger, &rules, actors(9), 20, Faction::FoundationForces);
        assert_eq!(wave.admissible(), 5);
        assert_eq!(wave.granted_tickets(), 0);

        let outcome = wave.commit();
        let committed = outcome.committed().unwrap();
        assert_eq!(committed.actors, actors(5));
        assert_eq!(committed.tickets_consumed, 5);
        assert_eq!(committed.tickets_remaining, 3);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 3);
    }

    #[test]
    fn denied_wave_consumes_nothing() {
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 8);

        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, actors(4), 4, Faction::FoundationForces);
        wave.deny();
        let outcome = wave.commit();

        assert_eq!(outcome.phase(), WavePhase::Cancelled);
        assert_eq!(outcome.spawned(), 0);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 8);
    }

    #[test]
    fn retargeting_resolves_against_new_faction_only() {
        let rules = WaveRules::default()
            .with_max_wave_size(Faction::FoundationForces, 10)
            .with_max_wave_size(Faction::ChaosInsurgency, 3);
        let mut ledger = TicketLedger::new()
            .with_tickets(Faction::FoundationForces, 9)
            .with_tickets(Faction::ChaosInsurgency, 6);

        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, actors(10), 10, Faction::FoundationForces);
        assert_eq!(wave.admissible(), 9);

        wave.set_target(Faction::ChaosInsurgency);
        assert_eq!(wave.target(), Faction::ChaosInsurgency);
        assert_eq!(wave.admissible(), 3);

        let outcome = wave.commit();
        assert_eq!(outcome.faction(), Faction::ChaosInsurgency);
        assert_eq!(ledger.tickets(Faction::ChaosInsurgency), 3);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 9);
    }

    #[test]
    fn retargeting_to_empty_faction_grants_to_that_faction() {
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 4);

        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, actors(10), 10, Faction::FoundationForces);
        wave.set_target(Faction::ChaosInsurgency);

        assert_eq!(wave.granted_tickets(), 5);
        assert_eq!(
            wave.grants(),
            &[TicketGrant {
                faction: Faction::ChaosInsurgency,
                amount: 5,
                balance: 5,
            }]
        );
        assert_eq!(wave.admissible(), 5);
        drop(wave);
        assert_eq!(ledger.tickets(Faction::ChaosInsurgency), 5);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 4);
    }

    #[test]
    fn none_and_unknown_targets_admit_nobody() {
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new();

        let wave = RespawnWave::propose(&mut ledger, &rules, actors(3), 3, Faction::None);
        assert_eq!(wave.admissible(), 0);
        assert_eq!(wave.granted_tickets(), 0);
        assert_eq!(wave.commit().spawned(), 0);

        let wave = RespawnWave::propose(&mut ledger, &rules, actors(3), 3, Faction::Scps);
        assert_eq!(wave.admissible(), 0);
        assert_eq!(wave.commit().spawned(), 0);
        assert_eq!(ledger.iter().count(), 0);
    }

    #[test]
    fn resolution_ignores_a_smaller_request() {
        let rules = WaveRules::default().with_max_wave_size(Faction::FoundationForces, 5);
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 8);

        let wave = RespawnWave::propose(&mut ledger, &rules, actors(9), 2, Faction::FoundationForces);
        assert_eq!(wave.requested_max(), 2);
        assert_eq!(wave.admissible(), 5);

        let outcome = wave.commit();
        assert_eq!(outcome.spawned(), 5);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 3);
    }

    #[test]
    fn no_candidates_degrade_to_empty_wave() {
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new().with_tickets(Faction::ChaosInsurgency, 6);

        let wave = RespawnWave::propose(&mut ledger, &rules, Vec::new(), 0, Faction::ChaosInsurgency);
        assert_eq!(wave.admissible(), 6);
        let outcome = wave.commit();
        assert_eq!(outcome.phase(), WavePhase::Committed);
        assert_eq!(outcome.spawned(), 0);
        assert_eq!(ledger.tickets(Faction::ChaosInsurgency), 6);
    }

    #[test]
    fn admissible_override_is_clamped_to_cap() {
        let rules = WaveRules::default().with_max_wave_size(Faction::FoundationForces, 4);
        let mut ledger = TicketLedger::new().with_tickets(Faction::FoundationForces, 2);

        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, actors(10), 10, Faction::FoundationForces);
        assert_eq!(wave.admissible(), 2);

        wave.set_admissible(50);
        assert_eq!(wave.admissible(), 4);

        // Overrides beyond the balance spawn, but the ledger bottoms out at zero.
        let outcome = wave.commit();
        assert_eq!(outcome.spawned(), 4);
        assert_eq!(outcome.committed().unwrap().tickets_consumed, 2);
        assert_eq!(ledger.tickets(Faction::FoundationForces), 0);
    }

    #[test]
    fn later_overrides_win() {
        let rules = WaveRules::default();
        let mut ledger = TicketLedger::new()
            .with_tickets(Faction::FoundationForces, 10)
            .with_tickets(Faction::ChaosInsurgency, 10);

        let mut wave =
            RespawnWave::propose(&mut ledger, &rules, actors(10), 10, Faction::FoundationForces);
        wave.set_admissible(2);
        wave.set_target(Faction::ChaosInsurgency);
        assert_eq!(wave.admissible(), 10);

        wave.deny();
        wave.set_allowed(true);
        assert!(wave.is_allowed());
        assert_eq!(wave.commit().spawned(), 10);
    }

    #[test]
    fn ledger_stays_consistent_across_many_waves() {
        let rules = WaveRules::default().with_max_wave_size(Faction::ChaosInsurgency, 7);
        let mut ledger = TicketLedger::new();
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

        for _ in 0..200 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let faction = if seed & 1 == 0 {
                Faction::ChaosInsurgency
            } else {
                Faction::FoundationForces
            };
            let candidates = ((seed >> 8) % 15) as u32;
            let requested = ((seed >> 16) % 20) as u32;

            let mut wave = RespawnWave::propose(&mut ledger, &rules, actors(candidates), requested, faction);
            if (seed >> 24) % 4 == 0 {
                wave.set_admissible((seed >> 32) as u32);
            }
            if (seed >> 40) % 5 == 0 {
                wave.deny();
            }
            let outcome = wave.commit();

            assert!(outcome.spawned() <= rules.max_wave_size(faction));
            assert!(outcome.spawned() <= candidates);
            if let Some(committed) = outcome.committed() {
                assert!(committed.tickets_consumed <= committed.count());
                assert_eq!(committed.tickets_remaining, ledger.tickets(faction));
            }
        }
    }
}
