//! Respawn ticket budget per faction.

use std::collections::BTreeMap;

use crate::faction::Faction;

/// Number of respawn tickets each faction holds.
///
/// Counts are unsigned and consumption saturates at zero, so the ledger can
/// never go negative. Factions without an entry hold zero tickets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketLedger {
    counts: BTreeMap<Faction, u32>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial balance.
    #[must_use]
    pub fn with_tickets(mut self, faction: Faction, tickets: u32) -> Self {
        self.counts.insert(faction, tickets);
        self
    }

    pub fn tickets(&self, faction: Faction) -> u32 {
        self.counts.get(&faction).copied().unwrap_or(0)
    }

    /// Adds `amount` tickets and returns the new balance.
    pub fn grant(&mut self, faction: Faction, amount: u32) -> u32 {
        let count = self.counts.entry(faction).or_insert(0);
        *count = count.saturating_add(amount);
        *count
    }

    /// Removes up to `amount` tickets and returns how many were actually removed.
    pub fn consume(&mut self, faction: Faction, amount: u32) -> u32 {
        let Some(count) = self.counts.get_mut(&faction) else {
            return 0;
        };
        let consumed = amount.min(*count);
        *count -= consumed;
        consumed
    }

    pub fn iter(&self) -> impl Iterator<Item = (Faction, u32)> + '_ {
        self.counts.iter().map(|(faction, count)| (*faction, *count))
    }

    /// Drops every balance, as at the start of a round.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
