//! Veto-capable respawn observers.
//!
//! Observers see every proposed wave after it has been resolved against the
//! ticket ledger and before it is committed. Each observer may:
//!
//! - inspect the target, admissible count, candidates and ticket balance
//! - override the target, which re-resolves the wave
//! - clamp or raise the admissible count (never above the faction cap)
//! - reorder or filter the candidate list
//! - deny the wave through [`Deniable::deny`](facility_core::Deniable::deny)
//!
//! # Execution Order
//!
//! Observers run sorted by priority (lower values first). Observers with equal
//! priority run in registration order. Overrides apply in that order, so the
//! last observer to touch a field wins.

mod registry;

pub use registry::ObserverRegistry;

use facility_core::RespawnWave;

/// Hook invoked for every proposed respawn wave.
pub trait WaveObserver: Send + Sync {
    /// Returns a human-readable name for this observer (used in logging).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Called once per wave, before commit.
    fn on_respawning(&self, wave: &mut RespawnWave<'_>);
}

/// Observer backed by a closure.
///
/// ```
/// use facility_core::{Deniable, RespawnWave};
/// use facility_runtime::FnObserver;
///
/// let lockdown = FnObserver::new("lockdown", |wave: &mut RespawnWave<'_>| wave.deny());
/// ```
pub struct FnObserver<F> {
    name: &'static str,
    priority: i32,
    callback: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&mut RespawnWave<'_>) + Send + Sync,
{
    pub fn new(name: &'static str, callback: F) -> Self {
        Self {
            name,
            priority: 0,
            callback,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl<F> WaveObserver for FnObserver<F>
where
    F: Fn(&mut RespawnWave<'_>) + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn on_respawning(&self, wave: &mut RespawnWave<'_>) {
        (self.callback)(wave)
    }
}
