//! Runtime orchestration for respawn waves.
//!
//! This crate wires the pure rules from `facility-core` into a host-facing
//! API. Hosts embed a [`RespawnCoordinator`] to run waves, register
//! [`WaveObserver`]s to veto or adjust them, and subscribe to [`WaveEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`coordinator`] hosts the wave driver and its builder
//! - [`observers`] provides the ordered, veto-capable observer registry
//! - [`registry`] owns actor roles and capability state
//! - [`spawn`] turns committed waves into role assignments
//! - [`events`] provides the topic-based event bus
//! - [`config`] and [`logging`] cover process setup
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod logging;
pub mod observers;
pub mod registry;
pub mod spawn;

pub use config::RuntimeConfig;
pub use coordinator::{RespawnCoordinator, RespawnCoordinatorBuilder};
pub use error::{Result, RuntimeError};
pub use events::{Topic, WaveEvent, WaveEventBus};
pub use observers::{FnObserver, ObserverRegistry, WaveObserver};
pub use registry::{ActorRecord, ActorRegistry, default_capabilities};
pub use spawn::{RegistrySpawner, SpawnExecutor};
