//! Data-driven respawn rules.
//!
//! This crate bundles the stock wave table and loads operator-supplied tables
//! from TOML. Every loaded table is validated before it is returned, so the
//! runtime never sees a table with a missing spawnable faction or a role
//! assigned to the wrong faction.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, RulesLoader};
