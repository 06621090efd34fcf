//! Runtime configuration sourced from the environment.

use std::env;
use std::path::PathBuf;

/// Settings for building a [`RespawnCoordinator`](crate::RespawnCoordinator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Rules table to load. The bundled table is used when unset.
    pub rules_path: Option<PathBuf>,
    /// Capacity of the wave event broadcast channel.
    pub event_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_CAPACITY: usize = 100;

    pub const fn new() -> Self {
        Self {
            rules_path: None,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Load configuration from environment variables, after applying a `.env`
    /// file if one is present.
    ///
    /// Environment variables:
    /// - `RESPAWN_RULES_PATH` - Rules TOML file (default: bundled rules)
    /// - `WAVE_EVENT_CAPACITY` - Wave event channel capacity (default: 100)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        config.rules_path = env::var("RESPAWN_RULES_PATH")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        if let Some(capacity) = read_env::<usize>("WAVE_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        config
    }

    pub fn with_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = Some(path.into());
        self
    }

    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_clamp_capacity() {
        let config = RuntimeConfig::new()
            .with_event_capacity(0)
            .with_rules_path("rules.toml");

        assert_eq!(config.event_capacity, 1);
        assert_eq!(config.rules_path, Some(PathBuf::from("rules.toml")));
    }

    #[test]
    fn defaults_use_bundled_rules() {
        let config = RuntimeConfig::default();
        assert_eq!(config.rules_path, None);
        assert_eq!(config.event_capacity, RuntimeConfig::DEFAULT_EVENT_CAPACITY);
    }
}
