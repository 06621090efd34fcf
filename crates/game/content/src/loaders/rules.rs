//! Respawn wave rules loader.

use std::path::Path;

use facility_core::WaveRules;

use crate::loaders::{LoadResult, read_file};

/// Stock rules table shipped with the crate.
const BUNDLED_RULES: &str = include_str!("../../data/rules.toml");

/// Loader for [`WaveRules`] tables in TOML.
///
/// ```toml
/// replenish_tickets = 5
///
/// [[teams]]
/// faction = "chaos_insurgency"
/// max_wave_size = 12
/// leader = "chaos_repressor"
/// member = "chaos_rifleman"
/// ```
pub struct RulesLoader;

impl RulesLoader {
    /// Load and validate a rules table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<WaveRules> {
        let content = read_file(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid rules file {}: {}", path.display(), e))
    }

    /// Parse and validate a rules table from TOML source.
    pub fn from_toml_str(content: &str) -> LoadResult<WaveRules> {
        let rules: WaveRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;
        rules.validate()?;

        Ok(rules)
    }

    /// The stock table embedded at build time.
    pub fn bundled() -> LoadResult<WaveRules> {
        Self::from_toml_str(BUNDLED_RULES)
    }
}
