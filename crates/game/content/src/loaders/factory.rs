//! Content factory for loading rules from a data directory.

use std::path::{Path, PathBuf};

use facility_core::WaveRules;

use crate::loaders::{LoadResult, RulesLoader};

/// Content factory that loads rules from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── rules.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const RULES_FILE: &'static str = "rules.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load wave rules from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<WaveRules> {
        RulesLoader::load(&self.rules_path())
    }

    /// Load wave rules from `rules.toml`, or the bundled table when the file is absent.
    pub fn load_rules_or_bundled(&self) -> LoadResult<WaveRules> {
        let path = self.rules_path();
        if path.exists() {
            RulesLoader::load(&path)
        } else {
            RulesLoader::bundled()
        }
    }

    pub fn rules_path(&self) -> PathBuf {
        self.data_dir.join(Self::RULES_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
