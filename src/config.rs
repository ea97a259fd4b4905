//! Global configuration management
//!
//! User-level preferences applied when adding dependencies from the CLI.
//! Config is stored at `~/.repodeps/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global repodeps configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Catalog used by `check` and `candidates` when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Defaults for new repository entries
    #[serde(default)]
    pub defaults: EntryDefaults,
}

/// Defaults for new repository entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefaults {
    /// Fork owner when `--fork` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork: Option<String>,

    /// Branch when `--branch` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Poll new entries
    #[serde(default)]
    pub poll: bool,

    /// Test new entries
    #[serde(default)]
    pub test: bool,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a path, falling back to defaults
    ///
    /// A missing file is normal. An unreadable or malformed file is logged
    /// and ignored.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str::<Self>(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fork for a new entry: the explicit value, else the default
    #[must_use]
    pub fn fork_or_default(&self, fork: Option<String>) -> Option<String> {
        fork.or_else(|| self.defaults.fork.clone())
    }

    /// Branch for a new entry: the explicit value, else the default
    #[must_use]
    pub fn branch_or_default(&self, branch: Option<String>) -> Option<String> {
        branch.or_else(|| self.defaults.branch.clone())
    }
}
