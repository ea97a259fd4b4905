//! Centralized path definitions for repodeps
//!
//! ## Storage Layout
//!
//! ```text
//! job/
//! └── .repodeps.toml            # Dependency repositories of this job
//!
//! ~/.repodeps/
//! └── config.toml               # User defaults, catalog location
//! ```
//!
//! The global directory can be moved with the `REPODEPS_HOME` environment
//! variable.

use std::path::PathBuf;

/// Job dependency filename
pub const JOB_FILE: &str = ".repodeps.toml";

/// Environment variable overriding the global directory
pub const HOME_ENV: &str = "REPODEPS_HOME";

/// Global config directory name
const GLOBAL_DIR: &str = ".repodeps";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default job file path, relative to the working directory
#[must_use]
pub fn job_file() -> PathBuf {
    PathBuf::from(JOB_FILE)
}

/// Get the global repodeps directory.
///
/// Returns `$REPODEPS_HOME` if set, else `~/.repodeps/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    std::env::var_os(HOME_ENV).map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR),
        PathBuf::from,
    )
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
