//! TOML writer for .repodeps.toml files
//!
//! Handles creating and rewriting job dependency files.

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::parser::JobFileData;

const HEADER: &str = "# repodeps dependencies\n\n";

/// Format a `JobFileData` as TOML
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
pub fn format_job_file(data: &JobFileData) -> anyhow::Result<String> {
    let mut out = String::from(HEADER);
    out.push_str(&toml::to_string_pretty(data)?);
    Ok(out)
}

/// Write a job file, replacing any existing content
///
/// # Errors
///
/// Returns an error if the data cannot be serialized or the file written.
pub fn save_file(path: &Path, data: &JobFileData) -> anyhow::Result<()> {
    let content = format_job_file(data)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
