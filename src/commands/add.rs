//! Add a dependency repository

use std::path::Path;

use repodeps::adapters::toml::JobFile;
use repodeps::config::GlobalConfig;
use repodeps::core::models::Repository;
use repodeps::output::{OperationResult, OutputMode};

/// Add a repository to the job file
///
/// Unset fields and flags fall back to the global defaults.
pub fn add(
    file: &Path,
    name: String,
    fork: Option<String>,
    branch: Option<String>,
    poll: Option<bool>,
    test: Option<bool>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let repo = Repository::new(
        name,
        config.fork_or_default(fork),
        config.branch_or_default(branch),
        poll.unwrap_or(config.defaults.poll),
        test.unwrap_or(config.defaults.test),
    )?;

    let mut job = JobFile::open(file)?;
    let message = format!("Added {} ({})", repo.name(), repo.url());
    job.insert(repo)?;
    job.save()?;

    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
