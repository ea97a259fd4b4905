//! Remove a dependency repository

use std::path::Path;

use repodeps::adapters::toml::JobFile;
use repodeps::output::{OperationResult, OutputMode};

/// Remove a repository from the job file
pub fn remove(file: &Path, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut job = JobFile::open(file)?;
    let repo = job.remove(name)?;
    job.save()?;

    OperationResult {
        success: true,
        message: format!("Removed {}", repo.name()),
    }
    .render(mode);
    Ok(())
}
