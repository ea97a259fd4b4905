//! List and show dependency repositories

use std::path::Path;

use repodeps::adapters::toml::{JobFile, JobFileError};
use repodeps::output::{OutputMode, RepositoryInfo, RepositoryListResult};

/// List repositories in the job file, sorted by name
pub fn list(file: &Path, polled: bool, tested: bool, mode: OutputMode) -> anyhow::Result<()> {
    let job = JobFile::open(file)?;

    let repositories = job
        .repositories()
        .iter()
        .filter(|r| !polled || r.poll())
        .filter(|r| !tested || r.test())
        .map(RepositoryInfo::from)
        .collect();

    RepositoryListResult { repositories }.render(mode);
    Ok(())
}

/// Show one repository
pub fn show(file: &Path, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let job = JobFile::open(file)?;
    let repo = job.get(name).ok_or_else(|| JobFileError::NotFound(name.to_string()))?;

    RepositoryInfo::from(repo).render(mode);
    Ok(())
}
