//! Check repositories and look up field candidates

use std::path::{Path, PathBuf};

use repodeps::adapters::toml::{JobFile, JobFileError};
use repodeps::core::services::FieldAssistant;
use repodeps::output::{CandidatesResult, CheckResult, OutputMode};

use crate::cli::Field;

use super::load_host;

/// Check repositories of the job file against a catalog
pub fn check(
    file: &Path,
    name: Option<&str>,
    catalog: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let job = JobFile::open(file)?;
    let host = load_host(catalog)?;
    let assistant = FieldAssistant::new(&host);

    let reports = match name {
        Some(name) => {
            let repo = job.get(name).ok_or_else(|| JobFileError::NotFound(name.to_string()))?;
            vec![assistant.check_repository(repo)]
        },
        None => job.repositories().iter().map(|r| assistant.check_repository(r)).collect(),
    };

    let passed = !reports.iter().any(|r| r.has_errors());
    CheckResult { passed, reports }.render(mode);

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

/// List candidate values for a field
pub fn candidates(
    field: Field,
    fork: Option<&str>,
    name: Option<&str>,
    catalog: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let host = load_host(catalog)?;
    let assistant = FieldAssistant::new(&host);
    let fork = fork.unwrap_or_default();

    let (label, candidates) = match field {
        Field::Names => ("names", assistant.fill_name_items(fork)),
        Field::Forks => ("forks", assistant.fill_fork_items()),
        Field::Branches => {
            ("branches", assistant.fill_branch_items(name.unwrap_or_default(), fork))
        },
    };

    CandidatesResult {
        field: label.to_string(),
        candidates,
    }
    .render(mode);
    Ok(())
}
