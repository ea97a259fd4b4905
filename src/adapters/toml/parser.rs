//! TOML parser for .repodeps.toml files
//!
//! Handles reading and deserializing job dependency files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Repository, RepositoryError, VcsKind};

/// A .repodeps.toml file structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JobFileData {
    /// Dependency repositories in this file
    #[serde(default, rename = "repository")]
    pub repositories: Vec<RepositoryEntry>,
}

/// A repository entry in .repodeps.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryEntry {
    /// Repository name
    pub name: String,

    /// Fork owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork: Option<String>,

    /// Branch within the fork
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// VCS kind literal
    #[serde(default = "default_vcs")]
    pub vcs: String,

    /// Stored clone URL (derived on load when missing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Poll for changes
    #[serde(default)]
    pub poll: bool,

    /// Include in test runs
    #[serde(default)]
    pub test: bool,
}

fn default_vcs() -> String {
    VcsKind::Git.as_str().to_string()
}

impl RepositoryEntry {
    /// Build the domain entry, keeping a stored URL if present
    pub fn into_repository(self) -> Result<Repository, RepositoryError> {
        let mut repo =
            Repository::with_vcs(&self.vcs, self.name, self.fork, self.branch, self.poll, self.test)?;
        if let Some(url) = self.url {
            repo.set_url(url);
        }
        Ok(repo)
    }
}

impl From<&Repository> for RepositoryEntry {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name().to_string(),
            fork: repo.fork().map(String::from),
            branch: repo.branch().map(String::from),
            vcs: repo.vcs().to_string(),
            url: Some(repo.url().to_string()),
            poll: repo.poll(),
            test: repo.test(),
        }
    }
}

/// Parse job file content
///
/// # Errors
///
/// Returns an error if the content is not valid TOML for a job file.
pub fn parse_job_file(content: &str) -> anyhow::Result<JobFileData> {
    let data: JobFileData = toml::from_str(content)?;
    Ok(data)
}

/// Load a .repodeps.toml file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> anyhow::Result<JobFileData> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_job_file(&content).with_context(|| format!("parsing {}", path.display()))
}
