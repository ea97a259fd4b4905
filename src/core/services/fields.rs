//! Field assistant - answers form field lookups and checks
//!
//! Sits between an editing surface (CLI, web form) and a [`SourceHost`].
//! Each operation is keyed by the sibling fields the user has already
//! entered: names depend on the fork, branches on name and fork.
//!
//! Host failures never surface as errors here. A lookup that fails yields
//! an empty candidate list, a check that fails yields a warning.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::models::{Repository, Verdict};
use crate::core::ports::SourceHost;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("name pattern compiles"));

static BRANCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._/-]+$").expect("branch pattern compiles"));

/// Verdicts for every field of one repository entry
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
    /// Repository name the report is about
    pub repository: String,
    /// Name check
    pub name: Verdict,
    /// Fork check
    pub fork: Verdict,
    /// Branch check
    pub branch: Verdict,
    /// Stored clone URL check
    pub url: Verdict,
}

impl RepositoryReport {
    /// The most severe verdict in the report
    #[must_use]
    pub fn overall(&self) -> Verdict {
        self.name
            .clone()
            .worst(self.fork.clone())
            .worst(self.branch.clone())
            .worst(self.url.clone())
    }

    /// Whether any field failed with an error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.overall().is_error()
    }
}

/// Form field lookups and checks backed by a source host
#[derive(Debug)]
pub struct FieldAssistant<'a, H: SourceHost + ?Sized> {
    host: &'a H,
}

impl<'a, H: SourceHost + ?Sized> FieldAssistant<'a, H> {
    /// Create an assistant for the given host
    #[must_use]
    pub const fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Candidate repository names in a fork
    #[must_use]
    pub fn fill_name_items(&self, fork: &str) -> Vec<String> {
        let fork = fork.trim();
        if fork.is_empty() {
            return Vec::new();
        }
        candidates(self.host.list_names(fork), "repository names")
    }

    /// Check a repository name against its fork
    #[must_use]
    pub fn check_name(&self, value: &str, fork: &str) -> Verdict {
        let value = value.trim();
        if value.is_empty() {
            return Verdict::error("Repository name is required");
        }
        if !NAME_RE.is_match(value) {
            return Verdict::error(format!("'{value}' is not a valid repository name"));
        }
        let fork = fork.trim();
        if fork.is_empty() {
            return Verdict::Ok;
        }
        verified(self.host.validate_name(value, fork), || format!("repository {fork}/{value}"))
    }

    /// Candidate fork owners
    #[must_use]
    pub fn fill_fork_items(&self) -> Vec<String> {
        candidates(self.host.list_forks(), "forks")
    }

    /// Check a fork owner
    #[must_use]
    pub fn check_fork(&self, value: &str) -> Verdict {
        let value = value.trim();
        if value.is_empty() {
            return Verdict::error("Fork owner is required");
        }
        if !NAME_RE.is_match(value) {
            return Verdict::error(format!("'{value}' is not a valid fork owner"));
        }
        verified(self.host.validate_fork(value), || format!("fork owner {value}"))
    }

    /// Candidate branches of a repository fork
    #[must_use]
    pub fn fill_branch_items(&self, name: &str, fork: &str) -> Vec<String> {
        let (name, fork) = (name.trim(), fork.trim());
        if name.is_empty() || fork.is_empty() {
            return Vec::new();
        }
        candidates(self.host.list_branches(name, fork), "branches")
    }

    /// Check a branch against its repository fork
    #[must_use]
    pub fn check_branch(&self, value: &str, name: &str, fork: &str) -> Verdict {
        let value = value.trim();
        if value.is_empty() {
            return Verdict::warning("No branch given, the default branch will be used");
        }
        if !BRANCH_RE.is_match(value) {
            return Verdict::error(format!("'{value}' is not a valid branch name"));
        }
        let (name, fork) = (name.trim(), fork.trim());
        if name.is_empty() || fork.is_empty() {
            return Verdict::Ok;
        }
        verified(self.host.validate_branch(value, name, fork), || {
            format!("branch {value} of {fork}/{name}")
        })
    }

    /// Run every field check for an entry
    #[must_use]
    pub fn check_repository(&self, repo: &Repository) -> RepositoryReport {
        let fork = repo.fork().unwrap_or_default();
        let url = if repo.is_url_stale() {
            Verdict::warning(format!(
                "Stored URL {} differs from derived {}",
                repo.url(),
                repo.derived_url()
            ))
        } else {
            Verdict::Ok
        };

        RepositoryReport {
            repository: repo.name().to_string(),
            name: self.check_name(repo.name(), fork),
            fork: self.check_fork(fork),
            branch: self.check_branch(repo.branch().unwrap_or_default(), repo.name(), fork),
            url,
        }
    }
}

fn candidates(result: anyhow::Result<Vec<String>>, what: &str) -> Vec<String> {
    match result {
        Ok(mut items) => {
            items.sort();
            items.dedup();
            items
        },
        Err(e) => {
            log::warn!("could not list {what}: {e:#}");
            Vec::new()
        },
    }
}

fn verified(result: anyhow::Result<Verdict>, subject: impl FnOnce() -> String) -> Verdict {
    result.unwrap_or_else(|e| {
        let subject = subject();
        log::warn!("could not verify {subject}: {e:#}");
        Verdict::warning(format!("Could not verify {subject}: {e}"))
    })
}
