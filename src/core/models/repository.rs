//! Repository model
//!
//! A repository entry names one dependency of a pipeline job: which
//! repository, in which fork, on which branch, and whether the pipeline
//! should poll and test it.

use std::cmp::Ordering;

use thiserror::Error;

use super::{RepositoryForm, VcsKind};

/// Errors raised when building or reconfiguring a repository entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The requested VCS kind has no implementation
    #[error("Given VCS type '{0}' is not supported")]
    UnsupportedVcs(String),
}

/// A dependency repository of a pipeline job
///
/// Entries are ordered and compared by name only. Two entries with the
/// same name but different forks are equal for sorting purposes.
///
/// The clone URL is derived once at construction and stored. Setters do
/// not re-derive it; use [`Repository::refresh_url`] after changing the
/// name or fork, or [`Repository::reconfigure`] which re-derives it.
#[derive(Debug, Clone)]
pub struct Repository {
    name: String,
    fork: Option<String>,
    branch: Option<String>,
    vcs: VcsKind,
    url: String,
    poll: bool,
    test: bool,
}

impl Repository {
    /// Create a git repository entry
    pub fn new(
        name: impl Into<String>,
        fork: Option<String>,
        branch: Option<String>,
        poll: bool,
        test: bool,
    ) -> Result<Self, RepositoryError> {
        Self::with_vcs(VcsKind::Git.as_str(), name, fork, branch, poll, test)
    }

    /// Create a repository entry for the VCS kind named by `vcs`
    ///
    /// Fails with [`RepositoryError::UnsupportedVcs`] unless `vcs` names a
    /// supported kind.
    pub fn with_vcs(
        vcs: &str,
        name: impl Into<String>,
        fork: Option<String>,
        branch: Option<String>,
        poll: bool,
        test: bool,
    ) -> Result<Self, RepositoryError> {
        let vcs: VcsKind = vcs.parse()?;
        let name = name.into();
        let url = vcs.clone_url(fork.as_deref().unwrap_or_default(), &name);
        Ok(Self {
            name,
            fork,
            branch,
            vcs,
            url,
            poll,
            test,
        })
    }

    /// Repository name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the repository name (the clone URL is left untouched)
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Fork owner
    #[must_use]
    pub fn fork(&self) -> Option<&str> {
        self.fork.as_deref()
    }

    /// Set the fork owner (the clone URL is left untouched)
    pub fn set_fork(&mut self, fork: Option<String>) {
        self.fork = fork;
    }

    /// Branch within the fork
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Set the branch
    pub fn set_branch(&mut self, branch: Option<String>) {
        self.branch = branch;
    }

    /// VCS kind
    #[must_use]
    pub const fn vcs(&self) -> VcsKind {
        self.vcs
    }

    /// Stored clone URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Override the stored clone URL
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Whether the pipeline polls this repository for changes
    #[must_use]
    pub const fn poll(&self) -> bool {
        self.poll
    }

    /// Set the poll flag
    pub const fn set_poll(&mut self, poll: bool) {
        self.poll = poll;
    }

    /// Whether the pipeline runs tests for this repository
    #[must_use]
    pub const fn test(&self) -> bool {
        self.test
    }

    /// Set the test flag
    pub const fn set_test(&mut self, test: bool) {
        self.test = test;
    }

    /// Clone URL computed from the current fork and name
    #[must_use]
    pub fn derived_url(&self) -> String {
        self.vcs.clone_url(self.fork.as_deref().unwrap_or_default(), &self.name)
    }

    /// Whether the stored URL no longer matches the current fork and name
    #[must_use]
    pub fn is_url_stale(&self) -> bool {
        self.url != self.derived_url()
    }

    /// Store the clone URL derived from the current fork and name
    pub fn refresh_url(&mut self) {
        self.url = self.derived_url();
    }

    /// Overwrite every field from a submitted form, in place
    ///
    /// Absent optional fields become `None`, absent flags become `false`
    /// and an absent URL is derived from the new fork and name. Fails
    /// without touching the entry if the form names an unsupported VCS.
    pub fn reconfigure(&mut self, form: RepositoryForm) -> Result<&mut Self, RepositoryError> {
        let vcs = match form.vcs.as_deref() {
            Some(kind) => kind.parse::<VcsKind>()?,
            None => VcsKind::default(),
        };

        let RepositoryForm {
            name,
            fork,
            branch,
            url,
            poll,
            test,
            ..
        } = form;

        self.vcs = vcs;
        self.name = name;
        self.fork = fork;
        self.branch = branch;
        self.poll = poll;
        self.test = test;
        self.url = url.unwrap_or_else(|| self.derived_url());

        log::debug!("reconfigured repository {}", self.name);
        Ok(self)
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Repository {}

impl PartialOrd for Repository {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Repository {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
