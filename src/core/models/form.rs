//! Repository form payload
//!
//! The typed payload applied by [`Repository::reconfigure`]. It lists
//! exactly the fields a reconfiguration overwrites.

use serde::Deserialize;

use super::Repository;

/// Submitted values for a repository entry
///
/// Deserialization follows the same defaulting as `reconfigure`:
/// missing flags are `false`, missing optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RepositoryForm {
    /// Repository name
    pub name: String,

    /// Fork owner
    #[serde(default)]
    pub fork: Option<String>,

    /// Branch within the fork
    #[serde(default)]
    pub branch: Option<String>,

    /// VCS kind literal (defaults to git)
    #[serde(default)]
    pub vcs: Option<String>,

    /// Explicit clone URL (derived when absent)
    #[serde(default)]
    pub url: Option<String>,

    /// Poll for changes
    #[serde(default)]
    pub poll: bool,

    /// Include in test runs
    #[serde(default)]
    pub test: bool,
}

impl RepositoryForm {
    /// A form with only the name filled in
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl From<&Repository> for RepositoryForm {
    /// Prefill a form with an entry's current values
    ///
    /// A URL that matches the derived one is left out so it follows the
    /// fork and name on submit. A hand-set URL is carried over.
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name().to_string(),
            fork: repo.fork().map(String::from),
            branch: repo.branch().map(String::from),
            vcs: Some(repo.vcs().to_string()),
            url: repo.is_url_stale().then(|| repo.url().to_string()),
            poll: repo.poll(),
            test: repo.test(),
        }
    }
}
