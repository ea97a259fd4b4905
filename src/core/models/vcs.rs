//! Version control system kinds
//!
//! Only git is supported. The kind is still parsed from a literal so
//! configuration files can name it and new kinds can be added later.

use serde::{Deserialize, Serialize};

use super::RepositoryError;

/// Host prefix used for derived clone URLs
pub const GIT_HOST: &str = "git@github.com";

/// Suffix appended to the repository name in clone URLs
pub const GIT_SUFFIX: &str = ".git";

/// Version control system backing a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsKind {
    /// Git, cloned over SSH from GitHub
    #[default]
    Git,
}

impl VcsKind {
    /// The literal used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Git => "git",
        }
    }

    /// Build the clone URL for a repository hosted in `fork`
    ///
    /// No encoding is applied to either component.
    #[must_use]
    pub fn clone_url(self, fork: &str, name: &str) -> String {
        match self {
            Self::Git => format!("{GIT_HOST}:{fork}/{name}{GIT_SUFFIX}"),
        }
    }
}

impl std::fmt::Display for VcsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VcsKind {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(Self::Git),
            other => Err(RepositoryError::UnsupportedVcs(other.to_string())),
        }
    }
}
