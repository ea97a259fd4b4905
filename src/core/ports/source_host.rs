//! Source host port
//!
//! Defines the interface for asking a source-hosting service which forks,
//! repositories and branches exist.

use crate::core::models::Verdict;

/// Source-hosting service abstraction
///
/// An `Err` from any method means the host could not answer (network,
/// authentication, missing catalog). It does not mean the value is invalid;
/// invalid values are reported as [`Verdict::Error`].
#[cfg_attr(test, mockall::automock)]
pub trait SourceHost: Send + Sync {
    /// List repository names available in a fork
    fn list_names(&self, fork: &str) -> anyhow::Result<Vec<String>>;

    /// Check that a repository exists in a fork
    fn validate_name(&self, name: &str, fork: &str) -> anyhow::Result<Verdict>;

    /// List known fork owners
    fn list_forks(&self) -> anyhow::Result<Vec<String>>;

    /// List branches of a repository in a fork
    fn list_branches(&self, name: &str, fork: &str) -> anyhow::Result<Vec<String>>;

    /// Check that a fork owner exists
    fn validate_fork(&self, fork: &str) -> anyhow::Result<Verdict> {
        if self.list_forks()?.iter().any(|f| f == fork) {
            Ok(Verdict::Ok)
        } else {
            Ok(Verdict::error(format!("Fork owner '{fork}' does not exist")))
        }
    }

    /// Check that a branch exists in a repository fork
    fn validate_branch(&self, branch: &str, name: &str, fork: &str) -> anyhow::Result<Verdict> {
        if self.list_branches(name, fork)?.iter().any(|b| b == branch) {
            Ok(Verdict::Ok)
        } else {
            Ok(Verdict::error(format!("Branch '{branch}' does not exist in {fork}/{name}")))
        }
    }
}
