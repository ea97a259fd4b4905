//! Domain models for repodeps
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Repository`] - One dependency repository of a pipeline job
//! - [`RepositoryForm`] - Submitted values applied by `reconfigure`
//! - [`VcsKind`] - The version control system behind a repository
//! - [`Verdict`] - Outcome of validating a form field

mod form;
mod repository;
mod vcs;
mod verdict;

pub use form::RepositoryForm;
pub use repository::{Repository, RepositoryError};
pub use vcs::{GIT_HOST, GIT_SUFFIX, VcsKind};
pub use verdict::Verdict;
