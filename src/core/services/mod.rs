//! Business logic services
//!
//! Orchestration logic that operates on domain models and port traits.
//!
//! - [`fields`] - Form field lookups and checks against a source host

pub mod fields;

pub use fields::{FieldAssistant, RepositoryReport};
