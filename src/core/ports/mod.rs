//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (hosting services, catalogs).
//!
//! Implementations live in the `adapters` module.

mod source_host;

#[cfg(test)]
pub(crate) use source_host::MockSourceHost;
pub use source_host::SourceHost;
