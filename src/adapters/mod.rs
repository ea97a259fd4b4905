//! Adapter implementations for port traits and file formats
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - `.repodeps.toml` job file parsing, writing and editing
//! - `catalog` - `SourceHost` backed by a TOML catalog file

pub mod catalog;
pub mod toml;

pub use catalog::CatalogHost;
