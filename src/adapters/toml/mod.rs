//! TOML-backed job dependency files
//!
//! - [`parser`] - Read and deserialize .repodeps.toml files
//! - [`writer`] - Create and rewrite .repodeps.toml files
//! - [`job`] - Sorted, name-unique dependency list for one job

pub mod job;
pub mod parser;
pub mod writer;

pub use job::{JobFile, JobFileError};
pub use parser::{JobFileData, RepositoryEntry, load_file, parse_job_file};
pub use writer::{format_job_file, save_file};
