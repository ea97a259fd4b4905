//! Job dependency list backed by a .repodeps.toml file
//!
//! Entries are kept sorted by name and names are unique within a job.

use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use crate::core::models::Repository;

use super::parser::{JobFileData, RepositoryEntry, load_file};
use super::writer::save_file;

/// Errors from editing a job's dependency list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobFileError {
    /// A repository with this name is already listed
    #[error("Repository already listed: {0}")]
    Duplicate(String),

    /// No repository with this name is listed
    #[error("Repository not found: {0}")]
    NotFound(String),
}

/// The dependency repositories of one job
#[derive(Debug, Clone)]
pub struct JobFile {
    path: PathBuf,
    repositories: Vec<Repository>,
}

impl JobFile {
    /// An empty job that will be saved to `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            repositories: Vec::new(),
        }
    }

    /// Load a job file, or start an empty one if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed, names an unsupported
    /// VCS, or lists the same repository twice.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if !path.exists() {
            log::debug!("{} does not exist, starting empty", path.display());
            return Ok(Self::new(path));
        }

        let data = load_file(&path)?;
        let mut job = Self::new(path);
        for entry in data.repositories {
            let name = entry.name.clone();
            job.load_entry(entry)
                .with_context(|| format!("loading {} (entry {name})", job.path.display()))?;
        }
        log::debug!("loaded {} repositories from {}", job.len(), job.path.display());
        Ok(job)
    }

    fn load_entry(&mut self, entry: RepositoryEntry) -> anyhow::Result<()> {
        self.insert(entry.into_repository()?)?;
        Ok(())
    }

    /// Write the job back to its file, sorted by name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> anyhow::Result<()> {
        let data = JobFileData {
            repositories: self.repositories.iter().map(RepositoryEntry::from).collect(),
        };
        save_file(&self.path, &data)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All repositories, sorted by name
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Number of repositories
    #[must_use]
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// Whether the job has no repositories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Repositories the pipeline polls
    pub fn polled(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter().filter(|r| r.poll())
    }

    /// Repositories the pipeline tests
    pub fn tested(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter().filter(|r| r.test())
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.repositories.binary_search_by(|r| r.name().cmp(name))
    }

    /// Look up a repository by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.position(name).ok().map(|i| &self.repositories[i])
    }

    /// Add a repository, keeping the list sorted
    pub fn insert(&mut self, repo: Repository) -> Result<(), JobFileError> {
        match self.position(repo.name()) {
            Ok(_) => Err(JobFileError::Duplicate(repo.name().to_string())),
            Err(i) => {
                self.repositories.insert(i, repo);
                Ok(())
            },
        }
    }

    /// Remove a repository by name
    pub fn remove(&mut self, name: &str) -> Result<Repository, JobFileError> {
        self.position(name)
            .map(|i| self.repositories.remove(i))
            .map_err(|_| JobFileError::NotFound(name.to_string()))
    }

    /// Edit a repository in place, re-sorting if the edit renamed it
    ///
    /// A rename onto a name that is already listed is rejected and the
    /// entry is restored.
    pub fn update<F, T, E>(&mut self, name: &str, edit: F) -> anyhow::Result<T>
    where
        F: FnOnce(&mut Repository) -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        let mut repo = self.remove(name)?;
        let backup = repo.clone();

        let result = match edit(&mut repo) {
            Ok(value) => value,
            Err(e) => {
                self.restore(backup);
                return Err(e.into());
            },
        };

        if let Err(e) = self.insert(repo) {
            self.restore(backup);
            return Err(e.into());
        }
        Ok(result)
    }

    fn restore(&mut self, repo: Repository) {
        if let Err(i) = self.position(repo.name()) {
            self.repositories.insert(i, repo);
        }
    }
}
