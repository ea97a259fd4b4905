//! Catalog-backed source host
//!
//! Implements `SourceHost` from a TOML file listing, per fork owner, the
//! repositories and their branches. Useful offline and in tests:
//!
//! ```toml
//! [forks.acme-robotics.repositories]
//! robot_controller = ["main", "develop"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::Verdict;
use crate::core::ports::SourceHost;

/// Catalog file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Fork owners, keyed by owner name
    #[serde(default)]
    pub forks: BTreeMap<String, ForkCatalog>,
}

/// Repositories hosted by one fork owner
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForkCatalog {
    /// Branch lists, keyed by repository name
    #[serde(default)]
    pub repositories: BTreeMap<String, Vec<String>>,
}

/// A source host answering from a loaded catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogHost {
    catalog: Catalog,
}

impl CatalogHost {
    /// Wrap an in-memory catalog
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Parse a catalog from TOML content
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid catalog.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(Self::new(toml::from_str(content)?))
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing catalog {}", path.display()))
    }

    fn branches(&self, name: &str, fork: &str) -> Option<&Vec<String>> {
        self.catalog.forks.get(fork).and_then(|f| f.repositories.get(name))
    }
}

impl SourceHost for CatalogHost {
    fn list_names(&self, fork: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .catalog
            .forks
            .get(fork)
            .map(|f| f.repositories.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn validate_name(&self, name: &str, fork: &str) -> anyhow::Result<Verdict> {
        if self.branches(name, fork).is_some() {
            return Ok(Verdict::Ok);
        }

        let elsewhere: Vec<&str> = self
            .catalog
            .forks
            .iter()
            .filter(|(_, f)| f.repositories.contains_key(name))
            .map(|(owner, _)| owner.as_str())
            .collect();

        if elsewhere.is_empty() {
            Ok(Verdict::error(format!("Repository '{name}' does not exist")))
        } else {
            Ok(Verdict::warning(format!(
                "Repository '{name}' is not forked by {fork} (found in: {})",
                elsewhere.join(", ")
            )))
        }
    }

    fn list_forks(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.catalog.forks.keys().cloned().collect())
    }

    fn list_branches(&self, name: &str, fork: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.branches(name, fork).cloned().unwrap_or_default())
    }
}
