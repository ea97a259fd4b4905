//! Command implementations

mod add;
mod check;
mod config;
mod edit;
mod list;
mod remove;

use std::path::PathBuf;

use repodeps::adapters::CatalogHost;
use repodeps::config::GlobalConfig;

pub use add::add;
pub use check::{candidates, check};
pub use config::{ConfigChanges, config};
pub use edit::{EditChanges, edit};
pub use list::{list, show};
pub use remove::remove;

/// Load the catalog given on the command line, else the configured one
fn load_host(catalog: Option<PathBuf>) -> anyhow::Result<CatalogHost> {
    let path = match catalog.or_else(|| GlobalConfig::load().catalog) {
        Some(path) => path,
        None => anyhow::bail!(
            "No catalog given. Pass --catalog or set `catalog` in {}",
            GlobalConfig::config_path().display()
        ),
    };
    log::debug!("using catalog {}", path.display());
    CatalogHost::load(&path)
}
