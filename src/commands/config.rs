//! Show or change the global defaults

use std::path::PathBuf;

use repodeps::config::GlobalConfig;
use repodeps::output::{ConfigInfo, OutputMode};

/// Default changes requested on the command line
///
/// `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub catalog: Option<PathBuf>,
    pub fork: Option<String>,
    pub branch: Option<String>,
    pub poll: Option<bool>,
    pub test: Option<bool>,
}

impl ConfigChanges {
    /// Apply the changes, returning whether anything was given
    fn apply(self, config: &mut GlobalConfig) -> bool {
        let mut changed = false;
        if let Some(catalog) = self.catalog {
            config.catalog = Some(catalog);
            changed = true;
        }
        if let Some(fork) = self.fork {
            config.defaults.fork = Some(fork);
            changed = true;
        }
        if let Some(branch) = self.branch {
            config.defaults.branch = Some(branch);
            changed = true;
        }
        if let Some(poll) = self.poll {
            config.defaults.poll = poll;
            changed = true;
        }
        if let Some(test) = self.test {
            config.defaults.test = test;
            changed = true;
        }
        changed
    }
}

/// Print the global config, saving it first when changes were given
pub fn config(changes: ConfigChanges, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = GlobalConfig::load();
    let updated = changes.apply(&mut config);
    if updated {
        config.save()?;
        log::debug!("saved config to {}", GlobalConfig::config_path().display());
    }

    ConfigInfo::new(&config, &GlobalConfig::config_path(), updated).render(mode);
    Ok(())
}
