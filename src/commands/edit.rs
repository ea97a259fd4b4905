//! Edit a dependency repository

use std::path::Path;

use repodeps::adapters::toml::JobFile;
use repodeps::core::models::RepositoryForm;
use repodeps::output::{OutputMode, RepositoryInfo};

/// Field changes requested on the command line
///
/// `None` keeps the current value. For the branch, `Some(None)` clears it.
/// A stored URL is kept unless `url` is given, or a rename or fork change
/// makes it re-derive.
#[derive(Debug, Default)]
pub struct EditChanges {
    pub rename: Option<String>,
    pub fork: Option<String>,
    pub branch: Option<Option<String>>,
    pub poll: Option<bool>,
    pub test: Option<bool>,
    pub url: Option<String>,
}

impl EditChanges {
    /// Apply the changes on top of a prefilled form
    fn apply(self, mut form: RepositoryForm) -> RepositoryForm {
        if self.url.is_some() {
            form.url = self.url;
        } else if self.rename.is_some() || self.fork.is_some() {
            form.url = None;
        }
        if let Some(name) = self.rename {
            form.name = name;
        }
        if let Some(fork) = self.fork {
            form.fork = Some(fork);
        }
        if let Some(branch) = self.branch {
            form.branch = branch;
        }
        if let Some(poll) = self.poll {
            form.poll = poll;
        }
        if let Some(test) = self.test {
            form.test = test;
        }
        form
    }
}

/// Reconfigure a repository in the job file
pub fn edit(file: &Path, name: &str, changes: EditChanges, mode: OutputMode) -> anyhow::Result<()> {
    let mut job = JobFile::open(file)?;

    let info = job.update(name, |repo| {
        let form = changes.apply(RepositoryForm::from(&*repo));
        repo.reconfigure(form).map(|r| RepositoryInfo::from(&*r))
    })?;
    job.save()?;

    info.render(mode);
    Ok(())
}
