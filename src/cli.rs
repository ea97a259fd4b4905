//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands;
use repodeps::output::OutputMode;
use repodeps::paths;

/// repodeps - Dependency repositories of a CI pipeline job
#[derive(Parser, Debug)]
#[command(
    name = "repodeps",
    version,
    about = "Manage the dependency repositories of a CI pipeline job",
    long_about = "Manage the dependency repositories of a CI pipeline job.\n\n\
                  Each dependency names a repository, its fork and branch, and\n\
                  whether the pipeline polls it for changes and tests it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Job dependency file
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a dependency repository
    Add {
        /// Repository name
        name: String,

        /// Fork owner (defaults to the configured fork)
        #[arg(long)]
        fork: Option<String>,

        /// Branch (defaults to the configured branch)
        #[arg(short, long)]
        branch: Option<String>,

        /// Poll the repository for changes (`--poll=false` overrides the default)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        poll: Option<bool>,

        /// Include the repository in test runs (`--test=false` overrides the default)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        test: Option<bool>,
    },

    /// List dependency repositories, sorted by name
    List {
        /// Only repositories that are polled
        #[arg(long)]
        polled: bool,

        /// Only repositories that are tested
        #[arg(long)]
        tested: bool,
    },

    /// Show one dependency repository
    Show {
        /// Repository name
        name: String,
    },

    /// Change fields of a dependency repository
    Edit {
        /// Repository name
        name: String,

        /// New repository name
        #[arg(long)]
        rename: Option<String>,

        /// New fork owner
        #[arg(long)]
        fork: Option<String>,

        /// New branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Clear the branch
        #[arg(long, conflicts_with = "branch")]
        no_branch: bool,

        /// Poll for changes (true/false)
        #[arg(long)]
        poll: Option<bool>,

        /// Include in test runs (true/false)
        #[arg(long)]
        test: Option<bool>,

        /// Explicit clone URL (derived from fork and name otherwise)
        #[arg(long)]
        url: Option<String>,
    },

    /// Remove a dependency repository
    Remove {
        /// Repository name
        name: String,
    },

    /// Check repositories against a source catalog
    Check {
        /// Only check this repository
        name: Option<String>,

        /// Catalog file (defaults to the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List candidate values for a field
    Candidates {
        /// Field to list candidates for
        #[arg(value_enum)]
        field: Field,

        /// Fork owner (for names and branches)
        #[arg(long)]
        fork: Option<String>,

        /// Repository name (for branches)
        #[arg(long)]
        name: Option<String>,

        /// Catalog file (defaults to the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show or change the global defaults for new entries
    Config {
        /// Default catalog for check and candidates
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Default fork owner
        #[arg(long)]
        fork: Option<String>,

        /// Default branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Poll new entries by default (true/false)
        #[arg(long)]
        poll: Option<bool>,

        /// Test new entries by default (true/false)
        #[arg(long)]
        test: Option<bool>,
    },

    /// Show version
    Version,
}

/// Repository field with candidate lookups
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Repository names in a fork
    Names,
    /// Fork owners
    Forks,
    /// Branches of a repository fork
    Branches,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let file = cli.file.unwrap_or_else(paths::job_file);

    match cli.command {
        Some(Command::Add {
            name,
            fork,
            branch,
            poll,
            test,
        }) => commands::add(&file, name, fork, branch, poll, test, output_mode),
        Some(Command::List { polled, tested }) => commands::list(&file, polled, tested, output_mode),
        Some(Command::Show { name }) => commands::show(&file, &name, output_mode),
        Some(Command::Edit {
            name,
            rename,
            fork,
            branch,
            no_branch,
            poll,
            test,
            url,
        }) => {
            let changes = commands::EditChanges {
                rename,
                fork,
                branch: if no_branch { Some(None) } else { branch.map(Some) },
                poll,
                test,
                url,
            };
            commands::edit(&file, &name, changes, output_mode)
        },
        Some(Command::Remove { name }) => commands::remove(&file, &name, output_mode),
        Some(Command::Check { name, catalog }) => {
            commands::check(&file, name.as_deref(), catalog, output_mode)
        },
        Some(Command::Candidates {
            field,
            fork,
            name,
            catalog,
        }) => commands::candidates(field, fork.as_deref(), name.as_deref(), catalog, output_mode),
        Some(Command::Config {
            catalog,
            fork,
            branch,
            poll,
            test,
        }) => {
            let changes = commands::ConfigChanges {
                catalog,
                fork,
                branch,
                poll,
                test,
            };
            commands::config(changes, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "version": repodeps::VERSION }));
            } else {
                println!("repodeps v{}", repodeps::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repodeps::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("repodeps v{}", repodeps::VERSION);
                println!("\nRun 'repodeps --help' for usage");
                println!("Run 'repodeps add <name> --fork <owner>' to get started");
            }
            Ok(())
        },
    }
}
