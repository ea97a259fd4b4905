//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::config::GlobalConfig;
use crate::core::models::{Repository, Verdict};
use crate::core::services::RepositoryReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Information about a repository entry
#[derive(Debug, Serialize)]
pub struct RepositoryInfo {
    /// Repository name
    pub name: String,
    /// Fork owner
    pub fork: Option<String>,
    /// Branch
    pub branch: Option<String>,
    /// VCS kind
    pub vcs: String,
    /// Stored clone URL
    pub url: String,
    /// Poll for changes
    pub poll: bool,
    /// Include in test runs
    pub test: bool,
}

impl From<&Repository> for RepositoryInfo {
    fn from(repo: &Repository) -> Self {
        Self {
            name: repo.name().to_string(),
            fork: repo.fork().map(String::from),
            branch: repo.branch().map(String::from),
            vcs: repo.vcs().to_string(),
            url: repo.url().to_string(),
            poll: repo.poll(),
            test: repo.test(),
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct RepositoryListResult {
    /// Repositories, sorted by name
    pub repositories: Vec<RepositoryInfo>,
}

/// Result of a check operation
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// Whether no field failed with an error
    pub passed: bool,
    /// Per-repository reports
    pub reports: Vec<RepositoryReport>,
}

/// Result of a candidates lookup
#[derive(Debug, Serialize)]
pub struct CandidatesResult {
    /// What was looked up ("names", "forks", "branches")
    pub field: String,
    /// Candidate values, sorted
    pub candidates: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Global configuration as shown by the config command
#[derive(Debug, Serialize)]
pub struct ConfigInfo {
    /// Config file location
    pub path: String,
    /// Whether this run wrote changes
    pub updated: bool,
    /// Default catalog
    pub catalog: Option<String>,
    /// Default fork owner
    pub fork: Option<String>,
    /// Default branch
    pub branch: Option<String>,
    /// Poll new entries
    pub poll: bool,
    /// Test new entries
    pub test: bool,
}

impl ConfigInfo {
    /// Describe a config stored at `path`
    #[must_use]
    pub fn new(config: &GlobalConfig, path: &Path, updated: bool) -> Self {
        Self {
            path: path.display().to_string(),
            updated,
            catalog: config.catalog.as_ref().map(|p| p.display().to_string()),
            fork: config.defaults.fork.clone(),
            branch: config.defaults.branch.clone(),
            poll: config.defaults.poll,
            test: config.defaults.test,
        }
    }

    /// Render the config based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.updated {
            println!("Updated {}", self.path);
        } else {
            println!("{}", self.path.bold());
        }
        println!("  catalog: {}", self.catalog.as_deref().unwrap_or("-"));
        println!("  fork:    {}", self.fork.as_deref().unwrap_or("-"));
        println!("  branch:  {}", self.branch.as_deref().unwrap_or("-"));
        println!("  poll:    {}", flag(self.poll));
        println!("  test:    {}", flag(self.test));
    }
}

fn flag(on: bool) -> &'static str {
    if on { "yes" } else { "no" }
}

fn marker(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Ok => "ok".green().to_string(),
        Verdict::Warning(_) => "warn".yellow().to_string(),
        Verdict::Error(_) => "error".red().bold().to_string(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl RepositoryInfo {
    /// Render the entry based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.name.bold());
        println!("  fork:   {}", self.fork.as_deref().unwrap_or("-"));
        println!("  branch: {}", self.branch.as_deref().unwrap_or("-"));
        println!("  vcs:    {}", self.vcs);
        println!("  url:    {}", self.url);
        println!("  poll:   {}", flag(self.poll));
        println!("  test:   {}", flag(self.test));
    }
}

impl RepositoryListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.repositories.is_empty() {
            println!("No repositories configured.");
            return;
        }

        for r in &self.repositories {
            let mut flags = Vec::new();
            if r.poll {
                flags.push("poll");
            }
            if r.test {
                flags.push("test");
            }
            println!(
                "  {:<24} {:<20} {:<16} [{}]",
                r.name,
                r.fork.as_deref().unwrap_or("-"),
                r.branch.as_deref().unwrap_or("-"),
                flags.join(",")
            );
        }
    }
}

impl CheckResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.reports.is_empty() {
            println!("No repositories to check.");
            return;
        }

        for report in &self.reports {
            println!("{} [{}]", report.repository, marker(&report.overall()));
            for (field, verdict) in [
                ("name", &report.name),
                ("fork", &report.fork),
                ("branch", &report.branch),
                ("url", &report.url),
            ] {
                if let Some(message) = verdict.message() {
                    println!("  {field:<7}{} {message}", marker(verdict));
                }
            }
        }

        if self.passed {
            println!("\nAll repositories passed.");
        } else {
            let failed = self.reports.iter().filter(|r| r.has_errors()).count();
            println!("\nFAILED: {failed} repository(ies) with errors");
        }
    }
}

impl CandidatesResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.candidates.is_empty() {
                    println!("No {} found.", self.field);
                }
                for c in &self.candidates {
                    println!("{c}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
