//! CLI interface for commit-match.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::data::OutputFormat;
use crate::github::GitHubClient;

pub mod analyze;
pub mod commits;
pub(crate) mod formatting;
pub mod scan;

pub use analyze::AnalyzeCommand;
pub use commits::CommitsCommand;
pub use scan::ScanCommand;

/// commit-match: checks whether commit messages describe the files they change.
#[derive(Parser)]
#[command(name = "commit-match")]
#[command(
    about = "Checks whether GitHub commit messages match their file changes",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Lists the most recent commits of a repository.
    Commits(CommitsCommand),
    /// Scores how well one commit's message matches its changed files.
    Analyze(AnalyzeCommand),
    /// Scores a run of recent commits and summarises the results.
    Scan(ScanCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Commits(cmd) => cmd.execute().await,
            Commands::Analyze(cmd) => cmd.execute().await,
            Commands::Scan(cmd) => cmd.execute().await,
        }
    }
}

/// Parses the `--format` option.
pub(crate) fn parse_format(format: &str) -> Result<OutputFormat> {
    format.parse().map_err(|()| {
        anyhow!(
            "Invalid --format '{}'. Expected one of: text, json, yaml",
            format
        )
    })
}

/// Creates a GitHub client for the configured API base URL.
pub(crate) fn build_client(api_url: Option<&str>) -> Result<GitHubClient> {
    let base_url = crate::utils::resolve_api_url(api_url)?;
    debug!(base_url = %base_url, "Using GitHub API endpoint");
    GitHubClient::new(&base_url)
        .with_context(|| format!("Failed to create GitHub client for {base_url}"))
}
