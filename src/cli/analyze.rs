//! Analyze command: scores how well one commit's message matches its files.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::debug;

use super::formatting::render_commit_report;
use crate::data::{to_yaml, CommitReport, OutputFormat};
use crate::session::AnalysisSession;

/// Analyze command options.
#[derive(Parser)]
pub struct AnalyzeCommand {
    /// Repository URL (e.g., https://github.com/owner/repo).
    #[arg(value_name = "REPOSITORY_URL")]
    pub url: String,

    /// Commit hash or hash prefix to analyze.
    /// Defaults to the newest commit.
    #[arg(value_name = "SHA")]
    pub sha: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// GitHub API base URL (overrides COMMIT_MATCH_API_URL and settings).
    #[arg(long)]
    pub api_url: Option<String>,
}

impl AnalyzeCommand {
    /// Executes the analyze command.
    pub async fn execute(self) -> Result<()> {
        let format = super::parse_format(&self.format)?;
        let client = super::build_client(self.api_url.as_deref())?;

        let mut session = AnalysisSession::new();
        session
            .load(&client, &self.url)
            .await
            .with_context(|| format!("Failed to fetch commits for {}", self.url))?;

        let repository = session
            .repository()
            .map(ToString::to_string)
            .unwrap_or_default();
        let sha = self.resolve_sha(&session, &repository)?;

        let selected = session
            .select(&client, &sha)
            .await
            .with_context(|| format!("Failed to fetch commit {sha} from {repository}"))?;

        let report = CommitReport {
            repository,
            commit: selected.detail.clone(),
            result: selected.result.clone(),
        };
        output_report(&report, format)
    }

    /// Picks the commit to analyze from the fetched history.
    fn resolve_sha(&self, session: &AnalysisSession, repository: &str) -> Result<String> {
        match self.sha.as_deref() {
            Some(prefix) => match session.find_commit(prefix) {
                Some(commit) => Ok(commit.sha.clone()),
                None => {
                    // Older commits are not on the first page; let the API resolve it
                    debug!(prefix, "Commit not in fetched history, requesting directly");
                    Ok(prefix.to_string())
                }
            },
            None => session
                .commits()
                .first()
                .map(|commit| commit.sha.clone())
                .ok_or_else(|| anyhow!("Repository {repository} has no commits")),
        }
    }
}

/// Prints a commit report in the requested format.
fn output_report(report: &CommitReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_commit_report(report)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .context("Failed to serialize report to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = to_yaml(report).context("Failed to serialize report to YAML")?;
            println!("{yaml}");
        }
    }
    Ok(())
}
