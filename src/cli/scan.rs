//! Scan command: analyzes a run of recent commits.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use super::formatting::render_scan_report;
use crate::data::{to_yaml, OutputFormat, ScanEntry, ScanReport};
use crate::session::AnalysisSession;

/// Scan command options.
#[derive(Parser)]
pub struct ScanCommand {
    /// Repository URL (e.g., https://github.com/owner/repo).
    #[arg(value_name = "REPOSITORY_URL")]
    pub url: String,

    /// Maximum number of commits to analyze, newest first.
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// GitHub API base URL (overrides COMMIT_MATCH_API_URL and settings).
    #[arg(long)]
    pub api_url: Option<String>,
}

impl ScanCommand {
    /// Executes the scan command.
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
        let shas: Vec<String> = session
            .commits()
            .iter()
            .take(self.limit)
            .map(|c| c.sha.clone())
            .collect();

        info!(repository = %repository, count = shas.len(), "Scanning commits");

        // One request at a time; each selection replaces the previous one
        let mut entries = Vec::with_capacity(shas.len());
        for sha in &shas {
            let selected = session
                .select(&client, sha)
                .await
                .with_context(|| format!("Failed to fetch commit {sha} from {repository}"))?;
            entries.push(ScanEntry {
                commit: selected.detail.summary.clone(),
                result: selected.result.clone(),
            });
        }

        let report = ScanReport::new(repository, entries);
        output_report(&report, format)
    }
}

/// Prints a scan report in the requested format.
fn output_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_scan_report(report)),
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
