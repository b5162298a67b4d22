//! Commits command: lists a repository's recent commits.

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting::render_commit_list;
use crate::data::{to_yaml, OutputFormat};
use crate::session::AnalysisSession;

/// Commits command options.
#[derive(Parser)]
pub struct CommitsCommand {
    /// Repository URL (e.g., https://github.com/owner/repo).
    #[arg(value_name = "REPOSITORY_URL")]
    pub url: String,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// GitHub API base URL (overrides COMMIT_MATCH_API_URL and settings).
    #[arg(long)]
    pub api_url: Option<String>,
}

impl CommitsCommand {
    /// Executes the commits command.
    pub async fn execute(self) -> Result<()> {
        let format = super::parse_format(&self.format)?;
        let client = super::build_client(self.api_url.as_deref())?;

        let mut session = AnalysisSession::new();
        session
            .load(&client, &self.url)
            .await
            .with_context(|| format!("Failed to fetch commits for {}", self.url))?;

        match format {
            OutputFormat::Text => {
                let repository = session
                    .repository()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                print!("{}", render_commit_list(&repository, session.commits()));
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(session.commits())
                    .context("Failed to serialize commits to JSON")?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml = to_yaml(&session.commits()).context("Failed to serialize commits to YAML")?;
                println!("{yaml}");
            }
        }

        Ok(())
    }
}
