//! GitHub-specific error handling.

use thiserror::Error;

/// Errors raised while resolving a repository or talking to the GitHub API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// The supplied string does not name a GitHub repository.
    #[error("Invalid GitHub URL: {0}")]
    InvalidReference(String),

    /// The commit identifier is empty or malformed.
    #[error("Invalid commit identifier: {0:?}")]
    InvalidSha(String),

    /// The API answered with a non-success status.
    #[error("GitHub API error: {status}")]
    Upstream {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The request never produced a response.
    #[error("GitHub API unreachable: {0}")]
    Unreachable(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected response from GitHub API: {0}")]
    Decode(String),

    /// The configured API base URL is unusable.
    #[error("Invalid API base URL: {0}")]
    Config(String),
}

impl GitHubError {
    /// Returns the HTTP status for upstream failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
