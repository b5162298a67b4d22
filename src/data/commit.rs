//! Commit data retrieved from the upstream service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of hex characters shown for abbreviated commit hashes.
pub const SHORT_SHA_LEN: usize = 7;

/// One entry of a repository's commit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// Full commit hash.
    pub sha: String,
    /// Author name as recorded in the commit.
    pub author_name: String,
    /// Author timestamp.
    pub author_date: DateTime<Utc>,
    /// Full commit message; the first line is the subject.
    pub message: String,
}

impl CommitSummary {
    /// Returns the first line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the abbreviated hash.
    pub fn short_sha(&self) -> &str {
        self.sha
            .char_indices()
            .nth(SHORT_SHA_LEN)
            .map_or(self.sha.as_str(), |(idx, _)| &self.sha[..idx])
    }
}

/// A single file touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Slash-separated path of the file.
    pub filename: String,
    /// Lines added.
    pub additions: u64,
    /// Lines deleted.
    pub deletions: u64,
    /// Upstream change status (`added`, `removed`, `modified`, `renamed`, ...).
    pub status: String,
}

impl FileChange {
    /// Renders the line counts as `+A -D`.
    pub fn change_summary(&self) -> String {
        format!("+{} -{}", self.additions, self.deletions)
    }
}

/// A commit together with the files it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetail {
    /// Summary fields shared with the history listing.
    #[serde(flatten)]
    pub summary: CommitSummary,
    /// Changed files in upstream order. `None` when the upstream omitted the list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileChange>>,
    /// Canonical web page of the commit.
    pub html_url: String,
}
