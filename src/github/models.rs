//! GitHub REST API response shapes and their conversion into domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::GitHubError;
use crate::data::{CommitDetail, CommitSummary, FileChange};

/// A commit object as returned by both the listing and detail endpoints.
#[derive(Deserialize, Debug)]
struct WireCommit {
    sha: String,
    commit: WireCommitData,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    files: Option<Vec<WireFile>>,
}

/// The git-level portion of a commit object.
#[derive(Deserialize, Debug)]
struct WireCommitData {
    author: WireSignature,
    message: String,
}

/// Git author signature.
#[derive(Deserialize, Debug)]
struct WireSignature {
    name: String,
    date: DateTime<Utc>,
}

/// Entry of the `files` array on the detail endpoint.
#[derive(Deserialize, Debug)]
struct WireFile {
    filename: String,
    additions: u64,
    deletions: u64,
    status: String,
}

/// Builds a summary from the commit's hash and git data.
fn summarize(sha: String, commit: WireCommitData) -> Result<CommitSummary, GitHubError> {
    validate_sha(&sha)?;
    Ok(CommitSummary {
        sha,
        author_name: commit.author.name,
        author_date: commit.author.date,
        message: commit.message,
    })
}

impl From<WireFile> for FileChange {
    fn from(file: WireFile) -> Self {
        Self {
            filename: file.filename,
            additions: file.additions,
            deletions: file.deletions,
            status: file.status,
        }
    }
}

/// Rejects identifiers that are not non-empty hex strings.
fn validate_sha(sha: &str) -> Result<(), GitHubError> {
    if sha.is_empty() || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GitHubError::Decode(format!("invalid commit sha {sha:?}")));
    }
    Ok(())
}

/// Decodes the body of `GET /repos/{owner}/{repo}/commits`.
pub fn decode_commit_list(body: &[u8]) -> Result<Vec<CommitSummary>, GitHubError> {
    let wire: Vec<WireCommit> =
        serde_json::from_slice(body).map_err(|e| GitHubError::Decode(e.to_string()))?;

    wire.into_iter()
        .map(|commit| summarize(commit.sha, commit.commit))
        .collect()
}

/// Decodes the body of `GET /repos/{owner}/{repo}/commits/{sha}`.
pub fn decode_commit_detail(body: &[u8]) -> Result<CommitDetail, GitHubError> {
    let wire: WireCommit =
        serde_json::from_slice(body).map_err(|e| GitHubError::Decode(e.to_string()))?;

    let WireCommit {
        sha,
        commit,
        html_url,
        files,
    } = wire;
    let summary = summarize(sha, commit)?;
    let html_url =
        html_url.ok_or_else(|| GitHubError::Decode("missing field `html_url`".to_string()))?;

    Ok(CommitDetail {
        summary,
        files: files.map(|files| files.into_iter().map(FileChange::from).collect()),
        html_url,
    })
}
