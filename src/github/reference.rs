//! Repository references extracted from user-supplied URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::GitHubError;

/// Matches `github.com/<owner>/<name>` anywhere in the input.
#[allow(clippy::unwrap_used)] // Compile-time constant regex
static REPOSITORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").unwrap());

/// An owner/name pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryReference {
    /// Account or organisation that owns the repository.
    pub owner: String,
    /// Repository name, without any `.git` suffix.
    pub name: String,
}

impl RepositoryReference {
    /// Extracts a reference from any string containing `github.com/<owner>/<name>`.
    ///
    /// Accepts `https://` and `ssh://git@github.com/...` forms alike since only
    /// the path pattern is inspected. The scp-style `git@github.com:owner/name`
    /// has no `github.com/` and is rejected. A trailing `.git` is dropped from
    /// the name. Returns `None` when no such pattern is present.
    pub fn parse(url: &str) -> Option<Self> {
        let captures = REPOSITORY_PATTERN.captures(url)?;
        let owner = captures.get(1)?.as_str();
        let raw_name = captures.get(2)?.as_str();
        let name = raw_name.strip_suffix(".git").unwrap_or(raw_name);

        if name.is_empty() {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Like [`parse`](Self::parse), but reports failure as an error.
    pub fn try_parse(url: &str) -> Result<Self, GitHubError> {
        Self::parse(url).ok_or_else(|| GitHubError::InvalidReference(url.to_string()))
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
