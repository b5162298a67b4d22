//! GitHub REST API client for commit history and commit details.

use std::future::Future;
use std::pin::Pin;

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::models::{decode_commit_detail, decode_commit_list};
use super::{GitHubError, RepositoryReference};
use crate::data::{CommitDetail, CommitSummary};

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested from the API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version header value.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Sent as `User-Agent`, which the API requires.
const CLIENT_USER_AGENT: &str = concat!("commit-match/", env!("CARGO_PKG_VERSION"));

/// Source of commit history and commit details.
pub trait CommitSource: Send + Sync {
    /// Retrieves the first page of a repository's commit history.
    fn fetch_commits<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CommitSummary>, GitHubError>> + Send + 'a>>;

    /// Retrieves one commit with its changed files.
    fn fetch_detail<'a>(
        &'a self,
        reference: &'a RepositoryReference,
        sha: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommitDetail, GitHubError>> + Send + 'a>>;
}

/// Unauthenticated client for the GitHub commits endpoints.
///
/// Issues exactly one request per call: no pagination, retries or caching.
pub struct GitHubClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL for the API (e.g., "https://api.github.com")
    base_url: Url,
}

impl GitHubClient {
    /// Creates a client for the given API base URL.
    pub fn new(base_url: &str) -> Result<Self, GitHubError> {
        let base_url =
            Url::parse(base_url).map_err(|e| GitHubError::Config(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GitHubError::Config(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client for the public GitHub API.
    pub fn new_github() -> Result<Self, GitHubError> {
        Self::new(DEFAULT_API_URL)
    }

    /// Returns the configured API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Retrieves the first page of a repository's commit history.
    ///
    /// Entries keep the upstream order (newest first).
    pub async fn fetch_commits(
        &self,
        reference: &RepositoryReference,
    ) -> Result<Vec<CommitSummary>, GitHubError> {
        let url = self.endpoint(&["repos", &reference.owner, &reference.name, "commits"])?;
        let body = self.get(url).await?;
        let commits = decode_commit_list(&body)?;

        info!(repository = %reference, count = commits.len(), "Fetched commit history");
        Ok(commits)
    }

    /// Retrieves one commit with its changed files.
    pub async fn fetch_detail(
        &self,
        reference: &RepositoryReference,
        sha: &str,
    ) -> Result<CommitDetail, GitHubError> {
        if sha.trim().is_empty() {
            return Err(GitHubError::InvalidSha(sha.to_string()));
        }

        let url = self.endpoint(&["repos", &reference.owner, &reference.name, "commits", sha])?;
        let body = self.get(url).await?;
        let detail = decode_commit_detail(&body)?;

        info!(
            repository = %reference,
            sha = %detail.summary.sha,
            files = detail.files.as_ref().map_or(0, Vec::len),
            "Fetched commit detail"
        );
        Ok(detail)
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GitHubError::Config(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET and returns the body of a successful response.
    async fn get(&self, url: Url) -> Result<Vec<u8>, GitHubError> {
        debug!(url = %url, "Sending GitHub API request");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await
            .map_err(|e| GitHubError::Unreachable(e.to_string()))?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Received GitHub API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GitHubError::Unreachable(e.to_string()))?;
        Ok(body.to_vec())
    }
}

impl CommitSource for GitHubClient {
    fn fetch_commits<'a>(
        &'a self,
        reference: &'a RepositoryReference,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CommitSummary>, GitHubError>> + Send + 'a>> {
        Box::pin(Self::fetch_commits(self, reference))
    }

    fn fetch_detail<'a>(
        &'a self,
        reference: &'a RepositoryReference,
        sha: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommitDetail, GitHubError>> + Send + 'a>> {
        Box::pin(Self::fetch_detail(self, reference, sha))
    }
}
