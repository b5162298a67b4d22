//! Working state for one analysis session.
//!
//! A session tracks the selected repository, its commit list and the selected
//! commit. Every fetch is started with a ticket carrying a generation number;
//! results arriving with an outdated ticket are discarded, so a superseded
//! request can never overwrite newer state.

use tracing::debug;

use crate::analysis::CommitMatchAnalyzer;
use crate::data::{CommitDetail, CommitSummary, MatchResult};
use crate::github::{CommitSource, GitHubError, RepositoryReference};

/// Handle for an in-flight commit list fetch.
#[derive(Debug, Clone)]
pub struct ListTicket {
    generation: u64,
    reference: RepositoryReference,
}

impl ListTicket {
    /// Repository the fetch is for.
    pub fn reference(&self) -> &RepositoryReference {
        &self.reference
    }
}

/// Handle for an in-flight commit detail fetch.
#[derive(Debug, Clone)]
pub struct SelectTicket {
    generation: u64,
    reference: RepositoryReference,
    sha: String,
}

impl SelectTicket {
    /// Repository the selected commit belongs to.
    pub fn reference(&self) -> &RepositoryReference {
        &self.reference
    }

    /// Commit being fetched.
    pub fn sha(&self) -> &str {
        &self.sha
    }
}

/// A fetched commit and its analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCommit {
    /// Commit detail as fetched.
    pub detail: CommitDetail,
    /// Match analysis of the detail.
    pub result: MatchResult,
}

impl SelectedCommit {
    /// Analyzes a freshly fetched detail.
    pub fn new(detail: CommitDetail) -> Self {
        let result = CommitMatchAnalyzer::analyze(&detail);
        Self { detail, result }
    }
}

/// Repository, commit list and selected commit of one user session.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    repository: Option<RepositoryReference>,
    commits: Vec<CommitSummary>,
    selected: Option<SelectedCommit>,
    error: Option<String>,
    loading: bool,
    list_generation: u64,
    select_generation: u64,
}

impl AnalysisSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository of the most recent list request, if its URL was valid.
    pub fn repository(&self) -> Option<&RepositoryReference> {
        self.repository.as_ref()
    }

    /// Commits from the last applied list fetch.
    pub fn commits(&self) -> &[CommitSummary] {
        &self.commits
    }

    /// Currently selected commit.
    pub fn selected(&self) -> Option<&SelectedCommit> {
        self.selected.as_ref()
    }

    /// Message of the last failure, cleared when a new action starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a list fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Finds the first listed commit whose hash starts with `prefix`.
    pub fn find_commit(&self, prefix: &str) -> Option<&CommitSummary> {
        if prefix.is_empty() {
            return None;
        }
        self.commits.iter().find(|c| c.sha.starts_with(prefix))
    }

    /// Starts a commit list fetch for `url`.
    ///
    /// Clears the list and selection and invalidates every outstanding
    /// ticket. An unparseable URL is recorded as the session error and no
    /// ticket is issued.
    pub fn begin_list(&mut self, url: &str) -> Result<ListTicket, GitHubError> {
        self.list_generation += 1;
        self.select_generation += 1;
        self.commits.clear();
        self.selected = None;
        self.error = None;

        match RepositoryReference::try_parse(url) {
            Ok(reference) => {
                self.repository = Some(reference.clone());
                self.loading = true;
                Ok(ListTicket {
                    generation: self.list_generation,
                    reference,
                })
            }
            Err(err) => {
                self.repository = None;
                self.loading = false;
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Applies the outcome of a list fetch.
    ///
    /// Returns false, leaving the session untouched, when the ticket has been
    /// superseded.
    pub fn finish_list(
        &mut self,
        ticket: ListTicket,
        result: Result<Vec<CommitSummary>, GitHubError>,
    ) -> bool {
        if ticket.generation != self.list_generation {
            debug!(
                repository = %ticket.reference,
                "Discarding stale commit list response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(commits) => {
                self.commits = commits;
            }
            Err(err) => {
                self.commits.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Starts a detail fetch for a commit of the current repository.
    ///
    /// Clears the selection and invalidates any outstanding selection ticket.
    /// Without a loaded repository, or with an empty hash, the failure is
    /// recorded as the session error and no ticket is issued.
    pub fn begin_select(&mut self, sha: &str) -> Result<SelectTicket, GitHubError> {
        self.select_generation += 1;
        self.selected = None;
        self.error = None;

        let ticket = match &self.repository {
            None => Err(GitHubError::InvalidReference(
                "no repository loaded".to_string(),
            )),
            Some(_) if sha.is_empty() => Err(GitHubError::InvalidSha(sha.to_string())),
            Some(reference) => Ok(SelectTicket {
                generation: self.select_generation,
                reference: reference.clone(),
                sha: sha.to_string(),
            }),
        };

        if let Err(err) = &ticket {
            self.error = Some(err.to_string());
        }
        ticket
    }

    /// Applies the outcome of a detail fetch, analysing a successful result.
    ///
    /// Returns false when the ticket has been superseded by a newer selection
    /// or list fetch.
    pub fn finish_select(
        &mut self,
        ticket: SelectTicket,
        result: Result<CommitDetail, GitHubError>,
    ) -> bool {
        if ticket.generation != self.select_generation {
            debug!(sha = %ticket.sha, "Discarding stale commit detail response");
            return false;
        }

        match result {
            Ok(detail) => self.selected = Some(SelectedCommit::new(detail)),
            Err(err) => {
                self.selected = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Parses `url` and fetches its commit list.
    pub async fn load(
        &mut self,
        source: &dyn CommitSource,
        url: &str,
    ) -> Result<&[CommitSummary], GitHubError> {
        let ticket = self.begin_list(url)?;
        let result = source.fetch_commits(ticket.reference()).await;

        match result {
            Ok(commits) => {
                self.finish_list(ticket, Ok(commits));
                Ok(self.commits.as_slice())
            }
            Err(err) => {
                self.finish_list(ticket, Err(err.clone()));
                Err(err)
            }
        }
    }

    /// Fetches and analyzes one commit of the current repository.
    pub async fn select(
        &mut self,
        source: &dyn CommitSource,
        sha: &str,
    ) -> Result<&SelectedCommit, GitHubError> {
        let ticket = self.begin_select(sha)?;
        let result = source.fetch_detail(ticket.reference(), ticket.sha()).await;

        let failure = result.as_ref().err().cloned();
        self.finish_select(ticket, result);
        if let Some(err) = failure {
            return Err(err);
        }
        // The ticket cannot be superseded while `self` is borrowed mutably
        self.selected
            .as_ref()
            .ok_or_else(|| GitHubError::InvalidSha(sha.to_string()))
    }
}
