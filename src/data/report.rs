//! Match analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CommitDetail, CommitSummary};

/// How well a commit message describes its file changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Confidence above 60.
    Good,
    /// Confidence above 30.
    Partial,
    /// Confidence of 30 or less.
    Poor,
    /// No file list was available.
    Unknown,
}

impl Classification {
    /// Classifies a clamped confidence score.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 60 {
            Self::Good
        } else if confidence > 30 {
            Self::Partial
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Partial => write!(f, "partial"),
            Self::Poor => write!(f, "poor"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Whether a file shares terms with the commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    /// At least one path term matched.
    High,
    /// No path term matched.
    Low,
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Per-file outcome of the match analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRelevance {
    /// Path of the changed file.
    pub file: String,
    /// Line counts rendered as `+A -D`.
    pub change_summary: String,
    /// Upstream change status.
    pub status: String,
    /// Number of path terms that matched a message term.
    pub matched_term_count: usize,
    /// `High` iff `matched_term_count > 0`.
    pub relevance: Relevance,
}

/// Outcome of analysing one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Overall classification.
    pub classification: Classification,
    /// Confidence score in `0..=100`.
    pub confidence: u8,
    /// Per-file results, in the commit's file order.
    pub per_file: Vec<FileRelevance>,
}

impl MatchResult {
    /// Result for commits with no usable file list.
    pub fn unknown() -> Self {
        Self {
            classification: Classification::Unknown,
            confidence: 0,
            per_file: Vec::new(),
        }
    }
}

/// Analysis of a single selected commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitReport {
    /// Repository in `owner/name` form.
    pub repository: String,
    /// The analysed commit.
    pub commit: CommitDetail,
    /// Its match result.
    pub result: MatchResult,
}

/// Analysis of one commit within a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEntry {
    /// The analysed commit.
    pub commit: CommitSummary,
    /// Its match result.
    pub result: MatchResult,
}

/// Counts per classification across a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of commits analysed.
    pub total_commits: usize,
    /// Commits classified as good.
    pub good: usize,
    /// Commits classified as partial.
    pub partial: usize,
    /// Commits classified as poor.
    pub poor: usize,
    /// Commits without a file list.
    pub unknown: usize,
}

impl ScanSummary {
    /// Creates a summary from a list of scan entries.
    pub fn from_entries(entries: &[ScanEntry]) -> Self {
        let mut summary = Self {
            total_commits: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            match entry.result.classification {
                Classification::Good => summary.good += 1,
                Classification::Partial => summary.partial += 1,
                Classification::Poor => summary.poor += 1,
                Classification::Unknown => summary.unknown += 1,
            }
        }

        summary
    }
}

/// Match results for a run of commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Repository in `owner/name` form.
    pub repository: String,
    /// Individual commit results, newest first.
    pub commits: Vec<ScanEntry>,
    /// Summary statistics.
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Creates a new scan report from commit results.
    pub fn new(repository: String, commits: Vec<ScanEntry>) -> Self {
        let summary = ScanSummary::from_entries(&commits);
        Self {
            repository,
            commits,
            summary,
        }
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
