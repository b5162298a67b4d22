//! # commit-match
//!
//! Checks whether GitHub commit messages describe the files they change.
//!
//! ## Features
//!
//! - Fetches a repository's recent history and individual commits from the GitHub REST API
//! - Scores each commit by the lexical overlap between its message and its changed paths
//! - Text, JSON and YAML reports
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_match::analysis::CommitMatchAnalyzer;
//! use commit_match::data::{Classification, FileChange};
//!
//! let files = vec![FileChange {
//!     filename: "auth/login.ts".to_string(),
//!     additions: 3,
//!     deletions: 1,
//!     status: "modified".to_string(),
//! }];
//! let result = CommitMatchAnalyzer::analyze_parts("fix login bug", Some(files.as_slice()));
//! assert_eq!(result.confidence, 80);
//! assert_eq!(result.classification, Classification::Good);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod data;
pub mod github;
pub mod session;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of commit-match.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
