//! GitHub repository references and REST API access.

pub mod client;
pub mod error;
pub mod models;
pub mod reference;

pub use client::{CommitSource, GitHubClient, DEFAULT_API_URL};
pub use error::GitHubError;
pub use models::{decode_commit_detail, decode_commit_list};
pub use reference::RepositoryReference;
