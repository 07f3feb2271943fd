//! GitHub API client module using octocrab.
//!
//! Provides OctocrabClient for the conversation queries consumed by the
//! transcript builders, with authentication via an explicit token or
//! `gh auth token`.

mod client;
mod conversation;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod mock;
mod repo;

pub use client::OctocrabClient;
pub use conversation::ConversationSource;
pub use error::GitHubError;
pub use repo::RepoRef;
