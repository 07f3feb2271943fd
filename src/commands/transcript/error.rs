use thiserror::Error;

use crate::infra::github::GitHubError;

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("Issue not found")]
    IssueNotFound,

    #[error("PR not found")]
    PullRequestNotFound,

    #[error(transparent)]
    Transport(#[from] GitHubError),

    #[error("Failed to fetch PR diff: {0}")]
    DiffFetch(#[source] GitHubError),
}

pub type Result<T> = std::result::Result<T, TranscriptError>;
