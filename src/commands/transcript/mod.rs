mod error;
mod format;
pub mod models;

use clap::Args;

pub use error::{Result, TranscriptError};
pub use format::{render_issue, render_pull_request};

use crate::infra::github::{ConversationSource, OctocrabClient, RepoRef};

/// The conversation a transcript is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Issue(u64),
    PullRequest(u64),
}

/// Fetch an issue and render its transcript.
pub async fn issue_transcript(
    source: &(impl ConversationSource + ?Sized),
    repo: &RepoRef,
    number: u64,
) -> Result<String> {
    let issue = source
        .fetch_issue(repo, number)
        .await?
        .ok_or(TranscriptError::IssueNotFound)?;
    Ok(render_issue(&issue))
}

/// Fetch a pull request plus its raw diff and render its transcript.
///
/// The diff is only requested once the pull request resolved, and a diff
/// failure aborts the whole render.
pub async fn pull_request_transcript(
    source: &(impl ConversationSource + ?Sized),
    repo: &RepoRef,
    number: u64,
) -> Result<String> {
    let pr = source
        .fetch_pull_request(repo, number)
        .await?
        .ok_or(TranscriptError::PullRequestNotFound)?;
    let diff = source
        .fetch_pull_request_diff(repo, number)
        .await
        .map_err(TranscriptError::DiffFetch)?;
    Ok(render_pull_request(&pr, &diff))
}

pub async fn transcript_for(
    source: &(impl ConversationSource + ?Sized),
    repo: &RepoRef,
    target: Target,
) -> Result<String> {
    tracing::info!(%repo, ?target, "Building transcript");
    match target {
        Target::Issue(number) => issue_transcript(source, repo, number).await,
        Target::PullRequest(number) => pull_request_transcript(source, repo, number).await,
    }
}

#[derive(Args, Clone, PartialEq, Eq)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["issue", "pr"])))]
pub struct TranscriptArgs {
    /// Issue number
    #[arg(long)]
    pub issue: Option<u64>,

    /// Pull request number
    #[arg(long)]
    pub pr: Option<u64>,

    /// Target repository (owner/repo)
    #[arg(short = 'R', long = "repo", env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// GitHub token (defaults to `gh auth token`)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub API root, for GitHub Enterprise (defaults to https://api.github.com)
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

impl TranscriptArgs {
    fn target(&self) -> Option<Target> {
        match (self.issue, self.pr) {
            (Some(n), _) => Some(Target::Issue(n)),
            (None, Some(n)) => Some(Target::PullRequest(n)),
            (None, None) => None,
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let Some(target) = self.target() else {
            anyhow::bail!("One of --issue or --pr must be provided");
        };
        let repo = RepoRef::resolve(self.repo.as_deref())?;
        let client = OctocrabClient::from_token_or_gh(self.github_token.as_deref(), self.api_url.as_deref())?;

        let text = transcript_for(&client, &repo, target).await?;
        print!("{text}");
        Ok(())
    }
}
