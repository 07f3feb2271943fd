mod error;
mod inputs;
mod plan;
mod runner;

pub use error::{Result, RunError};
pub use inputs::{ActionInputs, Request};
pub use plan::{Step, Workspace, plan_steps};
pub use runner::{CommandRunner, SystemRunner};

use anyhow::Context;
use clap::Args;

use crate::commands::transcript::transcript_for;
use crate::infra::github::{ConversationSource, OctocrabClient, RepoRef};
use crate::shared::config::{Config, load_config};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct RunArgs {
    #[command(flatten)]
    pub inputs: ActionInputs,

    /// Target repository (owner/repo)
    #[arg(short = 'R', long = "repo", env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// GitHub API root, for GitHub Enterprise (defaults to https://api.github.com)
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Print the planned commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        let config = load_config()?;
        let request = self.inputs.validate()?;

        let github = match &request {
            Request::Conversation(_) => Some((
                OctocrabClient::from_token_or_gh(self.inputs.github_token(), self.api_url.as_deref())?,
                RepoRef::resolve(self.repo.as_deref())?,
            )),
            Request::Task(_) => None,
        };
        let description = describe(&request, github.as_ref().map(|(c, r)| (c, r))).await?;

        let workspace = workspace_for(&request, &config, chrono::Utc::now().timestamp_millis());
        let steps = plan_steps(
            &workspace,
            &config.agent.command,
            &self.inputs.config_args(),
            &description,
        )?;

        if self.dry_run {
            for step in &steps {
                println!("{step}");
            }
            return Ok(());
        }

        execute(&steps, &SystemRunner).context("Run aborted")
    }
}

/// Produce the task description handed to the code-generation CLI.
///
/// Conversations are fetched through `source`; a free-text task is used as is.
pub async fn describe<S: ConversationSource + ?Sized>(
    request: &Request,
    source: Option<(&S, &RepoRef)>,
) -> anyhow::Result<String> {
    let description = match (request, source) {
        (Request::Conversation(target), Some((source, repo))) => {
            transcript_for(source, repo, *target).await?
        }
        (Request::Conversation(_), None) => {
            anyhow::bail!("A GitHub client is required to fetch the conversation")
        }
        (Request::Task(task), _) => task.clone(),
    };

    if description.is_empty() {
        return Err(RunError::NoTaskDescription.into());
    }
    Ok(description)
}

/// PR runs work on the PR's own branch; everything else gets a new branch.
pub fn workspace_for(request: &Request, config: &Config, timestamp_millis: i64) -> Workspace {
    match request.pull_request() {
        Some(number) => Workspace::PullRequest(number),
        None => Workspace::new_branch(&config.branch.prefix, timestamp_millis),
    }
}

/// Run every step in order, stopping at the first failure.
pub fn execute(steps: &[Step], runner: &impl CommandRunner) -> Result<()> {
    for step in steps {
        tracing::info!(%step, "Running");
        runner.run(step)?;
    }
    Ok(())
}
