use clap::Args;

use super::error::{Result, RunError};
use crate::commands::transcript::Target;

/// Action inputs.
///
/// The runner exposes unset inputs as empty strings, so every value is read
/// as text and blank values count as absent.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionInputs {
    /// Issue to work on
    #[arg(long, env = "INPUT_ISSUE_NUMBER")]
    pub issue_number: Option<String>,

    /// Pull request to work on (its branch is checked out)
    #[arg(long, env = "INPUT_PR_NUMBER")]
    pub pr_number: Option<String>,

    /// Free-text task description
    #[arg(long, env = "INPUT_TASK")]
    pub task: Option<String>,

    /// GitHub token (defaults to `gh auth token`)
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Comma-separated config files forwarded to the CLI as `--config`
    #[arg(long, env = "INPUT_CONFIG")]
    pub config: Option<String>,
}

/// What a run works on, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Conversation(Target),
    Task(String),
}

impl Request {
    pub fn pull_request(&self) -> Option<u64> {
        match self {
            Self::Conversation(Target::PullRequest(n)) => Some(*n),
            _ => None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(name: &str, value: Option<&str>) -> Result<Option<u64>> {
    non_blank(value)
        .map(|v| {
            v.parse::<u64>()
                .map_err(|_| RunError::InvalidInput(format!("Invalid {name}: {v}")))
        })
        .transpose()
}

impl ActionInputs {
    pub fn validate(&self) -> Result<Request> {
        let issue = parse_number("issue_number", self.issue_number.as_deref())?;
        let pr = parse_number("pr_number", self.pr_number.as_deref())?;
        let task = non_blank(self.task.as_deref());

        match (issue, pr, task) {
            (Some(_), Some(_), _) => Err(RunError::InvalidInput(
                "Only one of issue_number or pr_number can be provided".to_string(),
            )),
            (Some(n), None, _) => Ok(Request::Conversation(Target::Issue(n))),
            (None, Some(n), _) => Ok(Request::Conversation(Target::PullRequest(n))),
            (None, None, Some(task)) => Ok(Request::Task(task.to_string())),
            (None, None, None) => Err(RunError::InvalidInput(
                "One of issue_number, pr_number, or task must be provided".to_string(),
            )),
        }
    }

    /// `--config <path>` pairs for every comma-separated config path.
    pub fn config_args(&self) -> Vec<String> {
        non_blank(self.config.as_deref())
            .map(|paths| {
                paths
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .flat_map(|p| ["--config".to_string(), p.to_string()])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn github_token(&self) -> Option<&str> {
        non_blank(self.github_token.as_deref())
    }
}
