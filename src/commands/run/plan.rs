use std::fmt;

use super::error::{Result, RunError};

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

// Task descriptions can be whole transcripts; keep log lines readable.
const MAX_DISPLAYED_ARG: usize = 60;

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.chars().count() > MAX_DISPLAYED_ARG || arg.contains('\n') {
                write!(f, " <{} chars>", arg.chars().count())?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Where the changes of a run are committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
    /// Check out the head branch of an existing pull request.
    PullRequest(u64),
    /// Start a fresh branch from the current HEAD.
    NewBranch(String),
}

impl Workspace {
    pub fn new_branch(prefix: &str, timestamp_millis: i64) -> Self {
        Self::NewBranch(format!("{prefix}{timestamp_millis}"))
    }
}

/// Build the ordered list of processes a run executes.
///
/// `agent` is the CLI command prefix; `config_args` are inserted after it on
/// every CLI invocation.
pub fn plan_steps(
    workspace: &Workspace,
    agent: &[String],
    config_args: &[String],
    description: &str,
) -> Result<Vec<Step>> {
    let Some((program, agent_args)) = agent.split_first() else {
        return Err(RunError::InvalidInput(
            "agent.command must not be empty".to_string(),
        ));
    };
    let agent_step = |last: &str| {
        Step::new(
            program,
            agent_args
                .iter()
                .chain(config_args)
                .map(String::as_str)
                .chain([last]),
        )
    };

    let checkout = match workspace {
        Workspace::PullRequest(number) => {
            Step::new("gh", ["pr".to_string(), "checkout".to_string(), number.to_string()])
        }
        Workspace::NewBranch(branch) => Step::new("git", ["checkout", "-b", branch.as_str()]),
    };
    let push = match workspace {
        Workspace::PullRequest(_) => Step::new("git", ["push"]),
        Workspace::NewBranch(branch) => Step::new("git", ["push", "origin", branch.as_str()]),
    };

    Ok(vec![
        checkout,
        agent_step(description),
        Step::new("git", ["add", "."]),
        agent_step("commit"),
        push,
        agent_step("pr"),
    ])
}
