//! Repository identification.

use std::fmt;
use std::process::Command;
use std::str::FromStr;

use super::error::{GitHubError, Result};

/// An `owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = GitHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(GitHubError::RepoInfoError(format!(
                "Invalid repository format: {s}. Expected owner/repo"
            ))),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl RepoRef {
    /// Resolve the target repository.
    ///
    /// An explicit `owner/repo` wins; otherwise the repository of the current
    /// directory is asked from the GitHub CLI.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(repo) = explicit.filter(|r| !r.is_empty()) {
            return repo.parse();
        }

        let output = Command::new("gh")
            .args([
                "repo",
                "view",
                "--json",
                "nameWithOwner",
                "-q",
                ".nameWithOwner",
            ])
            .output()
            .map_err(|e| GitHubError::RepoInfoError(e.to_string()))?;

        if !output.status.success() {
            return Err(GitHubError::RepoInfoError(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8_lossy(&output.stdout).trim().parse()
    }
}
