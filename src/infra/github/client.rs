//! GitHub API client implementation using octocrab.

use std::process::Command;

use serde::Deserialize;

use super::error::{GitHubError, Result};

/// Internal wrapper for GitHub GraphQL API responses.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error returned by GitHub API.
#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Production implementation using octocrab.
pub struct OctocrabClient {
    pub(crate) client: octocrab::Octocrab,
}

impl OctocrabClient {
    /// Build a client authenticated with `token`.
    pub fn new(token: &str) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| GitHubError::TokenError(format!("Failed to build octocrab client: {e}")))?;
        Ok(Self { client })
    }

    /// Build a client against a custom API root (GitHub Enterprise, tests).
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .base_uri(base_url)?
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { client })
    }

    /// Build a client from an explicit token, falling back to `gh auth token`.
    ///
    /// `api_url` selects the API root (`GITHUB_API_URL` on Enterprise runners);
    /// blank or absent means api.github.com.
    pub fn from_token_or_gh(token: Option<&str>, api_url: Option<&str>) -> Result<Self> {
        let token = match token.filter(|t| !t.is_empty()) {
            Some(token) => token.to_string(),
            None => {
                tracing::warn!("No GitHub token given, falling back to `gh auth token`");
                get_gh_token()?
            }
        };
        match api_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => {
                tracing::debug!(api_url = url, "Using custom GitHub API root");
                Self::with_base_url(url, &token)
            }
            None => Self::new(&token),
        }
    }

    /// Execute a GraphQL query and deserialize the response.
    ///
    /// Unwraps the `data` field. Errors reported by GitHub are returned as
    /// `GraphQLNotFound` when every one of them is a `NOT_FOUND`, and as
    /// `GraphQLError` otherwise.
    pub async fn graphql<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        tracing::debug!(%variables, "Sending GraphQL query");
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let response: GraphQLResponse<T> = self.client.graphql(&body).await?;

        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            let joined = messages.join(", ");
            if errors.iter().all(|e| e.kind.as_deref() == Some("NOT_FOUND")) {
                return Err(GitHubError::GraphQLNotFound(joined));
            }
            return Err(GitHubError::GraphQLError(joined));
        }

        response
            .data
            .ok_or_else(|| GitHubError::GraphQLError("No data in response".to_string()))
    }
}

/// Get GitHub token from `gh auth token` command.
/// This reuses the authentication from GitHub CLI.
fn get_gh_token() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .map_err(|e| GitHubError::TokenError(format!("Failed to run gh auth token: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitHubError::TokenError(format!(
            "gh auth token failed: {stderr}"
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(GitHubError::TokenError(
            "gh auth token returned empty token".to_string(),
        ));
    }

    Ok(token)
}
