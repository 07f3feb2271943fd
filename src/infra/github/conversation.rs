//! Issue and pull request conversation queries.

use indoc::indoc;
use serde::Deserialize;
use serde_json::json;

use super::client::OctocrabClient;
use super::error::{GitHubError, Result};
use super::repo::RepoRef;
use crate::commands::transcript::models::{Issue, PullRequest};

// Only the most recent page is fetched; the window's totalCount tells the
// renderer how much was left out.
const ISSUE_QUERY: &str = indoc! {"
    query($owner: String!, $repo: String!, $number: Int!) {
      repository(owner: $owner, name: $repo) {
        issue(number: $number) {
          number
          title
          body
          comments(last: 100) {
            totalCount
            nodes {
              createdAt
              author { login }
              body
            }
          }
        }
      }
    }
"};

const PULL_REQUEST_QUERY: &str = indoc! {"
    query($owner: String!, $repo: String!, $number: Int!) {
      repository(owner: $owner, name: $repo) {
        pullRequest(number: $number) {
          number
          title
          body
          comments(last: 100) {
            totalCount
            nodes {
              createdAt
              author { login }
              body
              minimizedReason
            }
          }
          reviews(last: 100) {
            totalCount
            nodes {
              createdAt
              author { login }
              body
              comments(first: 100) {
                totalCount
                nodes {
                  createdAt
                  author { login }
                  body
                  minimizedReason
                  outdated
                  diffHunk
                }
              }
            }
          }
        }
      }
    }
"};

#[derive(Debug, Deserialize)]
struct IssueData {
    repository: Option<IssueRepository>,
}

#[derive(Debug, Deserialize)]
struct IssueRepository {
    issue: Option<Issue>,
}

#[derive(Debug, Deserialize)]
struct PullRequestData {
    repository: Option<PullRequestRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestRepository {
    pull_request: Option<PullRequest>,
}

/// Source of issue and pull request conversations.
///
/// `Ok(None)` means the record does not exist or is not visible to the
/// caller; transport failures are errors.
#[async_trait::async_trait]
pub trait ConversationSource: Send + Sync {
    async fn fetch_issue(&self, repo: &RepoRef, number: u64) -> Result<Option<Issue>>;

    async fn fetch_pull_request(&self, repo: &RepoRef, number: u64)
    -> Result<Option<PullRequest>>;

    /// Raw unified diff of a pull request.
    async fn fetch_pull_request_diff(&self, repo: &RepoRef, number: u64) -> Result<String>;
}

fn variables(repo: &RepoRef, number: u64) -> serde_json::Value {
    json!({
        "owner": repo.owner,
        "repo": repo.name,
        "number": number,
    })
}

/// Treat a GraphQL NOT_FOUND the same as a null node.
fn not_found_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(data) => Ok(Some(data)),
        Err(GitHubError::GraphQLNotFound(message)) => {
            tracing::debug!(%message, "GraphQL reported NOT_FOUND");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[async_trait::async_trait]
impl ConversationSource for OctocrabClient {
    async fn fetch_issue(&self, repo: &RepoRef, number: u64) -> Result<Option<Issue>> {
        let data: Option<IssueData> =
            not_found_as_none(self.graphql(ISSUE_QUERY, variables(repo, number)).await)?;
        Ok(data.and_then(|d| d.repository).and_then(|r| r.issue))
    }

    async fn fetch_pull_request(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> Result<Option<PullRequest>> {
        let data: Option<PullRequestData> =
            not_found_as_none(self.graphql(PULL_REQUEST_QUERY, variables(repo, number)).await)?;
        Ok(data
            .and_then(|d| d.repository)
            .and_then(|r| r.pull_request))
    }

    async fn fetch_pull_request_diff(&self, repo: &RepoRef, number: u64) -> Result<String> {
        tracing::debug!(%repo, number, "Fetching pull request diff");
        let diff = self
            .client
            .pulls(&repo.owner, &repo.name)
            .get_diff(number)
            .await?;
        Ok(diff)
    }
}
