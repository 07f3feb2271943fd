//! wiremock-based GitHub mock server for testing.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! mock.issue(1).title("Bug").comments(3, &[("t1", Some("a"), "c1")]).get().await;
//! mock.issue(2).get_not_found().await;
//!
//! mock.pull_request(95).review("t1", "me", "LGTM", &[]).get().await;
//! mock.pull_request(95).diff("diff --git ...").await;
//! ```
//!
//! Diff mocks are served for the `owner/repo` repository.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::OctocrabClient;

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Root URL of the mock server, usable as an API root.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get an OctocrabClient configured to use this mock server.
    pub fn client(&self) -> OctocrabClient {
        OctocrabClient::with_base_url(&self.server.uri(), "test-token").unwrap()
    }

    pub fn issue(&self, number: u64) -> IssueMock<'_> {
        IssueMock {
            server: &self.server,
            number,
            title: "Test Issue".to_string(),
            body: "Test body".to_string(),
            comments: None,
        }
    }

    pub fn pull_request(&self, number: u64) -> PullRequestMock<'_> {
        PullRequestMock {
            server: &self.server,
            number,
            title: "Test PR".to_string(),
            body: "Test PR body".to_string(),
            comments: None,
            reviews: Vec::new(),
        }
    }

    /// Mock every GraphQL request with a fixed response body.
    pub async fn graphql_raw(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .mount(&self.server)
            .await;
    }
}

fn comment_json(created_at: &str, author: Option<&str>, body: &str) -> serde_json::Value {
    json!({
        "createdAt": created_at,
        "author": author.map(|login| json!({"login": login})),
        "body": body,
        "minimizedReason": null,
    })
}

fn window_json(total_count: usize, nodes: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "totalCount": total_count,
        "nodes": nodes,
    })
}

async fn mount_graphql(server: &MockServer, marker: &str, response: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains(marker))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

/// Builder for the issue conversation query.
pub struct IssueMock<'a> {
    server: &'a MockServer,
    number: u64,
    title: String,
    body: String,
    comments: Option<serde_json::Value>,
}

impl IssueMock<'_> {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Comments as `(createdAt, author, body)` with the reported total count.
    pub fn comments(mut self, total_count: usize, comments: &[(&str, Option<&str>, &str)]) -> Self {
        let nodes = comments
            .iter()
            .map(|(at, author, body)| comment_json(at, *author, body))
            .collect();
        self.comments = Some(window_json(total_count, nodes));
        self
    }

    pub async fn get(self) {
        let response = json!({
            "data": {
                "repository": {
                    "issue": {
                        "number": self.number,
                        "title": self.title,
                        "body": self.body,
                        "comments": self.comments,
                    }
                }
            }
        });
        mount_graphql(self.server, "issue(number:", response).await;
    }

    /// Repository resolves but the issue field is null.
    pub async fn get_null(self) {
        let response = json!({"data": {"repository": {"issue": null}}});
        mount_graphql(self.server, "issue(number:", response).await;
    }

    /// GitHub's response for a number that does not exist.
    pub async fn get_not_found(self) {
        let response = json!({
            "data": {"repository": {"issue": null}},
            "errors": [{
                "type": "NOT_FOUND",
                "path": ["repository", "issue"],
                "message": format!("Could not resolve to an Issue with the number of {}.", self.number)
            }]
        });
        mount_graphql(self.server, "issue(number:", response).await;
    }
}

/// Builder for the pull request conversation query and diff endpoint.
pub struct PullRequestMock<'a> {
    server: &'a MockServer,
    number: u64,
    title: String,
    body: String,
    comments: Option<serde_json::Value>,
    reviews: Vec<serde_json::Value>,
}

impl PullRequestMock<'_> {
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn comments(mut self, total_count: usize, comments: &[(&str, Option<&str>, &str)]) -> Self {
        let nodes = comments
            .iter()
            .map(|(at, author, body)| comment_json(at, *author, body))
            .collect();
        self.comments = Some(window_json(total_count, nodes));
        self
    }

    /// Add a review with inline comments given as `(createdAt, diffHunk, body)`.
    pub fn review(
        mut self,
        created_at: &str,
        author: &str,
        body: &str,
        inline: &[(&str, &str, &str)],
    ) -> Self {
        let nodes: Vec<serde_json::Value> = inline
            .iter()
            .map(|(at, hunk, text)| {
                json!({
                    "createdAt": at,
                    "author": {"login": author},
                    "body": text,
                    "minimizedReason": null,
                    "outdated": false,
                    "diffHunk": hunk,
                })
            })
            .collect();
        self.reviews.push(json!({
            "createdAt": created_at,
            "author": {"login": author},
            "body": body,
            "comments": window_json(nodes.len(), nodes),
        }));
        self
    }

    pub async fn get(self) {
        let reviews = if self.reviews.is_empty() {
            serde_json::Value::Null
        } else {
            window_json(self.reviews.len(), self.reviews)
        };
        let response = json!({
            "data": {
                "repository": {
                    "pullRequest": {
                        "number": self.number,
                        "title": self.title,
                        "body": self.body,
                        "comments": self.comments,
                        "reviews": reviews,
                    }
                }
            }
        });
        mount_graphql(self.server, "pullRequest(number:", response).await;
    }

    pub async fn get_not_found(self) {
        let response = json!({
            "data": {"repository": {"pullRequest": null}},
            "errors": [{
                "type": "NOT_FOUND",
                "path": ["repository", "pullRequest"],
                "message": format!("Could not resolve to a PullRequest with the number of {}.", self.number)
            }]
        });
        mount_graphql(self.server, "pullRequest(number:", response).await;
    }

    /// Serve the raw diff for `GET /repos/owner/repo/pulls/{number}`.
    pub async fn diff(self, diff: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/owner/repo/pulls/{}", self.number)))
            .respond_with(ResponseTemplate::new(200).set_body_string(diff))
            .mount(self.server)
            .await;
    }

    /// Serve the diff but require that it is never requested; checked when the server drops.
    pub async fn diff_never_requested(self) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/owner/repo/pulls/{}", self.number)))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(0)
            .mount(self.server)
            .await;
    }

    pub async fn diff_error(self, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/owner/repo/pulls/{}", self.number)))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "diff unavailable",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }
}
