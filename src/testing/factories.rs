//! Test factories for creating test data with sensible defaults.
//!
//! Use `*_with()` variants to customize specific fields.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories::{issue_with, comment};
//!
//! let i = issue_with(|i| {
//!     i.title = "Custom Title".to_string();
//!     i.number = 42;
//! });
//! ```

use crate::commands::transcript::models::{Author, Comment, Issue, PullRequest, Review};

fn author(login: &str) -> Option<Author> {
    Some(Author {
        login: login.to_string(),
    })
}

// =============================================================================
// Issue factories
// =============================================================================

/// Create an Issue with default test values and no comment window.
pub fn issue() -> Issue {
    Issue {
        number: 1,
        title: "Test Issue".to_string(),
        body: Some("Test body".to_string()),
        comments: None,
    }
}

/// Create an Issue with customizations applied via closure.
pub fn issue_with(f: impl FnOnce(&mut Issue)) -> Issue {
    let mut i = issue();
    f(&mut i);
    i
}

// =============================================================================
// Pull request factories
// =============================================================================

/// Create a PullRequest with default test values, no comments and no reviews.
pub fn pull_request() -> PullRequest {
    PullRequest {
        number: 1,
        title: "Test PR".to_string(),
        body: Some("Test PR body".to_string()),
        comments: None,
        reviews: None,
    }
}

pub fn pull_request_with(f: impl FnOnce(&mut PullRequest)) -> PullRequest {
    let mut p = pull_request();
    f(&mut p);
    p
}

/// Create a Review by `reviewer` with body "Approved" and no inline comments.
pub fn review() -> Review {
    Review {
        author: author("reviewer"),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        body: "Approved".to_string(),
        comments: None,
    }
}

pub fn review_with(f: impl FnOnce(&mut Review)) -> Review {
    let mut r = review();
    f(&mut r);
    r
}

// =============================================================================
// Comment factories
// =============================================================================

/// Create a conversation Comment with default test values.
pub fn comment() -> Comment {
    Comment {
        author: author("commenter"),
        created_at: "2024-01-02T00:00:00Z".to_string(),
        body: "Test comment".to_string(),
        minimized_reason: None,
        outdated: None,
        diff_hunk: None,
    }
}

pub fn comment_with(f: impl FnOnce(&mut Comment)) -> Comment {
    let mut c = comment();
    f(&mut c);
    c
}

/// Create an inline review Comment by `reviewer`, anchored to a default hunk.
pub fn review_comment() -> Comment {
    Comment {
        author: author("reviewer"),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        body: "Test review comment".to_string(),
        minimized_reason: None,
        outdated: Some(false),
        diff_hunk: Some("@@ -1,3 +1,3 @@\n fn main() {\n-    old();\n+    new();".to_string()),
    }
}
