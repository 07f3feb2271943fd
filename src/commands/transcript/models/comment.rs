use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    pub login: String,
}

/// A comment as returned by the conversation query.
///
/// Issue comments, PR comments and inline review comments share this shape;
/// `minimized_reason`, `outdated` and `diff_hunk` are only ever populated for
/// the PR variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: Option<Author>,
    pub created_at: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub minimized_reason: Option<String>,
    #[serde(default)]
    pub outdated: Option<bool>,
    #[serde(default)]
    pub diff_hunk: Option<String>,
}

impl Comment {
    pub fn author_login(&self) -> &str {
        author_login(self.author.as_ref())
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized_reason
            .as_deref()
            .is_some_and(|reason| !reason.is_empty())
    }

    pub fn is_outdated(&self) -> bool {
        self.outdated.unwrap_or(false)
    }
}

pub(super) fn author_login(author: Option<&Author>) -> &str {
    author.map(|a| a.login.as_str()).unwrap_or("unknown")
}
