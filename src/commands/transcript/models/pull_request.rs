use super::comment::{Author, Comment, author_login};
use super::window::Window;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub comments: Option<Window<Comment>>,
    pub reviews: Option<Window<Review>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: Option<Author>,
    pub created_at: String,
    #[serde(default)]
    pub body: String,
    pub comments: Option<Window<Comment>>,
}

impl Review {
    pub fn author_login(&self) -> &str {
        author_login(self.author.as_ref())
    }
}
