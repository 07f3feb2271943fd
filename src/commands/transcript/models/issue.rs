use super::comment::Comment;
use super::window::Window;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub comments: Option<Window<Comment>>,
}
