mod comment;
mod issue;
mod pull_request;
mod window;

pub use comment::{Author, Comment};
pub use issue::Issue;
pub use pull_request::{PullRequest, Review};
pub use window::Window;
