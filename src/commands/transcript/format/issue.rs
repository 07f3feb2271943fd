use super::{
    COMMENTS_HEADER, ENTRY_SEPARATOR, push_author_line, push_heading, push_line,
    push_section_header, push_skipped,
};
use crate::commands::transcript::models::Issue;

/// Render an issue and its comment window into a transcript.
///
/// The comments section is emitted whenever the window is present, even if
/// it holds no comments, so a truncated-to-zero window still reports how many
/// comments were skipped.
pub fn render_issue(issue: &Issue) -> String {
    let mut text = String::new();
    push_heading(&mut text, issue.number, &issue.title, issue.body.as_deref());

    let Some(comments) = &issue.comments else {
        return text;
    };

    push_section_header(&mut text, COMMENTS_HEADER);
    push_skipped(&mut text, comments.skipped(), "comment");

    for comment in comments.iter() {
        push_author_line(&mut text, &comment.created_at, comment.author_login());
        push_line(&mut text, &comment.body);
        push_line(&mut text, ENTRY_SEPARATOR);
    }

    text
}
