use super::{
    COMMENTS_HEADER, DIFF_HEADER, ENTRY_SEPARATOR, REVIEW_COMMENT_SEPARATOR,
    REVIEW_COMMENTS_HEADER, REVIEWS_HEADER, push_author_line, push_heading, push_line,
    push_section_header, push_skipped,
};
use crate::commands::transcript::models::{Comment, PullRequest, Review, Window};

/// Render a pull request, its raw diff, comments and reviews into a transcript.
pub fn render_pull_request(pr: &PullRequest, diff: &str) -> String {
    let mut text = String::new();
    push_heading(&mut text, pr.number, &pr.title, pr.body.as_deref());
    push_line(&mut text, DIFF_HEADER);
    push_line(&mut text, diff);

    if let Some(comments) = pr.comments.as_ref().filter(|w| !w.is_empty()) {
        push_comments(&mut text, comments);
    }

    if let Some(reviews) = pr.reviews.as_ref().filter(|w| !w.is_empty()) {
        push_reviews(&mut text, reviews);
    }

    text
}

fn push_comments(text: &mut String, comments: &Window<Comment>) {
    push_section_header(text, COMMENTS_HEADER);
    push_skipped(text, comments.skipped(), "comment");

    for comment in comments.iter().filter(|c| !c.is_minimized()) {
        push_author_line(text, &comment.created_at, comment.author_login());
        push_line(text, &comment.body);
        push_line(text, ENTRY_SEPARATOR);
    }
}

fn push_reviews(text: &mut String, reviews: &Window<Review>) {
    // The skipped line precedes the section header here, unlike comments.
    push_skipped(text, reviews.skipped(), "review");
    push_section_header(text, REVIEWS_HEADER);

    for review in reviews.iter() {
        push_author_line(text, &review.created_at, review.author_login());
        push_line(text, &review.body);

        if let Some(inline) = review.comments.as_ref().filter(|w| !w.is_empty()) {
            push_review_comments(text, inline);
        }
    }

    push_line(text, ENTRY_SEPARATOR);
}

/// Whether an inline review comment belongs in the transcript.
fn is_visible_review_comment(comment: &Comment) -> bool {
    !comment.is_minimized() && !comment.is_outdated()
}

fn push_review_comments(text: &mut String, comments: &Window<Comment>) {
    push_section_header(text, REVIEW_COMMENTS_HEADER);

    // Consecutive comments on the same hunk only show it once.
    let mut last_hunk: Option<&str> = None;

    for comment in comments.iter().filter(|c| is_visible_review_comment(c)) {
        push_author_line(text, &comment.created_at, comment.author_login());

        match comment.diff_hunk.as_deref() {
            Some(hunk) if last_hunk != Some(hunk) => {
                push_line(text, "Diff:");
                push_line(text, hunk);
                push_line(text, "Comment:");
                push_line(text, &comment.body);
                last_hunk = Some(hunk);
            }
            _ => push_line(text, &comment.body),
        }

        push_line(text, REVIEW_COMMENT_SEPARATOR);
    }
}
