mod issue;
mod pull_request;

pub use issue::render_issue;
pub use pull_request::render_pull_request;

// Downstream consumers split transcripts on these exact markers.
pub(super) const COMMENTS_HEADER: &str = "============ Comments ============";
pub(super) const REVIEWS_HEADER: &str = "============ Reviews ============";
pub(super) const DIFF_HEADER: &str = "============ Diff ============";
pub(super) const REVIEW_COMMENTS_HEADER: &str = "------------ Review Comments ------------";
pub(super) const ENTRY_SEPARATOR: &str = "========================";
pub(super) const REVIEW_COMMENT_SEPARATOR: &str = "-----------------------";

/// Appends `#<number>: <title>` followed by the body.
fn push_heading(text: &mut String, number: u64, title: &str, body: Option<&str>) {
    text.push_str(&format!("#{number}: {title}\n"));
    text.push_str(body.unwrap_or_default());
    text.push('\n');
}

/// Appends `<N> <noun> skipped` when `skipped` is positive.
fn push_skipped(text: &mut String, skipped: i64, noun: &str) {
    if skipped <= 0 {
        return;
    }
    let plural = if skipped > 1 { "s" } else { "" };
    text.push_str(&format!("{skipped} {noun}{plural} skipped\n"));
}

fn push_section_header(text: &mut String, header: &str) {
    text.push('\n');
    text.push_str(header);
    text.push('\n');
}

fn push_author_line(text: &mut String, created_at: &str, author: &str) {
    text.push_str(&format!("{created_at} @{author}:\n"));
}

fn push_line(text: &mut String, line: &str) {
    text.push_str(line);
    text.push('\n');
}
