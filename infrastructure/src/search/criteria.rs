use domain::{Author, Document, SearchRequest};
use tracing::trace;

/// Checks a document against every constraint of a search request.
///
/// Constraints are combined with AND; an empty list or an absent bound
/// imposes nothing.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    if !title_matches(&document.title, &request.title_prefixes) {
        trace!(doc_id = %document.id, "Title constraint not met, skipping doc.");
        return false;
    }
    if !content_matches(&document.content, &request.contains_contents) {
        trace!(doc_id = %document.id, "Content constraint not met, skipping doc.");
        return false;
    }
    if !author_matches(&document.author, &request.author_ids) {
        trace!(doc_id = %document.id, author_id = %document.author.id, "Author constraint not met, skipping doc.");
        return false;
    }
    if !created_in_range(document, request) {
        trace!(doc_id = %document.id, created = %document.created, "Creation date outside requested range, skipping doc.");
        return false;
    }
    true
}

// Exact match ignoring case. The request field is named for prefixes but
// callers rely on equality.
fn title_matches(title: &str, titles: &[String]) -> bool {
    titles.is_empty() || titles.iter().any(|candidate| equals_ignore_case(title, candidate))
}

fn content_matches(content: &str, needles: &[String]) -> bool {
    needles.is_empty() || needles.iter().any(|needle| content.contains(needle.as_str()))
}

fn author_matches(author: &Author, author_ids: &[String]) -> bool {
    author_ids.is_empty() || author_ids.iter().any(|id| *id == author.id)
}

// Both bounds inclusive.
fn created_in_range(document: &Document, request: &SearchRequest) -> bool {
    request
        .created_from
        .is_none_or(|from| document.created >= from)
        && request
            .created_to
            .is_none_or(|to| document.created <= to)
}

fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
