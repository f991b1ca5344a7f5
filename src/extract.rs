//! Excerpt extraction from article documents.
//!
//! The article body is parsed with `scraper`, the first element matching the
//! content-region selector is located and its text nodes are concatenated.
//! The excerpt is a plain character cut followed by `...`, with no attempt
//! to end on a word or sentence boundary.

use scraper::{Html, Selector};
use tracing::debug;

/// Used when the article has no content region, or an empty one.
pub const NO_CONTENT: &str = "No content available";

/// Appended to every excerpt, truncated or not.
pub const ELLIPSIS: &str = "...";

/// Concatenated text content of the first element matching `selector`.
///
/// Returns `None` when nothing matches.
pub fn content_text(html: &str, selector: &Selector) -> Option<String> {
    let document = Html::parse_document(html);
    let region = document.select(selector).next()?;
    Some(region.text().collect::<String>())
}

/// Keep the first `max_chars` characters of `text` and append [`ELLIPSIS`].
pub fn excerpt_from_text(text: &str, max_chars: usize) -> String {
    let mut excerpt: String = text.chars().take(max_chars).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}

/// Build the excerpt shown on a preview card for one article document.
pub fn excerpt(html: &str, selector: &Selector, max_chars: usize) -> String {
    let text = match content_text(html, selector) {
        Some(text) if !text.is_empty() => text,
        Some(_) => {
            debug!("Content region is empty");
            NO_CONTENT.to_string()
        }
        None => {
            debug!("No content region found");
            NO_CONTENT.to_string()
        }
    };
    excerpt_from_text(&text, max_chars)
}
