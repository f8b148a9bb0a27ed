//! Rendering search responses for display.

use std::fmt::Display;

use crate::models::{SearchResponse, SearchResult};
use crate::search::BrokenWord;

const ABSENT: &str = "-";

/// Render a response as pretty-printed JSON in the corpus key spelling.
pub fn render_json(response: &SearchResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(response)
}

/// Render a response as one text line per match.
#[must_use]
pub fn render_text(response: &SearchResponse) -> Vec<String> {
    if response.is_empty() {
        return vec![format!("No matches for {:?}", response.search_term)];
    }

    response.results.iter().map(format_result).collect()
}

/// Format a single match as `ISBN <isbn>  page <page>  line <line>`.
#[must_use]
pub fn format_result(result: &SearchResult) -> String {
    format!(
        "ISBN {}  page {}  line {}",
        or_absent(result.isbn.as_ref()),
        or_absent(result.page.as_ref()),
        or_absent(result.line.as_ref())
    )
}

/// Format a rebuilt word as `<word>  ISBN <isbn>  page <page>  line <line>`.
#[must_use]
pub fn format_broken_word(word: &BrokenWord) -> String {
    format!(
        "{}  ISBN {}  page {}  line {}",
        word.word,
        or_absent(word.isbn.as_ref()),
        or_absent(word.page.as_ref()),
        or_absent(word.line.as_ref())
    )
}

fn or_absent<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), ToString::to_string)
}
