use crate::models::{Book, SearchResponse, SearchResult};

use super::hyphen::broken_word;

/// Search every line of `books` for the literal `term`.
///
/// The term is used as given: no trimming, no case folding. Books without
/// content and lines without text are skipped. A word broken across two lines
/// matches on the line where it starts. Results come back in scan order.
///
/// # Examples
///
/// ```
/// use scanbook_core::{search, Book, Line};
///
/// let books = vec![Book::new(
///     "Twenty Thousand Leagues Under the Sea",
///     "9780000528531",
///     vec![
///         Line::new(31, 8, "now simply went on by her own momentum.  The dark-"),
///         Line::new(31, 9, "ness was then profound; and however good the Canadian's"),
///     ],
/// )];
///
/// let response = search("darkness", &books);
/// assert_eq!(response.results.len(), 1);
/// assert_eq!(response.results[0].line, Some(serde_json::Number::from(8)));
/// ```
#[must_use]
pub fn search(term: &str, books: &[Book]) -> SearchResponse {
    let results = books
        .iter()
        .flat_map(|book| matches_in_book(term, book))
        .collect::<Vec<_>>();

    tracing::debug!(
        "Searched {} books for {:?}: {} matching lines",
        books.len(),
        term,
        results.len()
    );

    SearchResponse {
        search_term: term.to_string(),
        results,
    }
}

/// Whether `term` occurs in a line's `text` or in the broken word it starts
#[must_use]
pub fn line_matches(term: &str, text: &str, joined: Option<&str>) -> bool {
    text.contains(term) || joined.is_some_and(|word| word.contains(term))
}

fn matches_in_book<'a>(term: &'a str, book: &'a Book) -> impl Iterator<Item = SearchResult> + 'a {
    let lines = book.lines();
    lines.iter().enumerate().filter_map(move |(index, line)| {
        let text = line.text()?;
        let joined = broken_word(text, lines.get(index + 1));
        line_matches(term, text, joined.as_deref()).then(|| SearchResult::locate(book, line))
    })
}
