use std::path::Path;

use scanbook_core::corpus::load_books;
use scanbook_core::render::format_broken_word;
use scanbook_core::search::BrokenWord;
use scanbook_core::Book;

use crate::error::CliError;

/// Accept any non-empty term untouched; surrounding spaces are part of it.
pub fn validate_search_term(term: &str) -> Result<&str, CliError> {
    if term.is_empty() {
        Err(CliError::EmptySearchTerm)
    } else {
        Ok(term)
    }
}

pub fn load_corpus(path: &Path) -> Result<Vec<Book>, CliError> {
    let books = load_books(path)?;
    let line_count = books.iter().map(|book| book.lines().len()).sum::<usize>();
    tracing::info!(
        "Loaded {} books ({} lines) from {}",
        books.len(),
        line_count,
        path.display()
    );
    Ok(books)
}

pub fn format_broken_word_lines(words: &[BrokenWord]) -> Vec<String> {
    words.iter().map(format_broken_word).collect()
}
