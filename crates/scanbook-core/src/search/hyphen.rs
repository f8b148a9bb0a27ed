use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::models::{Book, Line};

const BREAK_MARKER: char = '-';
const WORD_SEPARATOR: char = ' ';

/// A word rebuilt from a line ending in a hyphen and the line after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrokenWord {
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub page: Option<Number>,
    pub line: Option<Number>,
    /// The rebuilt word, without the hyphen or a leading space
    pub word: String,
}

/// Rebuild the word broken by a trailing hyphen on `current`.
///
/// `next` is the following line of the same book, or `None` when `current` is
/// the last line. Returns `None` unless `current` ends with `-` and a next line
/// exists.
///
/// The first half runs from the last space of `current` (kept) up to the
/// hyphen, or from the start of the line when it has no space. The second half
/// is the next line's text up to its first space, all of it when it has no
/// space, and nothing when it has no text.
#[must_use]
pub fn broken_word(current: &str, next: Option<&Line>) -> Option<String> {
    let stem = current.strip_suffix(BREAK_MARKER)?;
    let next = next?;

    let head = stem
        .rfind(WORD_SEPARATOR)
        .map_or(stem, |index| &stem[index..]);
    let tail = next.text().map_or("", |text| {
        text.find(WORD_SEPARATOR).map_or(text, |index| &text[..index])
    });

    Some(format!("{head}{tail}"))
}

/// Every broken word the search engine would rebuild, in scan order
#[must_use]
pub fn broken_words(books: &[Book]) -> Vec<BrokenWord> {
    let mut words = Vec::new();

    for book in books {
        let lines = book.lines();
        for (index, line) in lines.iter().enumerate() {
            let Some(text) = line.text() else {
                continue;
            };
            let Some(joined) = broken_word(text, lines.get(index + 1)) else {
                continue;
            };

            words.push(BrokenWord {
                isbn: book.isbn.clone(),
                page: line.page.clone(),
                line: line.line.clone(),
                word: joined
                    .strip_prefix(WORD_SEPARATOR)
                    .unwrap_or(&joined)
                    .to_string(),
            });
        }
    }

    words
}
