//! Scanned book model
//!
//! Scanned corpora are loosely shaped: any field may be missing, `null`, or of
//! the wrong type. Fields that cannot be read load as `None` instead of
//! failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A single scanned line of a book
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Line {
    /// Page the line was scanned from, kept exactly as written
    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<Number>,
    /// Line number within the page, kept exactly as written
    #[serde(default, deserialize_with = "lenient")]
    pub line: Option<Number>,
    /// Raw scanned text, including any trailing hyphen
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl Line {
    /// Create a fully populated line
    #[must_use]
    pub fn new(page: i64, line: i64, text: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            line: Some(line.into()),
            text: Some(text.into()),
        }
    }

    /// The scanned text, if the line has any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A scanned book with its lines in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title", default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(rename = "ISBN", default, deserialize_with = "lenient")]
    pub isbn: Option<String>,
    /// `None` when the scan has no usable content at all
    #[serde(rename = "Content", default, deserialize_with = "lenient_lines")]
    pub content: Option<Vec<Line>>,
}

impl Book {
    /// Create a book with a title, ISBN and content
    #[must_use]
    pub fn new(title: impl Into<String>, isbn: impl Into<String>, content: Vec<Line>) -> Self {
        Self {
            title: Some(title.into()),
            isbn: Some(isbn.into()),
            content: Some(content),
        }
    }

    /// Lines of the book; empty when content is missing
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Read a book from an arbitrary JSON value.
    ///
    /// Anything that is not an object yields a book with no fields set.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_lines<'de, D>(deserializer: D) -> Result<Option<Vec<Line>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| Line::deserialize(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_book_deserializes_pascal_case_keys() {
        let book: Book = serde_json::from_value(json!({
            "Title": "Twenty Thousand Leagues Under the Sea",
            "ISBN": "9780000528531",
            "Content": [
                { "Page": 31, "Line": 8, "Text": "now simply went on by her own momentum.  The dark-" }
            ]
        }))
        .unwrap();

        assert_eq!(
            book,
            Book::new(
                "Twenty Thousand Leagues Under the Sea",
                "9780000528531",
                vec![Line::new(
                    31,
                    8,
                    "now simply went on by her own momentum.  The dark-"
                )],
            )
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let book: Book = serde_json::from_value(json!({ "Title": null, "ISBN": null })).unwrap();
        assert_eq!(book, Book::default());
        assert!(book.lines().is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_are_none() {
        let book: Book = serde_json::from_value(json!({
            "Title": 42,
            "ISBN": "0000000002",
            "Content": [{ "Page": "twelve", "Line": true, "Text": ["not", "text"] }]
        }))
        .unwrap();

        assert_eq!(book.title, None);
        assert_eq!(book.isbn.as_deref(), Some("0000000002"));
        assert_eq!(book.lines(), &[Line::default()]);
    }

    #[test]
    fn test_non_integer_numbers_are_kept() {
        let line: Line =
            serde_json::from_value(json!({ "Page": 31.0, "Line": 8.5, "Text": "dark" })).unwrap();

        assert_eq!(serde_json::to_value(&line.page).unwrap(), json!(31.0));
        assert_eq!(serde_json::to_value(&line.line).unwrap(), json!(8.5));
    }

    #[test]
    fn test_non_array_content_is_none() {
        let book: Book =
            serde_json::from_value(json!({ "ISBN": "1", "Content": "page one" })).unwrap();
        assert_eq!(book.content, None);
    }

    #[test]
    fn test_non_object_line_becomes_empty_line() {
        let book: Book = serde_json::from_value(json!({
            "Content": [null, 7, { "Page": 1, "Line": 2, "Text": "kept" }]
        }))
        .unwrap();

        assert_eq!(
            book.lines(),
            &[Line::default(), Line::default(), Line::new(1, 2, "kept")]
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let line: Line =
            serde_json::from_value(json!({ "Page": 1, "Line": 1, "Text": "a", "Ocr": 0.93 }))
                .unwrap();
        assert_eq!(line, Line::new(1, 1, "a"));
    }

    #[test]
    fn test_from_value_tolerates_non_objects() {
        assert_eq!(Book::from_value(json!("not a book")), Book::default());
        assert_eq!(Book::from_value(Value::Null), Book::default());
    }

    #[test]
    fn test_serializes_none_as_null() {
        let value = serde_json::to_value(Line::default()).unwrap();
        assert_eq!(value, json!({ "Page": null, "Line": null, "Text": null }));
    }
}
