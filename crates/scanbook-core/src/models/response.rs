//! Search result models

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Book, Line};

/// One matching line, identified by its book ISBN, page and line number
///
/// Values are copied verbatim from the source records, absent ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub page: Option<Number>,
    pub line: Option<Number>,
}

impl SearchResult {
    /// Attribute a match to `line` of `book`
    #[must_use]
    pub fn locate(book: &Book, line: &Line) -> Self {
        Self {
            isbn: book.isbn.clone(),
            page: line.page.clone(),
            line: line.line.clone(),
        }
    }
}

/// The outcome of one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    /// The term exactly as it was given
    pub search_term: String,
    /// Matches in scan order
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Number of matching lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_response_serializes_pascal_case_keys() {
        let response = SearchResponse {
            search_term: "Happy".to_string(),
            results: vec![SearchResult {
                isbn: Some("0000000003".to_string()),
                page: None,
                line: None,
            }],
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "SearchTerm": "Happy",
                "Results": [{ "ISBN": "0000000003", "Page": null, "Line": null }]
            })
        );
    }

    #[test]
    fn test_locate_copies_absent_values() {
        let book = Book {
            title: None,
            isbn: None,
            content: None,
        };
        let line = Line {
            page: Some(4.into()),
            line: None,
            text: Some("text".to_string()),
        };

        assert_eq!(
            SearchResult::locate(&book, &line),
            SearchResult {
                isbn: None,
                page: Some(4.into()),
                line: None,
            }
        );
    }
}
