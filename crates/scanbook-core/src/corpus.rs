//! Loading scanned books from JSON
//!
//! A corpus is a JSON array of books. Anything inside the array is read
//! leniently (see [`Book`]); only a document that is not valid JSON, or whose
//! top level is not an array, is rejected.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::Book;

/// Parse a corpus from a JSON string
pub fn parse_books(json: &str) -> Result<Vec<Book>> {
    books_from_value(serde_json::from_str(json)?)
}

/// Parse a corpus from any reader
pub fn read_books(reader: impl Read) -> Result<Vec<Book>> {
    books_from_value(serde_json::from_reader(reader)?)
}

/// Load a corpus from a JSON file on disk
pub fn load_books(path: &Path) -> Result<Vec<Book>> {
    let file = File::open(path)?;
    let books = read_books(BufReader::new(file))?;
    tracing::debug!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

fn books_from_value(value: Value) -> Result<Vec<Book>> {
    match value {
        Value::Array(items) => Ok(items.into_iter().map(Book::from_value).collect()),
        other => Err(Error::InvalidInput(format!(
            "expected a JSON array of books, found {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
