use std::path::Path;

use scanbook_core::search::broken_words;

use crate::commands::common::{format_broken_word_lines, load_corpus};
use crate::error::CliError;

pub fn run_joins(as_json: bool, books_path: &Path) -> Result<(), CliError> {
    let books = load_corpus(books_path)?;
    let words = broken_words(&books);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        for line in format_broken_word_lines(&words) {
            println!("{line}");
        }
    }

    Ok(())
}
