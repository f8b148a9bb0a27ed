use std::path::Path;

use scanbook_core::render::{render_json, render_text};
use scanbook_core::search::search;

use crate::cli::OutputFormat;
use crate::commands::common::{load_corpus, validate_search_term};
use crate::error::CliError;

pub fn run_search(term: &str, format: OutputFormat, books_path: &Path) -> Result<(), CliError> {
    let term = validate_search_term(term)?;
    let books = load_corpus(books_path)?;
    let response = search(term, &books);

    match format {
        OutputFormat::Json => println!("{}", render_json(&response)?),
        OutputFormat::Text => {
            for line in render_text(&response) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
