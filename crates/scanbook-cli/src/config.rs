//! Runtime configuration for the CLI.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::CliError;

pub const BOOKS_PATH_ENV: &str = "SCANBOOK_BOOKS";

/// Resolve the corpus path from the `--books` flag, then `SCANBOOK_BOOKS`.
pub fn resolve_books_path(cli_books: Option<PathBuf>) -> Result<PathBuf, CliError> {
    books_path_from(cli_books, env::var_os(BOOKS_PATH_ENV))
}

pub fn books_path_from(
    cli_books: Option<PathBuf>,
    env_books: Option<OsString>,
) -> Result<PathBuf, CliError> {
    cli_books
        .or_else(|| env_books.filter(|value| !value.is_empty()).map(PathBuf::from))
        .ok_or(CliError::MissingBooksPath)
}
