use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] scanbook_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Search term cannot be empty")]
    EmptySearchTerm,
    #[error("No books file given. Pass --books <PATH> or set SCANBOOK_BOOKS.")]
    MissingBooksPath,
}
