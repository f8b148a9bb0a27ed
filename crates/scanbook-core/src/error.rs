//! Error types for scanbook-core

use thiserror::Error;

/// Result type alias using scanbook-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a corpus
///
/// Searching itself never fails; these only cover getting books into memory.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
