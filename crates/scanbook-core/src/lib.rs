//! scanbook-core - Core library for scanbook
//!
//! This crate contains the book models, the lenient JSON corpus loader, the
//! line search engine, and response renderers used by the CLI.

pub mod corpus;
pub mod error;
pub mod models;
pub mod render;
pub mod search;

pub use error::{Error, Result};
pub use models::{Book, Line, SearchResponse, SearchResult};
pub use search::search;
