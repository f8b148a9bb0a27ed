//! Data models for scanbook

mod book;
mod response;

pub use book::{Book, Line};
pub use response::{SearchResponse, SearchResult};
