//! Line search over scanned books
//!
//! Matching is a literal, case-sensitive substring test against each line.
//! A line ending in `-` is also tested against the word it starts, rebuilt
//! from the tail of that line and the head of the next one.

mod engine;
mod hyphen;

pub use engine::{line_matches, search};
pub use hyphen::{broken_word, broken_words, BrokenWord};
