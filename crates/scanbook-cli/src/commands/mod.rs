pub mod common;
pub mod joins;
pub mod search;
