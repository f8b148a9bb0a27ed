use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "scanbook")]
#[command(about = "Search scanned books, including words broken across lines")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a JSON array of scanned books (falls back to SCANBOOK_BOOKS)
    #[arg(long, global = true, value_name = "PATH")]
    pub books: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find lines containing a literal term
    Search {
        /// Search term, matched exactly (case and spaces included)
        #[arg(allow_hyphen_values = true)]
        term: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// List words rebuilt from lines ending in a hyphen
    Joins {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
