//! scanbook CLI - search scanned book text from the command line
//!
//! Loads a JSON corpus of scanned books and prints the lines matching a
//! literal search term, including words broken across lines.

mod cli;
mod commands;
mod config;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::joins::run_joins;
use crate::commands::search::run_search;
use crate::config::resolve_books_path;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scanbook=info".parse().expect("valid log directive")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { term, format } => {
            let books_path = resolve_books_path(cli.books)?;
            run_search(&term, format, &books_path)?;
        }
        Commands::Joins { json } => {
            let books_path = resolve_books_path(cli.books)?;
            run_joins(json, &books_path)?;
        }
    }

    Ok(())
}
