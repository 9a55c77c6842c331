//! Cellar CLI - Command-line interface for Cellar Search
//!
//! Runs the widget's keyword and platform search against the catalog.

mod cli;
mod commands;
mod error;

use std::io;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::common::load_catalog;
use crate::commands::completions::run_completions;
use crate::commands::list::run_list;
use crate::commands::platforms::run_platforms;
use crate::commands::search::run_search;
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
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cellar=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Search {
            query,
            platforms,
            limit,
            json,
        } => {
            let catalog = load_catalog(cli.catalog)?;
            run_search(&mut stdout, &catalog, &query, &platforms, limit, json)?;
        }
        Commands::List { json } => {
            let catalog = load_catalog(cli.catalog)?;
            run_list(&mut stdout, &catalog, json)?;
        }
        Commands::Platforms { json } => {
            let catalog = load_catalog(cli.catalog)?;
            run_platforms(&mut stdout, &catalog, json)?;
        }
        Commands::Completions { shell } => run_completions(&mut stdout, shell)?,
    }

    Ok(())
}
