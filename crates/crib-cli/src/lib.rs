//! crib CLI - content search across a directory of markdown cheatsheets
//!
//! This is the library behind the `crib` binary. All command implementations
//! are organized in separate modules; [`run`] parses arguments, sets up
//! logging and dispatches.
use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::commands::ShowOptions;
use crate::utils::{Library, initialize_logging};
use cli::{Cli, Commands};

/// Execute the crib CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if configuration loading, selection, or writing output
/// fails.
pub fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            // Exit silently for pipeline truncation
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let quiet = cli.quiet;

    if let Commands::Completions { shell } = &cli.command {
        commands::generate(*shell);
        return Ok(());
    }

    let library = Library::open(cli)?;

    match &cli.command {
        Commands::List { format } => {
            commands::list_cheatsheets(&library, format.resolve(), quiet)?;
        },
        Commands::Search {
            query,
            matches,
            format,
        } => {
            commands::search_content(&library, query, *matches, format.resolve(), quiet)?;
        },
        Commands::Show {
            key,
            query,
            line_numbers,
            format,
        } => {
            let options = ShowOptions {
                query: query.as_deref(),
                line_numbers: *line_numbers,
                format: format.resolve(),
                quiet,
            };
            commands::show_cheatsheet(&library, key, options)?;
        },
        Commands::Outline { key, format } => {
            commands::show_outline(&library, key, format.resolve(), quiet)?;
        },
        Commands::Completions { .. } => {},
    }

    Ok(())
}
