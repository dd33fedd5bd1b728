//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `crib`, a content search
//! tool for a directory of markdown cheatsheets. The CLI is built using `clap`
//! with derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Every cheatsheet, ranked by name
//! crib list
//!
//! # Cheatsheets containing "branch", with the sections it appears under
//! crib search branch
//! crib search branch --matches
//!
//! # Read one cheatsheet with the query highlighted
//! crib show git --query branch --line-numbers
//!
//! # Headings of one cheatsheet
//! crib outline 2
//! ```
//!
//! ## Directory Selection
//!
//! `--dir` (or `CRIB_DIR`) wins over `[library].dir` in the config file, which
//! wins over the working-directory heuristic in
//! [`crib_core::default_cheatsheets_dir`].

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `crib` command
#[derive(Parser, Clone, Debug)]
#[command(name = "crib")]
#[command(version)]
#[command(about = "crib - Search your markdown cheatsheets by content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Cheatsheet directory
    #[arg(long, global = true, env = "CRIB_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to a configuration file
    #[arg(long, global = true, env = "CRIB_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List every cheatsheet
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        format: FormatArg,
    },

    /// List cheatsheets whose content contains QUERY (case-insensitive)
    #[command(alias = "find")]
    Search {
        /// Text to look for; an empty string lists everything
        query: String,

        /// Also print every matching line with its section
        #[arg(long)]
        matches: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print one cheatsheet
    #[command(alias = "view")]
    Show {
        /// Rank or display name, as shown by `list` (or `search` with --query)
        key: String,

        /// Highlight this text; ranks refer to the listing filtered by it
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,

        /// Prefix each line with its number
        #[arg(short = 'n', long)]
        line_numbers: bool,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Print the headings of one cheatsheet
    #[command(alias = "toc")]
    Outline {
        /// Rank or display name, as shown by `list`
        key: String,

        #[command(flatten)]
        format: FormatArg,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// The output format flag, for commands that take one.
    pub const fn format_arg(&self) -> Option<&FormatArg> {
        match self {
            Self::List { format }
            | Self::Search { format, .. }
            | Self::Show { format, .. }
            | Self::Outline { format, .. } => Some(format),
            Self::Completions { .. } => None,
        }
    }
}
