//! # Output Formatting
//!
//! ## Supported Formats
//!
//! - **Text**: Human-readable output with colors (default on a terminal)
//! - **JSON**: Single pretty-printed JSON object (default when piped)
//! - **JSONL**: One JSON object per line: list rows, outline entries, or the
//!   single rendered document
//!
//! ```bash
//! crib search docker -f json | jq '.entries[].name'
//! crib outline git -f jsonl | jq .heading
//! ```

use clap::ValueEnum;
use is_terminal::IsTerminal;

pub mod render;
pub mod shapes;

pub use render::{print_status, render};
pub use shapes::{DocumentOutput, ListingOutput, OutlineOutput};

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted text (default for terminals).
    #[default]
    Text,
    /// JSON format for machine consumption (default for pipes).
    Json,
    /// JSON Lines format (one JSON object per line).
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }

    /// Detect the best format based on terminal status.
    ///
    /// Returns `Text` for interactive terminals, `Json` for pipes/redirects.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}
