//! Status line messages reported alongside every core operation.
//!
//! The display layer shows these verbatim; nothing in the core prints them.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// User-visible outcome of the last operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// Discovery found `count` cheatsheets.
    Found { count: usize },
    /// Discovery succeeded but the directory holds no cheatsheets.
    NoDocuments,
    /// The cheatsheet directory does not exist.
    MissingDirectory { dir: PathBuf },
    /// A non-empty query was applied.
    ContentSearch { query: String, count: usize },
    /// The query was cleared and the full set is visible again.
    Unfiltered { count: usize },
    /// A document is being displayed.
    Viewing { stem: String, query: Option<String> },
    /// A list row is highlighted but not yet opened.
    Highlighted { name: String },
    /// A selection had no backing document.
    MissingSelection { key: String },
}

impl Status {
    /// Whether the status describes a degraded condition.
    pub const fn is_problem(&self) -> bool {
        matches!(
            self,
            Self::MissingDirectory { .. } | Self::MissingSelection { .. } | Self::NoDocuments
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { count } => {
                write!(f, "Found {count} cheatsheets | Use Ctrl+F to search")
            },
            Self::NoDocuments => write!(f, "No markdown files found in directory"),
            Self::MissingDirectory { dir } => {
                write!(f, "Error: Directory {} not found", dir.display())
            },
            Self::ContentSearch { query, count } => {
                write!(
                    f,
                    "Content search: '{query}' - {count} files contain this text"
                )
            },
            Self::Unfiltered { count } => {
                write!(f, "Found {count} cheatsheets | Use Ctrl+F to search content")
            },
            Self::Viewing {
                stem,
                query: Some(query),
            } => write!(f, "Viewing: {stem} | Search: '{query}' highlighted"),
            Self::Viewing { stem, query: None } => {
                write!(f, "Viewing: {stem} | Press 'r' to refresh, 'q' to quit")
            },
            Self::Highlighted { name } => write!(f, "Highlighted: {name} | Press Enter to view"),
            Self::MissingSelection { key } => {
                write!(f, "No cheatsheet matches selection '{key}'")
            },
        }
    }
}
