//! Shape-based output types for CLI commands.
//!
//! Commands produce one of these shapes; [`super::render`] decides how it
//! looks in each [`super::OutputFormat`].
//!
//! - [`ListingOutput`] - ranked cheatsheet rows, filtered or not
//! - [`DocumentOutput`] - one cheatsheet's (highlighted) text
//! - [`OutlineOutput`] - one cheatsheet's headings

use std::path::PathBuf;

use crib_core::{ListEntry, Listing, Match, OutlineEntry, Status};
use serde::Serialize;

/// One listed cheatsheet plus, on request, every matching line.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRow {
    #[serde(flatten)]
    pub entry: ListEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<Match>,
}

/// Output of `list` and `search`.
///
/// # JSON Representation
///
/// ```json
/// {
///   "dir": "/home/me/cheatsheets",
///   "query": "branch",
///   "status": { "kind": "content_search", "query": "branch", "count": 1 },
///   "message": "Content search: 'branch' - 1 files contain this text",
///   "entries": [
///     { "rank": 1, "name": "Git", "path": ".../git.md",
///       "sections": ["Branching"], "label": " 1 - git (Branching)" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingOutput {
    pub dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub status: Status,
    /// Status as the one-line message shown to people
    pub message: String,
    pub entries: Vec<ListingRow>,
}

impl ListingOutput {
    /// Rows of `listing`, reporting `status`.
    ///
    /// `status` is passed separately because a failed discovery (missing
    /// directory) must win over the listing's own status.
    pub fn new(dir: PathBuf, listing: &Listing, status: Status) -> Self {
        Self {
            dir,
            query: listing.query().map(str::to_string),
            message: status.to_string(),
            status,
            entries: listing
                .entries()
                .iter()
                .map(|entry| ListingRow {
                    entry: entry.clone(),
                    matches: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Output of `show`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOutput {
    pub name: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub line_numbers: bool,
    /// Emphasis marker wrapped around highlighted text
    pub emphasis: String,
    pub body: String,
    pub status: Status,
    pub message: String,
    /// Terminal rendering of `body`
    #[serde(skip)]
    pub text: String,
}

/// Output of `outline`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineOutput {
    pub name: String,
    pub path: PathBuf,
    pub entries: Vec<OutlineEntry>,
}

/// Unified output shape enum for all command outputs.
#[derive(Clone, Debug)]
pub enum OutputShape {
    Listing(ListingOutput),
    Document(DocumentOutput),
    Outline(OutlineOutput),
}

impl From<ListingOutput> for OutputShape {
    fn from(v: ListingOutput) -> Self {
        Self::Listing(v)
    }
}

impl From<DocumentOutput> for OutputShape {
    fn from(v: DocumentOutput) -> Self {
        Self::Document(v)
    }
}

impl From<OutlineOutput> for OutputShape {
    fn from(v: OutlineOutput) -> Self {
        Self::Outline(v)
    }
}
