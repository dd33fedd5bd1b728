//! # crib-core
//!
//! Core functionality for crib - content search across a local directory of
//! markdown cheatsheets.
//!
//! The crate turns a directory into a named document set, filters that set by
//! a case-insensitive substring query, and tells you which section heading
//! each match sits under. It also prepares everything a display layer needs:
//! ranked list labels, highlighted document text and a status line. It never
//! draws anything itself.
//!
//! ## Architecture
//!
//! - **Discovery** ([`store`]): top-level `*.md` files become display names
//! - **Outlines** ([`outline`]): heading lines, and which heading governs a line
//! - **Search** ([`search`]): the filter plus per-document section attribution
//! - **Presentation** ([`present`], [`listing`]): labels, highlighting, selection
//! - **Status** ([`status`]): the message reported after every operation
//! - **Configuration** ([`config`]): optional TOML settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crib_core::{Listing, discover};
//!
//! let discovery = discover("cheatsheets");
//! println!("{}", discovery.status);
//!
//! let listing = Listing::for_query(&discovery.documents, "branch");
//! for line in listing.lines() {
//!     println!("{line}");
//! }
//! println!("{}", listing.status());
//! ```
//!
//! ## Error Handling
//!
//! Most conditions are reported through [`Status`] rather than errors: a
//! missing directory yields an empty set and an unreadable file simply does
//! not match. Operations that do fail return [`Result<T, Error>`]:
//!
//! ```rust
//! use crib_core::{DocumentSet, Error, Listing};
//!
//! let listing = Listing::idle(&DocumentSet::new());
//! match listing.select("git") {
//!     Ok(entry) => println!("{}", entry.path.display()),
//!     Err(Error::MissingSelection(key)) => eprintln!("nothing named {key}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

/// Configuration file loading and directory resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// Result list state and selection
pub mod listing;
/// Heading outlines and line-to-section resolution
pub mod outline;
/// Labels, highlighting and document rendering
pub mod present;
/// Content search with section attribution
pub mod search;
/// Status line messages
pub mod status;
/// Cheatsheet discovery
pub mod store;
/// Core data types and structures
pub mod types;

// Re-export commonly used types
pub use config::{Config, DiscoveryConfig, DisplayConfig, LibraryConfig, default_cheatsheets_dir};
pub use error::{Error, Result};
pub use listing::{Listing, ListingState};
pub use outline::{Outline, heading_for_line};
pub use present::{
    RenderedDocument, display_lines, highlight, highlight_with, number_lines, render_document,
    render_list, render_outcome, wrap_spans,
};
pub use search::{SearchOutcome, matches, search};
pub use status::Status;
pub use store::{Discovery, DocumentStore, discover, display_name};
pub use types::*;
