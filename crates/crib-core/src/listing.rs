//! The visible result list and its two states.
//!
//! ```text
//! Idle(full set) --query typed--> Filtered(result set)
//!        ^                              |
//!        +--------query cleared---------+
//! ```
//!
//! A [`Listing`] is rebuilt from scratch for every query; it never remembers
//! the previous one.

use crate::present::{display_lines, render_outcome};
use crate::search::{SearchOutcome, search};
use crate::status::Status;
use crate::types::{DocumentSet, ListEntry};
use crate::{Error, Result};

/// Which state the list is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    /// No query: every document, no section summaries.
    Idle,
    /// A non-empty query narrowed the list.
    Filtered { query: String },
}

/// Rows and status for one query against one document set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    state: ListingState,
    outcome: SearchOutcome,
    entries: Vec<ListEntry>,
}

impl Listing {
    /// Build the list for `query`. An empty query yields [`ListingState::Idle`].
    pub fn for_query(documents: &DocumentSet, query: &str) -> Self {
        let outcome = search(documents, query);
        let state = if query.is_empty() {
            ListingState::Idle
        } else {
            ListingState::Filtered {
                query: query.to_string(),
            }
        };
        let entries = render_outcome(&outcome);
        Self {
            state,
            outcome,
            entries,
        }
    }

    /// The unfiltered list.
    pub fn idle(documents: &DocumentSet) -> Self {
        Self::for_query(documents, "")
    }

    pub const fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn query(&self) -> Option<&str> {
        match &self.state {
            ListingState::Idle => None,
            ListingState::Filtered { query } => Some(query),
        }
    }

    pub const fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Label lines, with the placeholder row when the list is empty.
    pub fn lines(&self) -> Vec<String> {
        display_lines(&self.entries)
    }

    pub const fn status(&self) -> &Status {
        &self.outcome.status
    }

    /// Resolve a row by 1-based rank or by display name (case-insensitive).
    pub fn select(&self, key: &str) -> Result<&ListEntry> {
        let key = key.trim();
        let found = match key.parse::<usize>() {
            Ok(rank) => self.entries.iter().find(|entry| entry.rank == rank),
            Err(_) => {
                let wanted = key.to_lowercase();
                self.entries
                    .iter()
                    .find(|entry| entry.name.to_lowercase() == wanted)
            },
        };
        found.ok_or_else(|| Error::MissingSelection(key.to_string()))
    }

    /// Status line for moving the cursor onto `key`.
    pub fn highlight_status(&self, key: &str) -> Status {
        match self.select(key) {
            Ok(entry) => Status::Highlighted {
                name: entry.name.clone(),
            },
            Err(_) => Status::MissingSelection {
                key: key.trim().to_string(),
            },
        }
    }
}
