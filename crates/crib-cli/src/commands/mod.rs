//! Command implementations for the crib CLI
//!
//! Each command discovers the library once, does its work through
//! `crib_core`, and hands an output shape to the renderer.

mod completions;
mod list;
mod outline;
mod search;
mod show;

pub use completions::generate;
pub use list::execute as list_cheatsheets;
pub use outline::execute as show_outline;
pub use search::execute as search_content;
pub use show::{ShowOptions, execute as show_cheatsheet};

use crib_core::{ListEntry, Listing, Status};

use crate::error::CliError;
use crate::output::print_status;
use crate::utils::Library;

/// Status to report for a listing: discovery problems take precedence over
/// the listing's own message.
fn listing_status(library: &Library, listing: &Listing) -> Status {
    if library.status().is_problem() {
        library.status().clone()
    } else {
        listing.status().clone()
    }
}

/// Resolve `key` in `listing`, explaining an empty or missing library first.
fn select_entry(
    library: &Library,
    listing: &Listing,
    key: &str,
    quiet: bool,
) -> Result<ListEntry, CliError> {
    match listing.select(key) {
        Ok(entry) => {
            tracing::debug!("{}", listing.highlight_status(key));
            Ok(entry.clone())
        },
        Err(err) => {
            if library.status().is_problem() {
                print_status(library.status(), quiet);
            }
            Err(err.into())
        },
    }
}
