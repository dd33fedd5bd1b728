//! Search command implementation

use anyhow::Result;
use crib_core::matches;
use tracing::warn;

use super::listing_status;
use crate::output::{ListingOutput, OutputFormat, print_status, render};
use crate::utils::Library;

/// Execute the search command: cheatsheets whose text contains `query`.
///
/// With `with_matches`, every matching line is listed under its cheatsheet.
pub fn execute(
    library: &Library,
    query: &str,
    with_matches: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let listing = library.listing(query);
    let status = listing_status(library, &listing);
    let mut output = ListingOutput::new(library.dir.clone(), &listing, status.clone());

    if with_matches {
        for row in &mut output.entries {
            match matches(&row.entry.name, &row.entry.path, query) {
                Ok(found) => row.matches = found,
                Err(err) => warn!("{err}"),
            }
        }
    }

    render(&output.into(), format, &mut std::io::stdout().lock())?;

    print_status(&status, quiet || format.is_machine_readable());
    Ok(())
}
