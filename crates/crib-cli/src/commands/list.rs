//! List command implementation

use anyhow::Result;

use crate::output::{ListingOutput, OutputFormat, print_status, render};
use crate::utils::Library;

/// Execute the list command: every cheatsheet, ranked by name.
pub fn execute(library: &Library, format: OutputFormat, quiet: bool) -> Result<()> {
    let listing = library.listing("");

    // An unfiltered list reports what discovery found.
    let status = library.status().clone();

    let output = ListingOutput::new(library.dir.clone(), &listing, status.clone());
    render(&output.into(), format, &mut std::io::stdout().lock())?;

    print_status(&status, quiet || format.is_machine_readable());
    Ok(())
}
