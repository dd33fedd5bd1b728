//! Outline command implementation

use anyhow::Result;
use crib_core::Outline;

use super::select_entry;
use crate::error::CliError;
use crate::output::{OutlineOutput, OutputFormat, render};
use crate::utils::Library;

/// Execute the outline command: the headings of one cheatsheet with their
/// line numbers.
pub fn execute(library: &Library, key: &str, format: OutputFormat, quiet: bool) -> Result<()> {
    let listing = library.listing("");
    let entry = select_entry(library, &listing, key, quiet)?;

    let outline = Outline::load(&entry.path).map_err(CliError::from)?;

    let output = OutlineOutput {
        name: entry.name,
        path: entry.path,
        entries: outline.entries().to_vec(),
    };
    render(&output.into(), format, &mut std::io::stdout().lock())?;
    Ok(())
}
