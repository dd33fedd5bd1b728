//! Show command implementation

use anyhow::Result;
use crib_core::{number_lines, render_document};

use super::select_entry;
use crate::output::{DocumentOutput, OutputFormat, print_status, render};
use crate::utils::Library;
use crate::utils::formatting::emphasize;

/// Options for the show command
#[derive(Debug, Clone, Copy)]
pub struct ShowOptions<'a> {
    pub query: Option<&'a str>,
    pub line_numbers: bool,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Execute the show command: print one cheatsheet, highlighting the query.
///
/// `key` is resolved against the listing for the same query, so ranks match
/// what `crib search <query>` printed.
pub fn execute(library: &Library, key: &str, options: ShowOptions<'_>) -> Result<()> {
    let query = options.query.unwrap_or_default();
    let listing = library.listing(query);
    let entry = select_entry(library, &listing, key, options.quiet)?;

    let rendered = render_document(&entry.path, query, library.emphasis());
    let text = emphasize(&rendered.source, &rendered.highlights, library.emphasis());
    let numbered = |body: String| {
        if options.line_numbers {
            number_lines(&body)
        } else {
            body
        }
    };

    let output = DocumentOutput {
        name: entry.name,
        path: entry.path,
        query: Some(query.trim().to_string()).filter(|q| !q.is_empty()),
        line_numbers: options.line_numbers,
        emphasis: library.emphasis().to_string(),
        body: numbered(rendered.body),
        message: rendered.status.to_string(),
        status: rendered.status.clone(),
        text: numbered(text),
    };
    render(&output.into(), options.format, &mut std::io::stdout().lock())?;

    print_status(
        &rendered.status,
        options.quiet || options.format.is_machine_readable(),
    );
    Ok(())
}
