//! Unified output rendering for CLI shapes.
//!
//! Commands produce an [`OutputShape`]; this module writes it to stdout in the
//! requested format. Status lines go to stderr through [`print_status`] so
//! that piped stdout only ever carries results.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use crib_core::Status;
use crib_core::present::NO_RESULTS_LABEL;
use serde::Serialize;

use super::OutputFormat;
use super::shapes::{DocumentOutput, ListingOutput, OutlineOutput, OutputShape};
use crate::utils::formatting::colored_label;

/// Render an [`OutputShape`] to the given writer in the specified format.
///
/// # Errors
///
/// Returns an error if writing to the output fails or if serialization fails.
pub fn render(shape: &OutputShape, format: OutputFormat, writer: &mut impl Write) -> Result<()> {
    match (shape, format) {
        (OutputShape::Listing(data), OutputFormat::Text) => render_listing_text(data, writer),
        (OutputShape::Listing(data), OutputFormat::Json) => write_json(data, writer),
        (OutputShape::Listing(data), OutputFormat::Jsonl) => write_jsonl(&data.entries, writer),

        (OutputShape::Document(data), OutputFormat::Text) => render_document_text(data, writer),
        (OutputShape::Document(data), OutputFormat::Json) => write_json(data, writer),
        (OutputShape::Document(data), OutputFormat::Jsonl) => {
            write_jsonl(std::slice::from_ref(data), writer)
        },

        (OutputShape::Outline(data), OutputFormat::Text) => render_outline_text(data, writer),
        (OutputShape::Outline(data), OutputFormat::Json) => write_json(data, writer),
        (OutputShape::Outline(data), OutputFormat::Jsonl) => write_jsonl(&data.entries, writer),
    }
}

/// Print a status line to stderr.
///
/// Problems (missing directory, missing selection, empty library) are shown
/// even with `--quiet`.
pub fn print_status(status: &Status, quiet: bool) {
    if status.is_problem() {
        eprintln!("{}", status.to_string().yellow());
    } else if !quiet {
        eprintln!("{}", status.to_string().bright_black());
    }
}

// -----------------------------------------------------------------------------
// Text Renderers
// -----------------------------------------------------------------------------

fn render_listing_text(data: &ListingOutput, writer: &mut impl Write) -> Result<()> {
    if data.entries.is_empty() {
        writeln!(writer, "{NO_RESULTS_LABEL}")?;
        return Ok(());
    }

    for (idx, row) in data.entries.iter().enumerate() {
        writeln!(writer, "{}", colored_label(&row.entry, idx))?;
        for found in &row.matches {
            writeln!(
                writer,
                "     {} {}",
                format!("{:>4}:", found.line).bright_black(),
                found.heading
            )?;
        }
    }
    Ok(())
}

fn render_document_text(data: &DocumentOutput, writer: &mut impl Write) -> Result<()> {
    writeln!(writer, "{}", data.text)?;
    Ok(())
}

fn render_outline_text(data: &OutlineOutput, writer: &mut impl Write) -> Result<()> {
    writeln!(writer, "{}", data.name.bold())?;
    if data.entries.is_empty() {
        writeln!(writer, "  {}", "(no headings)".bright_black())?;
        return Ok(());
    }
    for entry in &data.entries {
        writeln!(
            writer,
            "{} {}",
            format!("{:>4}:", entry.line).bright_black(),
            entry.heading
        )?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// JSON Renderers
// -----------------------------------------------------------------------------

fn write_json<T: Serialize>(data: &T, writer: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_jsonl<T: Serialize>(items: &[T], writer: &mut impl Write) -> Result<()> {
    for item in items {
        writeln!(writer, "{}", serde_json::to_string(item)?)?;
    }
    Ok(())
}
