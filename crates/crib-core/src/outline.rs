//! Section outlines: which heading governs a given line.
//!
//! A heading is any line whose trimmed form starts with `#`. The marker count
//! is not recorded; cheatsheets are flat enough that the nearest heading is
//! the useful label.
//!
//! Build an [`Outline`] once per file and query it per matched line. The
//! path-based [`heading_for_line`] re-reads the file on every call and is
//! meant for one-off lookups.

use crate::types::{OutlineEntry, TOP_HEADING, UNKNOWN_HEADING};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Trailing suffix removed from heading text (headings generated from file
/// names often carry it).
const HEADING_SUFFIX: &str = ".md";

/// Ordered headings of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Collect every heading in `text`, in line order.
    pub fn parse(text: &str) -> Self {
        let entries = text_lines(text)
            .enumerate()
            .filter_map(|(idx, line)| {
                heading_text(line).map(|heading| OutlineEntry {
                    line: idx + 1,
                    heading,
                })
            })
            .collect();
        Self { entries }
    }

    /// Read and parse a document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Heading governing 1-based `line`: the last heading at or above it, or
    /// [`TOP_HEADING`] when none precedes it.
    pub fn heading_for_line(&self, line: usize) -> &str {
        let idx = self.entries.partition_point(|entry| entry.line <= line);
        if idx == 0 {
            TOP_HEADING
        } else {
            &self.entries[idx - 1].heading
        }
    }
}

/// Resolve the heading for `line` in the file at `path`.
///
/// Unreadable files yield [`UNKNOWN_HEADING`] instead of an error.
pub fn heading_for_line(path: &Path, line: usize) -> String {
    match Outline::load(path) {
        Ok(outline) => outline.heading_for_line(line).to_string(),
        Err(err) => {
            tracing::debug!("heading lookup failed: {err}");
            UNKNOWN_HEADING.to_string()
        },
    }
}

/// Split `text` at `\r\n`, `\n` or a lone `\r`, keeping the empty segment
/// after a trailing break.
///
/// ```rust
/// use crib_core::outline::line_segments;
///
/// let parts: Vec<&str> = line_segments("a\rb\r\nc\n").collect();
/// assert_eq!(parts, vec!["a", "b", "c", ""]);
/// ```
pub fn line_segments(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        let bytes = current.as_bytes();
        match memchr::memchr2(b'\n', b'\r', bytes) {
            Some(idx) => {
                let width = if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                rest = Some(&current[idx + width..]);
                Some(&current[..idx])
            },
            None => {
                rest = None;
                Some(current)
            },
        }
    })
}

/// The lines of a document, like [`str::lines`] but also breaking on a lone
/// `\r`. A final line break does not start another line.
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let body = body.strip_suffix('\r').unwrap_or(body);
    let empty = text.is_empty();
    line_segments(body).filter(move |_| !empty)
}

/// Extract heading text from a line, or `None` if it is not a heading.
///
/// ```rust
/// use crib_core::outline::heading_text;
///
/// assert_eq!(heading_text("  ## Branching  "), Some("Branching".to_string()));
/// assert_eq!(heading_text("# git.md"), Some("git".to_string()));
/// assert_eq!(heading_text("git clone"), None);
/// ```
pub fn heading_text(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if !trimmed.starts_with('#') {
        return None;
    }

    let text = trimmed.trim_start_matches('#').trim();
    let text = text.strip_suffix(HEADING_SUFFIX).unwrap_or(text);
    Some(text.to_string())
}
