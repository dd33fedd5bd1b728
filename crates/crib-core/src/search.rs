//! Content search with section attribution.
//!
//! Every call is a pure function of the document set and the query: files are
//! read fresh, nothing is cached between keystrokes.

use crate::outline::{Outline, text_lines};
use crate::status::Status;
use crate::types::{DocumentSet, Match, SearchResultSet};
use crate::{Error, Result};
use memchr::memmem::Finder;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Result of applying a query to a document set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Documents still visible: the full set for an empty query, otherwise
    /// only documents with at least one matching line.
    pub documents: DocumentSet,
    /// Matched headings per visible document. Empty for an empty query.
    pub sections: SearchResultSet,
    pub status: Status,
}

impl SearchOutcome {
    /// Whether a filter is active (the query was non-empty).
    pub fn is_filtered(&self) -> bool {
        matches!(self.status, Status::ContentSearch { .. })
    }
}

/// Filter `documents` to those containing `query` (case-insensitive) on some
/// line, attributing each match to its section heading.
///
/// An empty query clears the filter: the full set comes back unchanged with
/// no attribution. Files that cannot be read are treated as non-matching.
pub fn search(documents: &DocumentSet, query: &str) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome {
            documents: documents.clone(),
            sections: SearchResultSet::new(),
            status: Status::Unfiltered {
                count: documents.len(),
            },
        };
    }

    let needle = query.to_lowercase();
    let finder = Finder::new(needle.as_bytes());

    let mut visible = DocumentSet::new();
    let mut sections = SearchResultSet::new();

    for (name, path) in documents.iter() {
        let text = match read_document(path) {
            Ok(text) => text,
            Err(err) => {
                debug!("skipping {name}: {err}");
                continue;
            },
        };

        let headings = matched_sections(&text, &finder);
        if headings.is_empty() {
            continue;
        }

        debug!("{name}: {} matching sections", headings.len());
        visible.insert(name, path);
        sections.insert(name, headings);
    }

    let status = Status::ContentSearch {
        query: query.to_string(),
        count: visible.len(),
    };

    SearchOutcome {
        documents: visible,
        sections,
        status,
    }
}

/// Every line of one document that contains `query`, with its heading.
///
/// Unlike [`search`], a read failure is returned to the caller.
pub fn matches(name: &str, path: &Path, query: &str) -> Result<Vec<Match>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let text = read_document(path)?;
    let needle = query.to_lowercase();
    let finder = Finder::new(needle.as_bytes());
    let outline = Outline::parse(&text);

    Ok(matching_lines(&text, &finder)
        .map(|line| Match {
            document: name.to_string(),
            line,
            heading: outline.heading_for_line(line).to_string(),
        })
        .collect())
}

/// Distinct headings with at least one matching line, in first-seen order.
fn matched_sections(text: &str, finder: &Finder<'_>) -> Vec<String> {
    let mut lines = matching_lines(text, finder).peekable();
    if lines.peek().is_none() {
        return Vec::new();
    }

    let outline = Outline::parse(text);
    let mut headings: Vec<String> = Vec::new();
    for line in lines {
        let heading = outline.heading_for_line(line);
        if !headings.iter().any(|seen| seen == heading) {
            headings.push(heading.to_string());
        }
    }
    headings
}

/// 1-based numbers of lines containing the needle.
fn matching_lines<'a>(text: &'a str, finder: &'a Finder<'a>) -> impl Iterator<Item = usize> + 'a {
    text_lines(text).enumerate().filter_map(move |(idx, line)| {
        let folded = line.to_lowercase();
        finder.find(folded.as_bytes()).map(|_| idx + 1)
    })
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}
