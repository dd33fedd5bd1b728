use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

/// Sentinel heading for lines that precede every heading in a document.
pub const TOP_HEADING: &str = "Top";

/// Sentinel heading for documents that could not be read.
pub const UNKNOWN_HEADING: &str = "Unknown";

/// One indexed cheatsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display name derived from the file stem, e.g. `"Git Basics"`.
    pub name: String,
    pub path: PathBuf,
}

/// Mapping from display name to document location.
///
/// Keys are derived names, so iteration is by name regardless of the order the
/// filesystem reported entries in. Inserting an existing name replaces the
/// previous location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentSet {
    entries: BTreeMap<String, PathBuf>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, returning the location it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(name.into(), path.into())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, path)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, PathBuf)> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = (&'a String, &'a PathBuf);
    type IntoIter = btree_map::Iter<'a, String, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A heading in a document's outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// 1-based line number of the heading line.
    pub line: usize,
    pub heading: String,
}

/// A single line that contains the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub document: String,
    /// 1-based line number.
    pub line: usize,
    /// Heading governing the line, or [`TOP_HEADING`].
    pub heading: String,
}

/// Document name → distinct matched headings in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResultSet {
    sections: BTreeMap<String, Vec<String>>,
}

impl SearchResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the heading list for a document. Empty lists are ignored so a
    /// document only ever appears when it has at least one match.
    pub fn insert(&mut self, document: impl Into<String>, headings: Vec<String>) {
        if !headings.is_empty() {
            self.sections.insert(document.into(), headings);
        }
    }

    pub fn get(&self, document: &str) -> Option<&[String]> {
        self.sections.get(document).map(Vec::as_slice)
    }

    pub fn contains(&self, document: &str) -> bool {
        self.sections.contains_key(document)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(name, headings)| (name.as_str(), headings.as_slice()))
    }
}

/// One row of the visible result list.
///
/// Carries the document name and location alongside the rendered label so the
/// display layer never has to attach data to its widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// 1-based position in name order.
    pub rank: usize,
    pub name: String,
    pub path: PathBuf,
    /// Matched headings; empty when no query is active.
    pub sections: Vec<String>,
    pub label: String,
}
