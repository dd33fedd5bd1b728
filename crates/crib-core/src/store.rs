//! Document discovery: turns a directory into a [`DocumentSet`].
//!
//! Only the top level of the directory is scanned. Every pass builds a fresh
//! set; nothing is carried over from earlier scans.

use crate::config::DiscoveryConfig;
use crate::status::Status;
use crate::types::{Document, DocumentSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of a discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub documents: DocumentSet,
    pub status: Status,
}

/// Scans a directory for cheatsheets according to [`DiscoveryConfig`].
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    rules: DiscoveryConfig,
}

impl DocumentStore {
    pub const fn new(rules: DiscoveryConfig) -> Self {
        Self { rules }
    }

    /// Enumerate eligible files in `dir`.
    ///
    /// A missing directory is not an error: the result is an empty set with a
    /// [`Status::MissingDirectory`] status. A path that exists but cannot be
    /// listed (a regular file, say) yields [`Status::NoDocuments`].
    pub fn discover(&self, dir: &Path) -> Discovery {
        if !dir.exists() {
            warn!("cheatsheet directory {} not found", dir.display());
            return Discovery {
                documents: DocumentSet::new(),
                status: Status::MissingDirectory {
                    dir: dir.to_path_buf(),
                },
            };
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot list {}: {err}", dir.display());
                return Discovery {
                    documents: DocumentSet::new(),
                    status: Status::NoDocuments,
                };
            },
        };

        let mut documents = DocumentSet::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(err) => {
                    warn!("skipping unreadable entry in {}: {err}", dir.display());
                    continue;
                },
            };

            let Some(document) = self.eligible(path) else {
                continue;
            };

            let Document { name, path } = document;
            if let Some(previous) = documents.insert(name.clone(), path.clone()) {
                debug!(
                    "display name '{name}' from {} replaces {}",
                    path.display(),
                    previous.display()
                );
            }
        }

        debug!("discovered {} cheatsheets in {}", documents.len(), dir.display());

        let status = if documents.is_empty() {
            Status::NoDocuments
        } else {
            Status::Found {
                count: documents.len(),
            }
        };

        Discovery { documents, status }
    }

    fn eligible(&self, path: PathBuf) -> Option<Document> {
        if path.extension() != Some(OsStr::new(&self.rules.extension)) {
            return None;
        }

        let file_name = path.file_name()?.to_str()?;
        if self.rules.excluded.iter().any(|excluded| excluded == file_name) {
            return None;
        }

        if !path.is_file() {
            return None;
        }

        let name = display_name(&path.file_stem()?.to_string_lossy());
        Some(Document { name, path })
    }
}

/// Discover cheatsheets with the default rules (`*.md`, excluding `README.md`).
pub fn discover(dir: impl AsRef<Path>) -> Discovery {
    DocumentStore::default().discover(dir.as_ref())
}

/// Derive a display name from a file stem.
///
/// `-` and `_` become spaces, then each run of letters is title-cased: its
/// first letter uppercased and the rest lowercased.
///
/// ```rust
/// use crib_core::display_name;
///
/// assert_eq!(display_name("git-basics"), "Git Basics");
/// assert_eq!(display_name("DOCKER_compose"), "Docker Compose");
/// ```
pub fn display_name(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut in_word = false;

    for ch in stem.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                name.extend(ch.to_lowercase());
            } else {
                name.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            name.push(ch);
            in_word = false;
        }
    }

    name
}
