//! Error types and handling for crib-core operations.
//!
//! Most failures in crib are absorbed rather than propagated: a missing
//! cheatsheet directory becomes an empty listing with a status line, and an
//! unreadable file is dropped from search results. The variants for those
//! conditions still exist so that log lines, status messages and tests can name
//! them precisely.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: File system operations outside the absorbed cases
//! - **Missing directory**: The cheatsheet directory does not exist
//! - **Unreadable file**: A document could not be opened or decoded
//! - **Missing selection**: A display-layer selection has no backing document
//! - **Configuration Errors**: Invalid settings or config files
//! - **Serialization Errors**: TOML/JSON encoding failures
//!
//! ## Recovery Hints
//!
//! ```rust
//! use crib_core::Error;
//! use std::path::PathBuf;
//!
//! let err = Error::MissingDirectory(PathBuf::from("/nope"));
//! assert!(err.is_recoverable());
//! assert_eq!(err.category(), "missing_directory");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for crib-core operations.
///
/// All fallible public functions in crib-core return `Result<T, Error>`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// The underlying `std::io::Error` is preserved to maintain detailed error
    /// information.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cheatsheet directory does not exist.
    ///
    /// Discovery reports this as a status and returns an empty document set.
    #[error("Directory {} not found", .0.display())]
    MissingDirectory(PathBuf),

    /// A document could not be opened or decoded as UTF-8.
    #[error("Cannot read {}: {source}", path.display())]
    UnreadableFile {
        /// The document that failed to load
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A selection made in the display layer has no backing document.
    #[error("No cheatsheet matches selection '{0}'")]
    MissingSelection(String),

    /// Configuration is invalid or cannot be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for cases not covered by specific variants.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check whether the condition degrades gracefully instead of aborting.
    ///
    /// Missing directories, unreadable files and dangling selections all
    /// degrade to "no results" with a status message. Temporary I/O failures
    /// (timeouts, interruptions) are recoverable by retrying.
    ///
    /// ```rust
    /// use crib_core::Error;
    ///
    /// assert!(Error::MissingSelection("7".into()).is_recoverable());
    /// assert!(!Error::Config("bad".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingDirectory(_) | Self::UnreadableFile { .. } | Self::MissingSelection(_) => {
                true
            },
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            Self::Config(_) | Self::Serialization(_) | Self::Other(_) => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful for structured log fields.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::MissingDirectory(_) => "missing_directory",
            Self::UnreadableFile { .. } => "unreadable_file",
            Self::MissingSelection(_) => "missing_selection",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
