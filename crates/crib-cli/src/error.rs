//! CLI error handling with semantic exit codes.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed, including an empty or missing library |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | A selection matched no cheatsheet |
//!
//! A missing cheatsheet directory is deliberately *not* an error: commands
//! report it in the status line and exit 0.
//!
//! # Usage
//!
//! ```bash
//! crib show kubectl
//! case $? in
//!     0) echo "shown" ;;
//!     3) echo "no such cheatsheet" ;;
//!     *) echo "other error" ;;
//! esac
//! ```

use std::fmt;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Use for a malformed config file or an unusable `--config` path.
    Usage = 2,

    /// Requested cheatsheet not found (exit code 3).
    NotFound = 3,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that were propagated without an explicit category.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no cheatsheet matches")
            || msg_lower.contains("not found")
            || msg_lower.contains("no such")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("configuration error")
            || msg_lower.contains("invalid argument")
            || msg_lower.contains("invalid value")
        {
            return Self::Usage;
        }

        Self::Internal
    }

    /// Category for a core library error.
    #[must_use]
    pub const fn from_core(err: &crib_core::Error) -> Self {
        match err {
            crib_core::Error::MissingSelection(_) => Self::NotFound,
            crib_core::Error::Config(_) => Self::Usage,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` so context chains survive.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl From<crib_core::Error> for CliError {
    fn from(err: crib_core::Error) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

// Display already shows the wrapped error, so the chain continues with its cause.
impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// A [`CliError`] or core error decides the category; otherwise it is
/// inferred from the message.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }

    if let Some(core_err) = err.chain().find_map(|e| e.downcast_ref::<crib_core::Error>()) {
        return ErrorCategory::from_core(core_err).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCategory::Internal.exit_code(), 1);
        assert_eq!(ErrorCategory::Usage.exit_code(), 2);
        assert_eq!(ErrorCategory::NotFound.exit_code(), 3);
    }

    #[test]
    fn test_infer_not_found() {
        assert_eq!(
            ErrorCategory::infer_from_message("No cheatsheet matches selection 'kubectl'"),
            ErrorCategory::NotFound
        );
        assert_eq!(
            ErrorCategory::infer_from_message("No such file or directory"),
            ErrorCategory::NotFound
        );
    }

    #[test]
    fn test_infer_usage_and_default() {
        assert_eq!(
            ErrorCategory::infer_from_message("Configuration error: Failed to parse config"),
            ErrorCategory::Usage
        );
        assert_eq!(
            ErrorCategory::infer_from_message("Something went wrong"),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_core_errors_map_to_categories() {
        let selection = crib_core::Error::MissingSelection("9".into());
        assert_eq!(CliError::from(selection).exit_code(), 3);

        let config = crib_core::Error::Config("bad".into());
        assert_eq!(CliError::from(config).exit_code(), 2);

        let other = crib_core::Error::Other("boom".into());
        assert_eq!(CliError::from(other).exit_code(), 1);
    }

    #[test]
    fn test_exit_code_from_wrapped_errors() {
        let err: anyhow::Error = CliError::new(ErrorCategory::NotFound, anyhow!("gone")).into();
        assert_eq!(exit_code_from_error(&err), 3);

        let err = anyhow::Error::new(crib_core::Error::Config("bad".into()))
            .context("Failed to load configuration");
        assert_eq!(exit_code_from_error(&err), 2);

        let err = anyhow!("Something went wrong");
        assert_eq!(exit_code_from_error(&err), 1);
    }

    #[test]
    fn test_display_is_source_message() {
        let err = CliError::new(ErrorCategory::Usage, anyhow!("Configuration error: bad"));
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
