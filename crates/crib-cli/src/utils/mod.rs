//! # Utility Functions and Helpers
//!
//! - [`cli_args`]: the shared `--format` flag
//! - [`formatting`]: color schemes for list rows and highlights
//! - [`library`]: configuration loading and discovery for a command
//! - [`logging`]: tracing subscriber and color control

pub mod cli_args;
pub mod formatting;
pub mod library;
pub mod logging;

pub use library::Library;
pub use logging::initialize_logging;
