//! crib CLI - content search across a directory of markdown cheatsheets
//!
//! All command implementations live in the library crate; this binary only
//! maps failures to exit codes.

use std::process::ExitCode;

fn main() -> ExitCode {
    match crib_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(crib_cli::error::exit_code_from_error(&err))
        },
    }
}
