use clap::Args;

use crate::output::OutputFormat;

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (`text`, `json`, `jsonl`)
    #[arg(short = 'f', long = "format", value_enum, env = "CRIB_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl FormatArg {
    /// Returns the effective output format. If output is piped and no format
    /// is specified, defaults to JSON for better machine readability.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        self.format.unwrap_or_else(OutputFormat::detect)
    }
}
