//! Opening the cheatsheet library for a command.
//!
//! Loads the configuration, resolves the directory and runs one discovery
//! pass. Every command invocation builds its own [`Library`].

use anyhow::{Context, Result};
use crib_core::{Config, Discovery, DocumentSet, DocumentStore, Listing, Status};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::error::CliError;

/// Configuration plus the documents discovered under it.
#[derive(Debug, Clone)]
pub struct Library {
    pub config: Config,
    pub dir: PathBuf,
    pub discovery: Discovery,
}

impl Library {
    /// Load configuration and discover cheatsheets for `cli`.
    ///
    /// A missing directory is not an error; it shows up in [`Library::status`].
    pub fn open(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Ok(Self::with_config(config, cli.dir.as_deref(), &cwd))
    }

    /// Discover with an already-loaded configuration.
    pub fn with_config(config: Config, dir_override: Option<&Path>, cwd: &Path) -> Self {
        let dir = config.resolve_dir(dir_override, cwd);
        debug!("using cheatsheet directory {}", dir.display());

        let discovery = DocumentStore::new(config.discovery.clone()).discover(&dir);
        Self {
            config,
            dir,
            discovery,
        }
    }

    pub const fn documents(&self) -> &DocumentSet {
        &self.discovery.documents
    }

    /// Status of the discovery pass.
    pub const fn status(&self) -> &Status {
        &self.discovery.status
    }

    /// The listing for `query` (`""` for the unfiltered list).
    pub fn listing(&self, query: &str) -> Listing {
        Listing::for_query(self.documents(), query)
    }

    /// Emphasis marker used when highlighting.
    pub fn emphasis(&self) -> &str {
        &self.config.display.emphasis
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                warn!("config file {} not found; using defaults", path.display());
            }
            Config::load_from(path)
        },
        None => Config::load(),
    };

    loaded
        .map_err(CliError::from)
        .context("Failed to load configuration")
}
