//! Configuration management for crib.
//!
//! Settings live in a single TOML file. Every section is optional; anything
//! left out falls back to the defaults below.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Explicit file**: `--config <FILE>` / `CRIB_CONFIG`
//! 2. **Global config**: platform config directory (see [`Config::default_path`])
//! 3. **Built-in defaults**
//!
//! The cheatsheet directory itself is resolved separately by
//! [`Config::resolve_dir`], which lets a command-line override win over the
//! file and falls back to [`default_cheatsheets_dir`].
//!
//! ## Example Configuration File
//!
//! ```toml
//! [library]
//! dir = "/home/user/notes/cheatsheets"
//!
//! [discovery]
//! extension = "md"
//! excluded = ["README.md", "INDEX.md"]
//!
//! [display]
//! emphasis = "**"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the conventional cheatsheet directory.
pub const CHEATSHEETS_DIR_NAME: &str = "cheatsheets";

/// Files whose presence marks a project root during directory resolution.
const PROJECT_MARKERS: &[&str] = &["Cargo.toml", "pyproject.toml"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the cheatsheets live
    pub library: LibraryConfig,
    /// Which files count as cheatsheets
    pub discovery: DiscoveryConfig,
    /// Presentation settings shared by every display layer
    pub display: DisplayConfig,
}

/// Location of the cheatsheet directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Directory to index. `None` means "resolve from the working directory".
    pub dir: Option<PathBuf>,
}

/// Rules for which files discovery accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Accepted file extension, without the leading dot. Compared exactly.
    pub extension: String,

    /// File names that are never treated as cheatsheets. Compared exactly,
    /// including case.
    pub excluded: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            excluded: vec!["README.md".to_string()],
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Marker placed on both sides of every highlighted occurrence.
    pub emphasis: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            emphasis: "**".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory available; using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content).map_err(|e| Error::Config(format!("Failed to write config: {e}")))
    }

    /// Platform config file location:
    ///
    /// - Linux: `~/.config/crib/config.toml`
    /// - macOS: `~/Library/Application Support/dev.crib.crib/config.toml`
    /// - Windows: `%APPDATA%\crib\crib\config\config.toml`
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "crib", "crib")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Pick the cheatsheet directory.
    ///
    /// Precedence: `override_dir` (command line / environment), then
    /// `[library].dir`, then [`default_cheatsheets_dir`] relative to `cwd`.
    pub fn resolve_dir(&self, override_dir: Option<&Path>, cwd: &Path) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.library.dir.clone())
            .unwrap_or_else(|| default_cheatsheets_dir(cwd))
    }

    fn validate(&self) -> Result<()> {
        if self.discovery.extension.is_empty() {
            return Err(Error::Config("discovery.extension must not be empty".into()));
        }
        if self.discovery.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "discovery.extension must not start with a dot (got '{}')",
                self.discovery.extension
            )));
        }
        Ok(())
    }
}

/// Guess the cheatsheet directory from the working directory.
///
/// 1. `cwd/cheatsheets` when `cwd` is a project root with a `cheatsheets/` child
/// 2. `cwd/../cheatsheets` when the parent is such a project root
/// 3. `cwd` itself when it is named `cheatsheets`
/// 4. `cwd/cheatsheets` otherwise (which may not exist; discovery reports it)
pub fn default_cheatsheets_dir(cwd: &Path) -> PathBuf {
    let local = cwd.join(CHEATSHEETS_DIR_NAME);
    if is_project_root(cwd) && local.is_dir() {
        return local;
    }

    if let Some(parent) = cwd.parent() {
        let sibling = parent.join(CHEATSHEETS_DIR_NAME);
        if is_project_root(parent) && sibling.is_dir() {
            return sibling;
        }
    }

    if cwd.file_name().is_some_and(|name| name == CHEATSHEETS_DIR_NAME) {
        return cwd.to_path_buf();
    }

    local
}

fn is_project_root(dir: &Path) -> bool {
    PROJECT_MARKERS.iter().any(|marker| dir.join(marker).is_file())
}
