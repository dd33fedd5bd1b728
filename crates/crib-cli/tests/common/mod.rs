#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Empty config file shared by every test so the developer's own settings
/// never leak in.
fn empty_config() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            fs::write(dir.path().join("config.toml"), "").expect("failed to write empty config");
            dir
        })
        .path()
}

/// Create a configured `crib` command suitable for integration tests.
#[allow(dead_code)]
pub fn crib_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crib"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("CRIB_DIR");
    cmd.env_remove("CRIB_OUTPUT_FORMAT");
    cmd.env("CRIB_CONFIG", empty_config().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `crib --dir <dir>`
#[allow(dead_code)]
pub fn crib_in(dir: &Path) -> Command {
    let mut cmd = crib_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}

/// A temporary cheatsheet directory holding `files`.
#[allow(dead_code)]
pub fn library(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create cheatsheet dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("failed to write cheatsheet");
    }
    dir
}

#[allow(dead_code)]
pub const GIT: &str = "# Top\nclone repo\n## Branching\ncheckout branch";

/// Parse stdout of a successful command as JSON.
#[allow(dead_code)]
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is not valid JSON")
}
