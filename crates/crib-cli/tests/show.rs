#![allow(clippy::unwrap_used)]

mod common;

use common::{GIT, crib_in, json_stdout, library};
use predicates::prelude::*;

#[test]
fn show_highlights_query_preserving_case() {
    let dir = library(&[("git.md", "git clone\nGit CLONE --depth 1")]);

    crib_in(dir.path())
        .args(["show", "git", "--query", "clone", "-f", "text"])
        .assert()
        .success()
        .stdout("git **clone**\nGit **CLONE** --depth 1\n")
        .stderr(predicate::str::contains(
            "Viewing: git | Search: 'clone' highlighted",
        ));
}

#[test]
fn show_without_query_prints_plain_text() {
    let dir = library(&[("git.md", GIT)]);

    crib_in(dir.path())
        .args(["show", "1", "-f", "text"])
        .assert()
        .success()
        .stdout(format!("{GIT}\n"))
        .stderr(predicate::str::contains(
            "Viewing: git | Press 'r' to refresh, 'q' to quit",
        ));
}

#[test]
fn show_with_line_numbers() {
    let dir = library(&[("git.md", GIT)]);

    crib_in(dir.path())
        .args(["show", "Git", "-n", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("   1: # Top  \n   2: clone repo  \n"));
}

#[test]
fn show_rank_refers_to_filtered_listing() {
    // Given: "vim" ranks second unfiltered but is the only match for ":wq"
    let dir = library(&[("git.md", GIT), ("vim.md", "# Quit\n:wq")]);

    let value = json_stdout(crib_in(dir.path()).args(["show", "1", "--query", ":wq", "-f", "json"]));

    assert_eq!(value["name"], "Vim");
    assert_eq!(value["query"], ":wq");
    assert_eq!(value["body"], "# Quit\n**:wq**");
    assert_eq!(value["status"]["kind"], "viewing");
}

#[test]
fn show_unknown_key_exits_not_found() {
    let dir = library(&[("git.md", GIT)]);

    crib_in(dir.path())
        .args(["show", "kubectl", "-f", "text"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "No cheatsheet matches selection 'kubectl'",
        ));
}

#[test]
fn show_filtered_out_document_is_not_selectable() {
    let dir = library(&[("git.md", GIT), ("vim.md", "# Quit\n:wq")]);

    crib_in(dir.path())
        .args(["show", "vim", "--query", "branch", "-f", "text"])
        .assert()
        .code(3);
}

#[test]
fn show_in_missing_directory_explains_why() {
    let parent = library(&[]);

    crib_in(&parent.path().join("gone"))
        .args(["show", "git", "-f", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: Directory"));
}

#[test]
fn show_colors_only_the_query_when_text_has_bold_markers() {
    let dir = library(&[("py.md", "def f(**kwargs): branch")]);

    crib_in(dir.path())
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["show", "py", "--query", "branch", "-f", "text"])
        .assert()
        .success()
        .stdout("def f(**kwargs): \u{1b}[1;33mbranch\u{1b}[0m\n");
}

#[test]
fn show_json_keeps_markers_for_text_with_bold() {
    let dir = library(&[("py.md", "**Note**: pass **kwargs to branch()")]);

    let value = json_stdout(crib_in(dir.path()).args(["show", "py", "--query", "branch", "-f", "json"]));

    assert_eq!(value["body"], "**Note**: pass **kwargs to **branch**()");
    assert!(value.get("text").is_none());
}
