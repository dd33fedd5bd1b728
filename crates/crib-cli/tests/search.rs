#![allow(clippy::unwrap_used)]

mod common;

use common::{GIT, crib_in, json_stdout, library};
use predicates::prelude::*;

#[test]
fn search_attributes_match_to_section() {
    // Given: git.md with the match under "Branching" and vim.md without it
    let dir = library(&[("git.md", GIT), ("vim.md", "# Motions\nw b e")]);

    // When: searching for "branch"
    // Then: only git is listed, summarised by its matched section
    crib_in(dir.path())
        .args(["search", "branch", "-f", "text"])
        .assert()
        .success()
        .stdout(" 1 - git (Branching)\n")
        .stderr(predicate::str::contains(
            "Content search: 'branch' - 1 files contain this text",
        ));
}

#[test]
fn search_splits_carriage_return_line_endings() {
    let dir = library(&[("git.md", "# Top\rclone repo\r## Branching\rcheckout branch")]);

    crib_in(dir.path())
        .args(["search", "branch", "-f", "text"])
        .assert()
        .success()
        .stdout(" 1 - git (Branching)\n");
}

#[test]
fn search_without_headings_reports_top() {
    let dir = library(&[("a.md", "foo bar")]);

    let value = json_stdout(crib_in(dir.path()).args(["search", "foo", "-f", "json"]));

    assert_eq!(value["query"], "foo");
    assert_eq!(value["entries"][0]["name"], "A");
    assert_eq!(value["entries"][0]["sections"], serde_json::json!(["Top"]));
}

#[test]
fn search_is_case_insensitive() {
    let dir = library(&[("git.md", GIT)]);

    crib_in(dir.path())
        .args(["search", "CHECKOUT", "-f", "text"])
        .assert()
        .success()
        .stdout(" 1 - git (Branching)\n");
}

#[test]
fn search_summarises_many_sections() {
    let content = "# Setup\npush\n# Remotes\npush\n# Stash\npush\n# Tags\npush\n# Hooks\npush";
    let dir = library(&[("git-basics.md", content)]);

    crib_in(dir.path())
        .args(["search", "push", "-f", "text"])
        .assert()
        .success()
        .stdout(" 1 - git basics (Setup, Remotes, +3)\n");
}

#[test]
fn search_empty_query_lists_everything() {
    let dir = library(&[("git.md", GIT), ("vim.md", "# Motions")]);

    crib_in(dir.path())
        .args(["search", "", "-f", "text"])
        .assert()
        .success()
        .stdout(" 1 - git\n 2 - vim\n")
        .stderr(predicate::str::contains(
            "Found 2 cheatsheets | Use Ctrl+F to search content",
        ));
}

#[test]
fn search_without_matches_shows_placeholder() {
    let dir = library(&[("git.md", GIT)]);

    crib_in(dir.path())
        .args(["search", "kubectl", "-f", "text"])
        .assert()
        .success()
        .stdout("No cheatsheets found\n")
        .stderr(predicate::str::contains("- 0 files contain this text"));
}

#[test]
fn search_matches_lists_lines_as_jsonl() {
    let dir = library(&[("git.md", GIT), ("vim.md", "# Branches?\nnone")]);

    let out = crib_in(dir.path())
        .args(["search", "branch", "--matches", "-f", "jsonl"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Git");
    let lines: Vec<u64> = rows[0]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["line"].as_u64().unwrap())
        .collect();
    assert_eq!(lines, vec![3, 4]);
    assert_eq!(rows[1]["name"], "Vim");
    assert_eq!(rows[1]["matches"][0]["heading"], "Branches?");
}

#[test]
fn search_on_missing_directory_reports_it() {
    let parent = library(&[]);

    crib_in(&parent.path().join("gone"))
        .args(["search", "x", "-f", "text"])
        .assert()
        .success()
        .stdout("No cheatsheets found\n")
        .stderr(predicate::str::contains("Error: Directory"));
}
