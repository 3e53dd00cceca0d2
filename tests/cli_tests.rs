use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a scour command
fn scour_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("scour"))
}

/// Helper to write a pattern file into a temp dir
fn pattern_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("patterns.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help() {
    scour_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Multi-pattern text scanner"));
}

#[test]
fn test_version() {
    scour_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scour"));
}

#[test]
fn test_scan_help() {
    scour_cmd()
        .arg("scan")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan text for all patterns"));
}

#[test]
fn test_scan_reports_ranges_and_remainder() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "bcd\n");

    scour_cmd()
        .arg("scan")
        .arg(&patterns)
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout(predicate::str::contains("1..4: 'bcd'"))
        .stdout(predicate::str::contains("Remainder: 'aef'"));
}

#[test]
fn test_scan_exit_code_on_no_match() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "zzz\n");

    scour_cmd()
        .arg("scan")
        .arg(&patterns)
        .write_stdin("abcdef")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No occurrences"));
}

#[test]
fn test_scan_json_output() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "he\nshe\nhis\nhers\n");

    let output = scour_cmd()
        .arg("scan")
        .arg(&patterns)
        .arg("--json")
        .write_stdin("ahishers")
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["matches"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["remainder"], "a");
}

#[test]
fn test_scan_stats_on_stderr() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "he\nshe\nhis\nhers\n");

    scour_cmd()
        .arg("scan")
        .arg(&patterns)
        .arg("--stats")
        .write_stdin("ahishers")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nodes:          10"))
        .stderr(predicate::str::contains("Max fanout:     2"));
}

#[test]
fn test_wildcard_positions() {
    scour_cmd()
        .arg("wildcard")
        .arg("a?c")
        .write_stdin("xabcz")
        .assert()
        .success()
        .stdout(predicate::str::contains("position(s): 2"));
}

#[test]
fn test_wildcard_custom_symbol() {
    scour_cmd()
        .arg("wildcard")
        .arg("a#c")
        .arg("--wildcard")
        .arg("#")
        .write_stdin("xabcz")
        .assert()
        .success()
        .stdout(predicate::str::contains("position(s): 2"));
}

#[test]
fn test_wildcard_json_output() {
    let output = scour_cmd()
        .arg("wildcard")
        .arg("a?c")
        .arg("--json")
        .write_stdin("aacabc")
        .output()
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["starts"], serde_json::json!([1, 4]));
}

#[test]
fn test_inspect_statistics() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "he\nshe\nhis\nhers\n");

    scour_cmd()
        .arg("inspect")
        .arg(&patterns)
        .assert()
        .success()
        .stdout(predicate::str::contains("Patterns:       4"))
        .stdout(predicate::str::contains("Nodes:          10"))
        .stdout(predicate::str::contains("Terminal nodes: 4"));
}

#[test]
fn test_inspect_writes_dot_file() {
    let dir = TempDir::new().unwrap();
    let patterns = pattern_file(&dir, "ab\n");
    let dot_path = dir.path().join("trie.dot");

    scour_cmd()
        .arg("inspect")
        .arg(&patterns)
        .arg("--dot")
        .arg(&dot_path)
        .assert()
        .success();

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph trie {"));
    assert!(dot.contains("->"));
}

#[test]
fn test_missing_pattern_file_fails() {
    scour_cmd()
        .arg("scan")
        .arg("/nonexistent/patterns.txt")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read pattern file"));
}
