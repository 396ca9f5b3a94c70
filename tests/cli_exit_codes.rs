//! Exit codes of the `blocklist` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn blocklist(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blocklist"))
        .args(args)
        .current_dir(dir)
        .env_remove("BLOCKLIST_LOG")
        .output()
        .unwrap()
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_clean_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt"), "# h\n@abcde\n123\n").unwrap();

    let out = blocklist(dir.path(), &["validate", "list.txt"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("OK"));
}

#[test]
fn test_validate_violations_exit_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt"), "@Foooo\n@foooo\n").unwrap();

    let out = blocklist(dir.path(), &["validate", "list.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Found 1 problem(s)"));
}

#[test]
fn test_validate_json_keeps_failure_code() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt"), "@abcd\n").unwrap();

    let out = blocklist(dir.path(), &["validate", "list.txt", "--json"]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], false);
}

#[test]
fn test_validate_json_clean_exits_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("list.txt"), "42\n").unwrap();

    let out = blocklist(dir.path(), &["validate", "list.txt", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], true);
}

#[test]
fn test_validate_missing_file_exits_two() {
    let dir = TempDir::new().unwrap();

    let out = blocklist(dir.path(), &["validate", "absent.txt"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ERROR:"));
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn test_merge_missing_source_exits_two() {
    let dir = TempDir::new().unwrap();

    let out = blocklist(dir.path(), &["merge", "--source", "upstream.txt"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!dir.path().join("blacklist.txt").exists());
}

#[test]
fn test_merge_writes_default_target() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("upstream.txt"), "456\n123  # spam\n").unwrap();

    let out = blocklist(dir.path(), &["merge", "--source", "upstream.txt"]);
    assert_eq!(out.status.code(), Some(0));

    let written = fs::read_to_string(dir.path().join("blacklist.txt")).unwrap();
    assert!(written.ends_with("\n\n123  # spam\n456\n"));
}

#[test]
fn test_merge_bad_config_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("upstream.txt"), "1\n").unwrap();
    fs::write(dir.path().join(".blocklist.toml"), "timestamp_format = \"%Y%n\"\n").unwrap();

    let out = blocklist(dir.path(), &["merge", "--source", "upstream.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("blacklist.txt").exists());
}
