//! Validator correctness corpus tests
//!
//! Each case is a file body plus the violations the validator must report.

use blocklist_sync::{run_validate, ExitCode, SyncError, ViolationReason};
use std::fs;
use tempfile::TempDir;

fn check(content: &str) -> Vec<(usize, ViolationReason)> {
    blocklist_format::validate(content)
        .violations
        .into_iter()
        .map(|v| (v.line_number, v.reason))
        .collect()
}

// =============================================================================
// Category 1: Accepted files
// =============================================================================

#[test]
fn test_accepted_mixed_file() {
    let content = "\
# Blocklist
# Merged on 2026-10-19 06:00 UTC

-1001234567890  # channel
42
@abcde
@Spam_Bot_2026  # reported twice
";
    assert!(check(content).is_empty());
}

#[test]
fn test_accepted_username_bounds() {
    let max = format!("@{}", "z".repeat(32));
    assert!(check(&format!("@abcde\n{}\n", max)).is_empty());
}

#[test]
fn test_accepted_stray_comments_in_body() {
    assert!(check("1\n#\n   #   note\n2 #\n").is_empty());
}

// =============================================================================
// Category 2: Malformed lines
// =============================================================================

#[test]
fn test_rejected_username_too_short() {
    assert_eq!(check("@abcd\n"), vec![(1, ViolationReason::InvalidFormat)]);
}

#[test]
fn test_rejected_username_too_long() {
    let too_long = format!("@{}\n", "a".repeat(33));
    assert_eq!(check(&too_long), vec![(1, ViolationReason::InvalidFormat)]);
}

#[test]
fn test_rejected_malformed_values() {
    let content = "missing_at\n@bad-char\n1.5\n12 34\n+7\n";
    assert_eq!(
        check(content),
        vec![
            (1, ViolationReason::InvalidFormat),
            (2, ViolationReason::InvalidFormat),
            (3, ViolationReason::InvalidFormat),
            (4, ViolationReason::InvalidFormat),
            (5, ViolationReason::InvalidFormat),
        ]
    );
}

// =============================================================================
// Category 3: Duplicates
// =============================================================================

#[test]
fn test_rejected_case_duplicate() {
    assert_eq!(
        check("@Foo_Bar\n@foo_bar\n"),
        vec![(2, ViolationReason::Duplicate)]
    );
}

#[test]
fn test_rejected_every_repeat_reported() {
    assert_eq!(
        check("7\n8\n7 # again\n7\n"),
        vec![(3, ViolationReason::Duplicate), (4, ViolationReason::Duplicate)]
    );
}

// =============================================================================
// Category 4: File handling
// =============================================================================

#[test]
fn test_run_validate_on_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blacklist.txt");
    fs::write(&path, "# list\n@valid_name\n@valid_NAME\nnot valid\n").unwrap();

    let report = run_validate(&path).unwrap();

    assert!(!report.valid);
    assert_eq!(report.checked, 3);
    assert_eq!(
        report.to_human(),
        "Validation failed:\n\
         \x20 Line 3: '@valid_NAME' — duplicate\n\
         \x20 Line 4: 'not valid' — invalid format\n\
         \n\
         Found 2 problem(s). Fix them and re-run."
    );
}

#[test]
fn test_run_validate_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = run_validate(&dir.path().join("blacklist.txt")).unwrap_err();
    assert!(matches!(err, SyncError::MissingFile(_)));
    assert_eq!(err.exit_code(), ExitCode::MissingInput);
}
