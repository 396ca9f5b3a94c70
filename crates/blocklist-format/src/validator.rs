//! Line-by-line blocklist validator.
//!
//! Checks every non-blank, non-comment line against the username and integer
//! id grammars and rejects repeated keys. Violations are collected, never
//! short-circuited.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::entry::{split_main_and_comment, COMMENT_CHAR};
use crate::result::{ValidationReport, Violation, ViolationReason};

/// `@` followed by 5 to 32 letters, digits or underscores.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]{5,32}$").unwrap());

/// Optional `-` followed by one or more ASCII digits.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Whether `value` is a well-formed username token.
pub fn is_username(value: &str) -> bool {
    USERNAME_RE.is_match(value)
}

/// Whether `value` is a well-formed integer id token.
pub fn is_numeric_id(value: &str) -> bool {
    ID_RE.is_match(value)
}

/// Whether `value` matches either grammar.
pub fn is_valid_value(value: &str) -> bool {
    is_username(value) || is_numeric_id(value)
}

/// Validate file content.
pub fn validate(content: &str) -> ValidationReport {
    validate_lines(content.lines())
}

/// Validate a sequence of physical lines (numbered from 1).
///
/// The duplicate check lowercases the whole value, so it is case-insensitive
/// for ids and usernames alike. A line reported as a duplicate is not checked
/// against the grammars.
pub fn validate_lines<'a, I>(lines: I) -> ValidationReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut violations = Vec::new();
    let mut checked = 0usize;

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_number = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_CHAR) {
            continue;
        }

        let (main, _) = split_main_and_comment(line);
        if main.is_empty() {
            continue;
        }
        checked += 1;

        if !seen.insert(main.to_lowercase()) {
            violations.push(Violation::new(line_number, line, ViolationReason::Duplicate));
            continue;
        }

        if !is_valid_value(main) {
            violations.push(Violation::new(line_number, line, ViolationReason::InvalidFormat));
        }
    }

    tracing::debug!(checked, violations = violations.len(), "validated blocklist");
    ValidationReport::new(checked, violations)
}
