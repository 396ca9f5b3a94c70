//! Blocklist entry model and value normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character that introduces a comment, both for whole lines and inline.
pub const COMMENT_CHAR: char = '#';

/// Prefix that marks a value as a username rather than a numeric id.
pub const USERNAME_PREFIX: char = '@';

/// A single blocklist record: a value plus an optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Username (`@name`) or integer id.
    pub value: String,

    /// Inline comment text without the leading `#`. Empty when absent.
    #[serde(default)]
    pub comment: String,
}

impl Entry {
    /// Create an entry from a value and comment.
    pub fn new(value: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// Create an entry without a comment.
    pub fn bare(value: impl Into<String>) -> Self {
        Self::new(value, String::new())
    }

    /// Deduplication key for this entry.
    pub fn key(&self) -> NormalizedKey {
        NormalizedKey::of(&self.value)
    }

    /// Same entry with its value rewritten to the stored normalized form.
    pub fn normalized(self) -> Self {
        Self {
            value: normalize_value(&self.value),
            comment: self.comment,
        }
    }

    /// Render the entry as a body line.
    pub fn to_line(&self) -> String {
        if self.comment.is_empty() {
            self.value.clone()
        } else {
            format!("{}  {} {}", self.value, COMMENT_CHAR, self.comment)
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Case-normalized form of an entry value, used for equality and dedup.
///
/// Usernames compare case-insensitively; everything else compares exactly
/// (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Compute the key for a raw value.
    pub fn of(value: &str) -> Self {
        Self(normalize_value(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a raw value to the form it is stored in.
///
/// Values starting with `@` are trimmed and lowercased. Anything else is only
/// trimmed. The prefix check runs on the untrimmed value, so ` @Name` keeps its
/// case.
pub fn normalize_value(value: &str) -> String {
    if value.starts_with(USERNAME_PREFIX) {
        value.trim().to_lowercase()
    } else {
        value.trim().to_string()
    }
}

/// Split a line into `(main, comment)` on the first `#`, trimming both halves.
pub fn split_main_and_comment(line: &str) -> (&str, &str) {
    match line.split_once(COMMENT_CHAR) {
        Some((main, comment)) => (main.trim(), comment.trim()),
        None => (line.trim(), ""),
    }
}
