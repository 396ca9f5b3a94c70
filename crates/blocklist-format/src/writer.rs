//! Blocklist file writer.
//!
//! Renders a header and entries back to text and manages the freshness marker,
//! a single header line recording when the file was last merged.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::entry::{Entry, COMMENT_CHAR};

/// Default prefix of the freshness marker line.
pub const DEFAULT_MARKER_PREFIX: &str = "# Merged on ";

/// Default strftime format of the marker timestamp.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Errors building a [`FreshnessMarker`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("marker prefix must start with '#': {0:?}")]
    PrefixNotComment(String),

    #[error("timestamp format is empty")]
    EmptyFormat,

    #[error("invalid timestamp format: {0:?}")]
    InvalidFormat(String),

    #[error("marker line must not contain a line break: {0:?}")]
    LineBreak(String),
}

fn has_line_break(s: &str) -> bool {
    s.contains(&['\n', '\r'][..])
}

/// Managed header line of the form `<prefix><timestamp>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshnessMarker {
    prefix: String,
    timestamp_format: String,
}

impl Default for FreshnessMarker {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_MARKER_PREFIX.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl FreshnessMarker {
    /// Build a marker, rejecting prefixes that would not parse back as a
    /// header comment, strftime strings chrono cannot render, and anything
    /// that would split the marker over more than one line.
    pub fn new(
        prefix: impl Into<String>,
        timestamp_format: impl Into<String>,
    ) -> Result<Self, MarkerError> {
        let prefix = prefix.into();
        let timestamp_format = timestamp_format.into();

        if !prefix.starts_with(COMMENT_CHAR) {
            return Err(MarkerError::PrefixNotComment(prefix));
        }
        if has_line_break(&prefix) {
            return Err(MarkerError::LineBreak(prefix));
        }
        if timestamp_format.is_empty() {
            return Err(MarkerError::EmptyFormat);
        }
        if StrftimeItems::new(&timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(MarkerError::InvalidFormat(timestamp_format));
        }

        // Specifiers such as `%n` only show their output once rendered.
        let mut sample = String::new();
        if write!(sample, "{}", DateTime::<Utc>::default().format(&timestamp_format)).is_err() {
            return Err(MarkerError::InvalidFormat(timestamp_format));
        }
        if has_line_break(&sample) {
            return Err(MarkerError::LineBreak(timestamp_format));
        }

        Ok(Self {
            prefix,
            timestamp_format,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Whether a line is a marker line (any timestamp).
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(&self.prefix)
    }

    /// Marker line for the given instant.
    pub fn line(&self, now: DateTime<Utc>) -> String {
        let mut line = self.prefix.clone();
        if write!(line, "{}", now.format(&self.timestamp_format)).is_err() {
            // Unreachable for formats accepted by `new`; keep the line well-formed anyway.
            line.truncate(self.prefix.len());
            line.push_str(&now.to_rfc3339());
        }
        line
    }

    /// Text with every marker line removed.
    ///
    /// Used for change detection so a refreshed timestamp alone does not count
    /// as a modification.
    pub fn strip_from(&self, text: &str) -> String {
        text.lines()
            .filter(|line| !self.matches(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Header lines with stale markers and trailing blank lines removed, followed
/// by a fresh marker for `now`.
///
/// Trailing blanks are dropped because the renderer always inserts the
/// separator between header and body; keeping them would grow the header by
/// one blank line per merge.
pub fn refresh_header(header: &[String], marker: &FreshnessMarker, now: DateTime<Utc>) -> Vec<String> {
    let mut out: Vec<String> = header
        .iter()
        .filter(|line| !marker.matches(line))
        .cloned()
        .collect();
    while out.last().is_some_and(|line| line.trim().is_empty()) {
        out.pop();
    }
    out.push(marker.line(now));
    out
}

/// Render a header and entries to file text.
///
/// The header gets a refreshed marker. Header and body are separated by one
/// blank line when both are present, and the result ends with exactly one
/// newline.
pub fn render_document(
    header: &[String],
    entries: &[Entry],
    marker: &FreshnessMarker,
    now: DateTime<Utc>,
) -> String {
    let header_out = refresh_header(header, marker, now);
    let body: Vec<String> = entries.iter().map(Entry::to_line).collect();

    let mut parts: Vec<String> = Vec::with_capacity(2);
    if !header_out.is_empty() {
        parts.push(header_out.join("\n"));
    }
    if !body.is_empty() {
        parts.push(body.join("\n"));
    }

    let mut text = parts.join("\n\n");
    text.push('\n');
    text
}
