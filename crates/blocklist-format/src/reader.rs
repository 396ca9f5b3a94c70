//! Blocklist file reader.
//!
//! Splits file content into a header block (leading blank and `#` lines) and
//! a sequence of entries. The header ends permanently at the first line that
//! is neither blank nor a comment.

use serde::{Deserialize, Serialize};

use crate::entry::{split_main_and_comment, Entry, COMMENT_CHAR};

/// Parsed blocklist file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Leading blank/comment lines, right-trimmed, in file order.
    pub header: Vec<String>,

    /// Body entries in file order.
    pub entries: Vec<Entry>,
}

impl Document {
    /// Document with no header and no entries, as produced for a missing file.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.entries.is_empty()
    }
}

/// Parse file content into a [`Document`].
///
/// Body lines are split on the first `#`. Lines whose value part is empty
/// (blank lines, comment-only lines after the header) are dropped.
pub fn parse_document(content: &str) -> Document {
    let mut doc = Document::default();
    let mut in_header = true;

    for raw in content.lines() {
        let line = raw.trim_end();

        if in_header && (line.is_empty() || line.starts_with(COMMENT_CHAR)) {
            doc.header.push(line.to_string());
            continue;
        }
        in_header = false;

        let (main, comment) = split_main_and_comment(line);
        if main.is_empty() {
            continue;
        }
        doc.entries.push(Entry::new(main, comment));
    }

    tracing::debug!(
        header_lines = doc.header.len(),
        entries = doc.entries.len(),
        "parsed blocklist document"
    );
    doc
}
