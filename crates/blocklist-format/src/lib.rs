//! Line-oriented blocklist format.
//!
//! A blocklist file is a header of blank and `#` lines followed by one entry
//! per line: a username (`@name`) or integer id, optionally followed by an
//! inline `# comment`. This crate parses, merges, renders and validates that
//! format without touching the filesystem.

mod entry;
mod merge;
mod reader;
mod result;
mod validator;
mod writer;

pub use entry::{normalize_value, split_main_and_comment, Entry, NormalizedKey};
pub use merge::{compare_entries, compare_values, merge_entries};
pub use reader::{parse_document, Document};
pub use result::{ValidationReport, Violation, ViolationReason};
pub use validator::{is_numeric_id, is_username, is_valid_value, validate, validate_lines};
pub use writer::{
    refresh_header, render_document, FreshnessMarker, MarkerError, DEFAULT_MARKER_PREFIX,
    DEFAULT_TIMESTAMP_FORMAT,
};
