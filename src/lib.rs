//! Blocklist sync - merge and validate a line-oriented blocklist
//!
//! This crate keeps a local blocklist file (usernames and numeric ids, one
//! per line) in sync with an upstream file: entries are merged, deduplicated
//! by normalized key, sorted deterministically and written back with a
//! freshness marker. A validator checks a file against the entry grammar.
//!
//! The file format itself lives in the `blocklist-format` crate; this crate
//! adds file access, configuration, logging and the `blocklist` CLI.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod summary;
pub mod telemetry;

pub use blocklist_format::{Document, Entry, FreshnessMarker, ValidationReport, Violation, ViolationReason};
pub use config::{CliOverrides, ConfigError, SyncConfig};
pub use error::SyncError;
pub use pipeline::{content_changed, run_merge, run_validate, MergeRequest};
pub use summary::{ExitCode, MergeReport};
