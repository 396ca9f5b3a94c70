//! Merge and validate pipelines
//!
//! Merge: read target and source → merge entries → render → write if the
//! content changed. Validate: read one file → per-line checks.
//!
//! Both are single-pass and stateless; all state lives in the files.

use std::path::{Path, PathBuf};

use blocklist_format::{merge_entries, parse_document, render_document, validate, ValidationReport};
use chrono::{DateTime, Utc};

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::store::{load_or_empty, read_optional, write_atomic};
use crate::summary::MergeReport;

/// Inputs of one merge run not covered by [`SyncConfig`]
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Upstream file; must exist
    pub source: PathBuf,

    /// Report what would change without writing
    pub dry_run: bool,
}

/// Whether the rendered text counts as a change to the existing text.
///
/// With `ignore_marker` set, freshness-marker lines are removed from both
/// sides first, so a new timestamp alone is not a change.
pub fn content_changed(config: &SyncConfig, old: &str, new: &str) -> bool {
    if config.ignore_marker_on_compare {
        config.marker.strip_from(old) != config.marker.strip_from(new)
    } else {
        old != new
    }
}

/// Merge `request.source` into the configured target.
///
/// `now` stamps the freshness marker. A missing target is an empty list; a
/// missing source aborts before anything is read or written.
pub fn run_merge(
    request: &MergeRequest,
    config: &SyncConfig,
    now: DateTime<Utc>,
) -> Result<MergeReport, SyncError> {
    let _span = tracing::info_span!(
        "merge",
        source = %request.source.display(),
        target = %config.target.display(),
        dry_run = request.dry_run,
    )
    .entered();

    let source_text = read_optional(&request.source)?
        .ok_or_else(|| SyncError::MissingSource(request.source.clone()))?;
    let source = parse_document(&source_text);
    let target = load_or_empty(&config.target)?;

    let merged = merge_entries(&target.document.entries, &source.entries);
    let new_contents = render_document(&target.document.header, &merged, &config.marker, now);
    let changed = content_changed(config, &target.text, &new_contents);

    let mut written = false;
    if changed && !request.dry_run {
        write_atomic(&config.target, &new_contents)?;
        written = true;
        tracing::info!(entries = merged.len(), "wrote updated blocklist");
    } else if !changed {
        tracing::info!("blocklist unchanged, skipping write");
    }

    Ok(MergeReport {
        target: config.target.clone(),
        source: request.source.clone(),
        merged_at: now,
        entries_before: target.document.entries.len(),
        source_entries: source.entries.len(),
        entries_after: merged.len(),
        changed,
        written,
        dry_run: request.dry_run,
        contents: (changed && request.dry_run).then_some(new_contents),
    })
}

/// Validate the blocklist at `path`, which must exist.
pub fn run_validate(path: &Path) -> Result<ValidationReport, SyncError> {
    let _span = tracing::info_span!("validate", path = %path.display()).entered();

    let text = read_optional(path)?.ok_or_else(|| SyncError::MissingFile(path.to_path_buf()))?;
    let report = validate(&text);
    if !report.valid {
        tracing::warn!(violations = report.violations.len(), "blocklist failed validation");
    }
    Ok(report)
}
