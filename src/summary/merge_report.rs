//! Merge outcome report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a merge run decided and did
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Local blocklist file
    pub target: PathBuf,

    /// Upstream file merged in
    pub source: PathBuf,

    /// When the merge ran (also the marker timestamp)
    pub merged_at: DateTime<Utc>,

    /// Entries in the target before the merge
    pub entries_before: usize,

    /// Entries read from the source
    pub source_entries: usize,

    /// Entries after dedup
    pub entries_after: usize,

    /// Whether the rendered content differs from the target
    pub changed: bool,

    /// Whether the target was rewritten
    pub written: bool,

    /// Dry run: nothing is written
    pub dry_run: bool,

    /// Rendered file contents (only kept for dry runs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl MergeReport {
    /// Operator-facing summary.
    pub fn to_human(&self) -> String {
        if !self.changed {
            return "No changes to blocklist.".to_string();
        }

        let mut output = format!(
            "Updating '{}' — {} entries (was {}).",
            self.target.display(),
            self.entries_after,
            self.entries_before
        );
        if let Some(ref contents) = self.contents {
            output.push('\n');
            output.push_str(contents);
        }
        if self.written {
            output.push_str("\nWrote updated blocklist.");
        }
        output
    }
}
