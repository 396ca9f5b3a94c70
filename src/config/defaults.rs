//! Built-in defaults (layer 1)

use blocklist_format::{DEFAULT_MARKER_PREFIX, DEFAULT_TIMESTAMP_FORMAT};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".blocklist.toml";

/// Built-in default configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Local blocklist file (default: "blacklist.txt")
    pub target: String,

    /// Freshness marker prefix (default: "# Merged on ")
    pub marker_prefix: String,

    /// Marker timestamp format (default: "%Y-%m-%d %H:%M UTC")
    pub timestamp_format: String,

    /// Ignore marker lines when deciding whether to write (default: true)
    pub ignore_marker_on_compare: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            target: "blacklist.txt".to_string(),
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            ignore_marker_on_compare: true,
        }
    }
}
