//! Configuration layering
//!
//! Resolves the effective configuration from three layers:
//! 1. Built-in defaults
//! 2. Config file (.blocklist.toml, or an explicit `--config` path)
//! 3. CLI flags

mod defaults;
mod file;

pub use defaults::{BuiltinDefaults, DEFAULT_CONFIG_FILE};
pub use file::{ConfigError, FileConfig};

use blocklist_format::FreshnessMarker;
use std::path::{Path, PathBuf};

/// Values supplied on the command line (layer 3)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub target: Option<PathBuf>,
}

/// Effective configuration after layering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Local blocklist file
    pub target: PathBuf,

    /// Freshness marker written on merge
    pub marker: FreshnessMarker,

    /// Ignore marker lines when deciding whether the merge changed anything
    pub ignore_marker_on_compare: bool,

    /// Config file that contributed, if any
    pub source: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let defaults = BuiltinDefaults::default();
        Self {
            target: PathBuf::from(defaults.target),
            marker: FreshnessMarker::default(),
            ignore_marker_on_compare: defaults.ignore_marker_on_compare,
            source: None,
        }
    }
}

impl SyncConfig {
    /// Load the effective configuration.
    ///
    /// An explicit `config_path` must exist. Without one, `.blocklist.toml` in
    /// the working directory is used when present and skipped otherwise.
    pub fn load(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let (file, source) = match config_path {
            Some(path) => (FileConfig::from_file(path)?, Some(path.to_path_buf())),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    (FileConfig::from_file(&default_path)?, Some(default_path))
                } else {
                    (FileConfig::default(), None)
                }
            }
        };

        if let Some(ref path) = source {
            tracing::debug!(path = %path.display(), "loaded config file");
        }

        Self::resolve(BuiltinDefaults::default(), file, overrides, source)
    }

    /// Merge the three layers; later layers win key by key.
    pub fn resolve(
        defaults: BuiltinDefaults,
        file: FileConfig,
        overrides: CliOverrides,
        source: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        file.validate()?;

        let target = overrides
            .target
            .or_else(|| file.target.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(defaults.target));

        let marker = FreshnessMarker::new(
            file.marker_prefix.unwrap_or(defaults.marker_prefix),
            file.timestamp_format.unwrap_or(defaults.timestamp_format),
        )
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(Self {
            target,
            marker,
            ignore_marker_on_compare: file
                .ignore_marker_on_compare
                .unwrap_or(defaults.ignore_marker_on_compare),
            source,
        })
    }
}
