//! Config file (.blocklist.toml)
//!
//! Every key is optional; unset keys fall through to the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Contents of a `.blocklist.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Local blocklist file path
    pub target: Option<String>,

    /// Freshness marker prefix; must start with '#'
    pub marker_prefix: Option<String>,

    /// chrono strftime format for the marker timestamp
    pub timestamp_format: Option<String>,

    /// Ignore marker lines when comparing old and new content
    pub ignore_marker_on_compare: Option<bool>,
}

impl FileConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse config from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: FileConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref target) = self.target {
            if target.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "'target' must not be empty".to_string(),
                ));
            }
        }
        if let Some(ref prefix) = self.marker_prefix {
            if !prefix.starts_with('#') {
                return Err(ConfigError::ValidationError(format!(
                    "'marker_prefix' must start with '#': {:?}",
                    prefix
                )));
            }
        }
        if let Some(ref format) = self.timestamp_format {
            if format.is_empty() {
                return Err(ConfigError::ValidationError(
                    "'timestamp_format' must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_str(
            r##"
target = "lists/blocked.txt"
marker_prefix = "# Synced "
timestamp_format = "%Y-%m-%d"
ignore_marker_on_compare = false
"##,
        )
        .unwrap();
        assert_eq!(config.target.as_deref(), Some("lists/blocked.txt"));
        assert_eq!(config.marker_prefix.as_deref(), Some("# Synced "));
        assert_eq!(config.timestamp_format.as_deref(), Some("%Y-%m-%d"));
        assert_eq!(config.ignore_marker_on_compare, Some(false));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(FileConfig::from_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_reject_unknown_key() {
        let err = FileConfig::from_str("tagret = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_reject_non_comment_prefix() {
        let err = FileConfig::from_str("marker_prefix = \"Merged on \"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("marker_prefix"));
    }

    #[test]
    fn test_reject_empty_target() {
        let err = FileConfig::from_str("target = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "target = \"custom.txt\"").unwrap();
        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.target.as_deref(), Some("custom.txt"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = FileConfig::from_file(Path::new("/nonexistent/.blocklist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
