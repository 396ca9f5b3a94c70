//! Error type for the merge and validate pipelines.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::summary::ExitCode;

/// Fatal pipeline errors. Validation findings are data, not errors.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("source file '{}' not found", .0.display())]
    MissingSource(PathBuf),

    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),

    #[error("IO error on '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit code the CLI reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyncError::MissingSource(_) | SyncError::MissingFile(_) => ExitCode::MissingInput,
            SyncError::Io { .. } | SyncError::Config(_) | SyncError::Json(_) => ExitCode::Failure,
        }
    }
}
