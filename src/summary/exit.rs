//! Stable process exit codes

use blocklist_format::ValidationReport;
use serde::{Deserialize, Serialize};

/// Stable exit codes shared by every subcommand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ExitCode {
    /// Completed without error (including "no changes")
    #[default]
    Success = 0,
    /// Validation failed, or an I/O or config error occurred
    Failure = 1,
    /// Required input file (merge source, validate path) does not exist
    MissingInput = 2,
}

impl ExitCode {
    /// Get the integer value of the exit code
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Check if this exit code indicates success
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}

impl From<&ValidationReport> for ExitCode {
    fn from(report: &ValidationReport) -> Self {
        if report.valid {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}
