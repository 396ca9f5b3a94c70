//! Validation result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable reason a line failed validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViolationReason {
    /// Key already appeared on an earlier line.
    #[serde(rename = "DUPLICATE")]
    Duplicate,

    /// Value is neither a username nor an integer id.
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
}

impl ViolationReason {
    /// Get a machine-readable string representation.
    pub fn to_code(&self) -> &'static str {
        match self {
            ViolationReason::Duplicate => "DUPLICATE",
            ViolationReason::InvalidFormat => "INVALID_FORMAT",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ViolationReason::Duplicate => "duplicate",
            ViolationReason::InvalidFormat => "invalid format",
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single offending line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// 1-indexed physical line number.
    pub line_number: usize,

    /// The line, trimmed.
    pub line: String,

    pub reason: ViolationReason,
}

impl Violation {
    pub fn new(line_number: usize, line: impl Into<String>, reason: ViolationReason) -> Self {
        Self {
            line_number,
            line: line.into(),
            reason,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: '{}' — {}", self.line_number, self.line, self.reason)
    }
}

/// Outcome of validating a whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether the file passed every check.
    pub valid: bool,

    /// Number of lines that were checked (non-blank, non-comment).
    pub checked: usize,

    /// Every violation, in line order.
    #[serde(default)]
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Build a report; validity follows from the violation list.
    pub fn new(checked: usize, violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            checked,
            violations,
        }
    }

    /// Operator-facing text, one line per violation.
    pub fn to_human(&self) -> String {
        if self.valid {
            return "OK — blocklist format looks good.".to_string();
        }
        let mut output = String::from("Validation failed:\n");
        for violation in &self.violations {
            output.push_str(&format!("  {}\n", violation));
        }
        output.push_str(&format!(
            "\nFound {} problem(s). Fix them and re-run.",
            self.violations.len()
        ));
        output
    }
}
