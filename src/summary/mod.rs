//! Run summaries and exit codes

mod exit;
mod merge_report;

pub use exit::ExitCode;
pub use merge_report::MergeReport;
