use std::path::PathBuf;

use serde::Serialize;

use crate::counter::FunctionTally;

/// Counts for one successfully read file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the scan root.
    pub path: PathBuf,
    pub lines: usize,
    pub functions: FunctionTally,
}

impl FileReport {
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.total()
    }
}

/// A candidate file that could not be read. Contributes nothing to the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// Path as reached from the scan root (not made relative).
    pub path: PathBuf,
    pub message: String,
}

/// Run-wide totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "total_files")]
    pub files: usize,
    #[serde(rename = "total_lines")]
    pub lines: usize,
    #[serde(rename = "total_functions")]
    pub functions: usize,
}

impl Summary {
    pub fn record(&mut self, report: &FileReport) {
        self.files += 1;
        self.lines += report.lines;
        self.functions += report.function_count();
    }
}
