//! The scan-and-accumulate driver.
//!
//! [`Reporter`] walks a root with a [`FileScanner`], counts every candidate
//! file, and hands each record to a [`ReportSink`] as soon as it is ready.
//! Unreadable files are passed to the sink as [`ReadFailure`]s and skipped.

mod types;

pub use types::{FileReport, ReadFailure, Summary};

use std::path::Path;

use crate::counter::SourceCounter;
use crate::error::Result;
use crate::scanner::{FileScanner, ScanWarning};

/// Receives report events in traversal order.
pub trait ReportSink {
    /// Called once before traversal starts.
    fn start(&mut self, _root: &Path) {}

    /// A traversal problem below the root. Scanning continues.
    fn warning(&mut self, _warning: &ScanWarning) {}

    fn file(&mut self, report: &FileReport);

    fn failure(&mut self, failure: &ReadFailure);

    /// Called once with the final totals.
    ///
    /// # Errors
    /// Returns an error if the report cannot be rendered.
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}

/// Source of file contents (for testability).
pub trait SourceReader {
    /// Read the whole file.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be opened or read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads files from disk. The handle is closed before `read` returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

pub struct Reporter<S: FileScanner, R: SourceReader = FsReader> {
    scanner: S,
    reader: R,
    counter: SourceCounter,
}

impl<S: FileScanner> Reporter<S, FsReader> {
    #[must_use]
    pub fn new(scanner: S) -> Self {
        Self::with_reader(scanner, FsReader)
    }
}

impl<S: FileScanner, R: SourceReader> Reporter<S, R> {
    #[must_use]
    pub fn with_reader(scanner: S, reader: R) -> Self {
        Self {
            scanner,
            reader,
            counter: SourceCounter::new(),
        }
    }

    /// Scan `root`, feed every record to `sink`, and return the totals.
    ///
    /// # Errors
    /// Returns an error if the root cannot be scanned or the sink fails to
    /// render the report. Per-file read errors are not errors here.
    pub fn run(&self, root: &Path, sink: &mut dyn ReportSink) -> Result<Summary> {
        let outcome = self.scanner.scan(root)?;
        sink.start(root);

        for warning in &outcome.warnings {
            sink.warning(warning);
        }

        let mut summary = Summary::default();
        for path in &outcome.files {
            match self.reader.read(path) {
                Ok(bytes) => {
                    let stats = self.counter.count(&bytes);
                    let report = FileReport {
                        path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
                        lines: stats.lines,
                        functions: stats.functions,
                    };
                    summary.record(&report);
                    sink.file(&report);
                }
                Err(err) => sink.failure(&ReadFailure {
                    path: path.clone(),
                    message: err.to_string(),
                }),
            }
        }

        sink.finish(&summary)?;
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
