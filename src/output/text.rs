use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::{FileReport, ReadFailure, ReportSink, Summary};
use crate::scanner::ScanWarning;

use super::ErrorOutput;
use super::path::display_path;

const SEPARATOR_WIDTH: usize = 60;

/// Streams the human-readable report: one line per file as it is counted,
/// then the summary block.
pub struct TextSink<W: Write, E: Write> {
    out: W,
    err: E,
    errors: ErrorOutput,
    verbose: u8,
    quiet: bool,
}

impl<W: Write, E: Write> TextSink<W, E> {
    #[must_use]
    pub const fn new(out: W, err: E, errors: ErrorOutput) -> Self {
        Self {
            out,
            err,
            errors,
            verbose: 0,
            quiet: false,
        }
    }

    /// Show the per-pattern breakdown under each file (`-v`).
    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Print only the summary block.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_breakdown(&mut self, report: &FileReport) {
        let parts: Vec<String> = report
            .functions
            .non_zero()
            .map(|(kind, count)| format!("{}: {count}", kind.label()))
            .collect();

        if !parts.is_empty() {
            writeln!(self.out, "    ({})", parts.join(", ")).ok();
        }
    }
}

impl<W: Write, E: Write> ReportSink for TextSink<W, E> {
    fn start(&mut self, root: &Path) {
        if !self.quiet {
            writeln!(self.out, "Analyzing {}...", root.display()).ok();
            writeln!(self.out).ok();
        }
    }

    fn warning(&mut self, warning: &ScanWarning) {
        if self.verbose > 0 {
            self.errors
                .write_warning(&mut self.err, &warning.message, None);
        }
    }

    fn file(&mut self, report: &FileReport) {
        if self.quiet {
            return;
        }

        writeln!(
            self.out,
            "{}: {} lines, {} functions",
            display_path(&report.path),
            report.lines,
            report.function_count()
        )
        .ok();

        if self.verbose > 0 {
            self.write_breakdown(report);
        }
    }

    fn failure(&mut self, failure: &ReadFailure) {
        self.errors
            .write_read_failure(&mut self.err, &failure.path, &failure.message);
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let rule = "=".repeat(SEPARATOR_WIDTH);

        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Summary")?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "Total files: {}", summary.files)?;
        writeln!(self.out, "Total lines: {}", summary.lines)?;
        writeln!(self.out, "Total functions: {}", summary.functions)?;
        writeln!(self.out, "{rule}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
