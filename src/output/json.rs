use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::counter::PatternKind;
use crate::error::Result;
use crate::report::{FileReport, ReadFailure, ReportSink, Summary};

use super::ErrorOutput;
use super::path::display_path;

/// Collects the whole run and writes one JSON document when it finishes.
///
/// Read failures are also written to stderr as they happen, as in text mode.
pub struct JsonSink<W: Write, E: Write> {
    out: W,
    err: E,
    errors: ErrorOutput,
    root: String,
    files: Vec<JsonFile>,
    failures: Vec<JsonFailure>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a str,
    files: &'a [JsonFile],
    failures: &'a [JsonFailure],
    summary: &'a Summary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    lines: usize,
    functions: usize,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    functions_by_kind: IndexMap<PatternKind, usize>,
}

#[derive(Serialize)]
struct JsonFailure {
    path: String,
    message: String,
}

impl<W: Write, E: Write> JsonSink<W, E> {
    #[must_use]
    pub const fn new(out: W, err: E, errors: ErrorOutput) -> Self {
        Self {
            out,
            err,
            errors,
            root: String::new(),
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> ReportSink for JsonSink<W, E> {
    fn start(&mut self, root: &Path) {
        self.root = root.display().to_string();
    }

    fn file(&mut self, report: &FileReport) {
        self.files.push(JsonFile {
            path: display_path(&report.path),
            lines: report.lines,
            functions: report.function_count(),
            functions_by_kind: report.functions.non_zero().collect(),
        });
    }

    fn failure(&mut self, failure: &ReadFailure) {
        self.errors
            .write_read_failure(&mut self.err, &failure.path, &failure.message);
        self.failures.push(JsonFailure {
            path: failure.path.display().to_string(),
            message: failure.message.clone(),
        });
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let report = JsonReport {
            root: &self.root,
            files: &self.files,
            failures: &self.failures,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
