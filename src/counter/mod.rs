mod functions;
mod lines;

pub use functions::{FunctionCounter, FunctionTally, PatternKind};
pub use lines::{count_lines, decode_lossy, is_line_boundary};

/// Line and function counts for one source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines: usize,
    pub functions: FunctionTally,
}

/// Counts lines and heuristic functions in raw file contents.
#[derive(Default)]
pub struct SourceCounter {
    functions: FunctionCounter,
}

impl SourceCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, bytes: &[u8]) -> SourceStats {
        let content = decode_lossy(bytes);
        SourceStats {
            lines: count_lines(&content),
            functions: self.functions.tally(&content),
        }
    }
}
