use std::path::PathBuf;

/// Result of walking one scan root.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Candidate files, in traversal order.
    pub files: Vec<PathBuf>,
    /// Entries below the root that could not be read during traversal.
    pub warnings: Vec<ScanWarning>,
}

/// A nested entry the walker could not read. Traversal continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl From<walkdir::Error> for ScanWarning {
    fn from(err: walkdir::Error) -> Self {
        Self {
            path: err.path().map(std::path::Path::to_path_buf),
            message: err.to_string(),
        }
    }
}
