mod directory;
mod filter;
mod types;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, SourceFilter};
pub use types::{ScanOutcome, ScanWarning};

use std::path::Path;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all candidate file paths.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or is not a directory.
    fn scan(&self, root: &Path) -> Result<ScanOutcome>;
}
