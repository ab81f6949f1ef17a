use std::path::Path;

use indexmap::IndexSet;
use walkdir::{DirEntry, WalkDir};

use super::{FileFilter, FileScanner, ScanOutcome, ScanWarning};
use crate::error::{Result, TallyError};

/// Depth-first walker that prunes excluded directory names before descending.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    exclude_dirs: IndexSet<String>,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F, exclude_dirs: impl IntoIterator<Item = String>) -> Self {
        Self {
            filter,
            exclude_dirs: exclude_dirs.into_iter().collect(),
        }
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .exclude_dirs
                .contains(&*entry.file_name().to_string_lossy())
    }

    fn check_root(root: &Path) -> Result<()> {
        let metadata = std::fs::metadata(root).map_err(|source| TallyError::ScanRoot {
            path: root.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(TallyError::ScanRoot {
                path: root.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            })
        }
    }

    fn scan_impl(&self, root: &Path) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        // The root is never pruned, even when its own name is excluded.
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    outcome.warnings.push(ScanWarning::from(err));
                    continue;
                }
            };

            if entry.depth() == 0 || !is_file_like(&entry) {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.filter.should_include(relative) {
                outcome.files.push(entry.into_path());
            }
        }

        outcome
    }
}

/// Regular files and symlinks that do not resolve to a directory.
///
/// Dangling symlinks are kept so that the failed read is reported.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        Self::check_root(root)?;
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
