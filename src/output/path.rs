//! Path display utilities for consistent output formatting.

use std::path::Path;

/// Format a path for display with forward-slash separators on every platform.
///
/// Returns `"."` for an empty path (a file equal to the scan root).
#[must_use]
pub fn display_path(path: &Path) -> String {
    let result = normalize_separators(&path.to_string_lossy());

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
