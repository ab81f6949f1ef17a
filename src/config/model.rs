use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Directory names that are never descended into.
pub const DEFAULT_EXCLUDE_DIRS: [&str; 5] = ["node_modules", ".next", "dist", "build", ".git"];

/// File suffixes treated as source files.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directory names pruned from the walk wherever they appear.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Glob patterns, relative to the scan root, for files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude: Vec::new(),
        }
    }
}

/// Which files are counted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Strip leading dots from extensions and reject unusable values.
    ///
    /// # Errors
    /// Returns an error if no extensions remain or a directory name is empty.
    pub fn normalize(mut self) -> Result<Self> {
        for ext in &mut self.content.extensions {
            *ext = ext.trim().trim_start_matches('.').to_string();
        }

        if self.content.extensions.is_empty() {
            return Err(TallyError::Config(
                "content.extensions must list at least one extension".to_string(),
            ));
        }
        if self.content.extensions.iter().any(String::is_empty) {
            return Err(TallyError::Config(
                "content.extensions contains an empty extension".to_string(),
            ));
        }
        if self.scanner.exclude_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(TallyError::Config(
                "scanner.exclude_dirs contains an empty directory name".to_string(),
            ));
        }

        Ok(self)
    }
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(ToString::to_string).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
