use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot scan {path}")]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TallyError {
    /// Short category name used as the heading of a printed error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::ScanRoot { .. } => "Scan",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Underlying cause, when the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ScanRoot { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ScanRoot { .. } => {
                Some("Pass an existing directory as ROOT or set CODE_TALLY_ROOT")
            }
            Self::InvalidPattern { .. } => Some("Check the glob syntax of --exclude patterns"),
            Self::TomlParse(_) => Some("Fix the config file or rerun with --no-config"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
