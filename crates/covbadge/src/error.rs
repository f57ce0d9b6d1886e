//! Error types for badge generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for badge operations
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Errors that can occur while generating a coverage badge
#[derive(Debug, Error)]
pub enum BadgeError {
    /// Reading the report or writing the page failed
    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The coverage report is malformed or lacks `percent_covered`
    #[error("Invalid coverage report {}: {source}", path.display())]
    Parse {
        /// Report that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The reported percentage cannot be mapped to any tier
    #[error("Coverage percentage {percent} is out of range")]
    Validation {
        /// Offending value
        percent: f64,
    },

    /// Writing diagnostics failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A custom tier table broke the ordering invariants
    #[error("Invalid tier table: {message}")]
    InvalidTierTable {
        /// Error message
        message: String,
    },
}

impl BadgeError {
    /// Create a file access error for `path`
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for `path`
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid tier table error
    #[must_use]
    pub fn invalid_tier_table(message: impl Into<String>) -> Self {
        Self::InvalidTierTable {
            message: message.into(),
        }
    }
}
