//! Error types for StudentDB
//!
//! Provides a unified error type for all operations.
//!
//! Only I/O-level problems are errors. A missing record or a missing data
//! file are ordinary results (`None`, `0`) and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StudentDbError
pub type Result<T> = std::result::Result<T, StudentDbError>;

/// Unified error type for StudentDB operations
#[derive(Debug, Error)]
pub enum StudentDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Shell Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StudentDbError {
    /// Wrap an I/O error raised while opening `path`
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
