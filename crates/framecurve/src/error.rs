//! Error types for the framecurve library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for framecurve operations.
#[derive(Debug, Error)]
pub enum FramecurveError {
    /// A line matched neither the comment nor the correlation grammar, or a
    /// curve was rejected for strict serialization.
    #[error("{0}")]
    Malformed(String),

    /// The caller supplied neither a line source nor a curve.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error opening or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading lines from a source or writing to a sink.
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FramecurveError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for the structural failure kind.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Result type alias for framecurve operations.
pub type Result<T> = std::result::Result<T, FramecurveError>;
