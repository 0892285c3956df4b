//! Error types
//!
//! The computation pipeline cannot fail; these cover loading its inputs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading source data or profile files
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

/// Result type for input loading
pub type TrendResult<T> = Result<T, TrendError>;
