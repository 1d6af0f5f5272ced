//! Error types for report output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing ranking results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write an output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars could not build or serialise the result table.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// The JSON report could not be serialised.
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
