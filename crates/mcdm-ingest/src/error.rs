//! Error types for sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

use mcdm_model::ModelError;

/// Errors that can occur while loading an alternative sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Sheet Layout Errors ===
    /// No data rows, so no trailing significance row either.
    #[error("sheet has no rows; the last row must hold criterion significance")]
    MissingSignificanceRow,

    /// The configured name column does not exist.
    #[error("name column '{column}' not found")]
    NameColumnNotFound { column: String },

    /// Only the name column is present.
    #[error("sheet has no criterion columns besides '{name_column}'")]
    NoCriteria { name_column: String },

    /// A criterion cell is empty or not a number.
    #[error("alternative {row}: value '{value}' for '{column}' is not a number")]
    NonNumericCell {
        row: usize,
        column: String,
        value: String,
    },

    /// A significance cell is empty or not a number.
    #[error("significance of '{column}' is not a number: '{value}'")]
    NonNumericSignificance { column: String, value: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Parsed values violate a table invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
