//! Sheet ingestion for alternative ranking.
//!
//! Loads a CSV sheet whose first row names the columns, whose last row holds
//! criterion significance, and whose remaining rows are alternatives.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mcdm_ingest::{IngestOptions, load_alternative_sheet};
//!
//! let sheet = load_alternative_sheet(Path::new("cards.csv"), &IngestOptions::default())?;
//! ```

mod csv;
mod error;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_sheet_frame,
    validate_encoding,
};

// === Sheet Splitting ===
pub use sheet::{AlternativeSheet, IngestOptions, load_alternative_sheet, split_sheet};
