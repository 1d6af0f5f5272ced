//! Output of ranking results.
//!
//! - **CSV**: ranked alternatives with their labels and criterion values,
//!   columns ordered by significance
//! - **JSON**: the full run report, including Pareto scores and options

mod csv;
mod error;
mod json;
mod rows;

pub use csv::{
    DEFAULT_NAME_HEADER, ReportOptions, default_output_path, result_frame, write_result_csv,
};
pub use error::{ReportError, Result};
pub use json::{RankingReport, write_json_report};
pub use rows::{ResultRow, result_rows};
