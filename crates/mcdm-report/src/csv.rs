//! CSV result table.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use mcdm_model::{NameTable, RankingOutcome};
use polars::prelude::*;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::rows::{ResultRow, result_rows};

/// Header used for the name column when none is configured.
pub const DEFAULT_NAME_HEADER: &str = "Alternative";

/// Output options for the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Header of the name column; ingest passes the sheet's own header.
    pub name_header: String,
    /// Whether to emit the `Position` and `Tier` columns.
    pub include_rank_columns: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            name_header: DEFAULT_NAME_HEADER.to_string(),
            include_rank_columns: true,
        }
    }
}

/// `<dir>/<stem>_result.csv` beside `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ranking".to_string());
    input.with_file_name(format!("{stem}_result.csv"))
}

/// Builds the ranked result table.
///
/// Columns: `Position`, `Tier` (optional), the name column, then one column
/// per criterion from most to least significant. Criterion labels are kept
/// verbatim; any other header that collides with one gets a numeric suffix.
pub fn result_frame(
    outcome: &RankingOutcome,
    names: &NameTable,
    options: &ReportOptions,
) -> Result<DataFrame> {
    let rows = result_rows(outcome, names);
    let mut used: BTreeSet<String> = outcome
        .criteria_order
        .iter()
        .map(|criterion| criterion.as_str().to_string())
        .collect();
    let mut columns: Vec<Column> = Vec::with_capacity(outcome.criteria_order.len() + 3);

    if options.include_rank_columns {
        let position = unique_header("Position", &mut used);
        let tier = unique_header("Tier", &mut used);
        columns.push(index_column(&position, &rows, |row| row.position));
        columns.push(index_column(&tier, &rows, |row| row.tier));
    }
    let name_header = unique_header(&options.name_header, &mut used);
    let labels: Vec<String> = rows.iter().map(|row| row.name.clone()).collect();
    columns.push(Series::new(name_header.as_str().into(), labels).into_column());

    for (idx, criterion) in outcome.criteria_order.iter().enumerate() {
        let values: Vec<f64> = rows
            .iter()
            .map(|row| row.values.get(idx).copied().unwrap_or(f64::NAN))
            .collect();
        columns.push(Series::new(criterion.as_str().into(), values).into_column());
    }

    Ok(DataFrame::new(columns)?)
}

/// `base`, or `base_1`, `base_2`, ... when already taken. Records the result in `used`.
fn unique_header(base: &str, used: &mut BTreeSet<String>) -> String {
    let mut header = base.to_string();
    let mut suffix = 1usize;
    while used.contains(&header) {
        header = format!("{base}_{suffix}");
        suffix += 1;
    }
    used.insert(header.clone());
    header
}

fn index_column(name: &str, rows: &[ResultRow], field: impl Fn(&ResultRow) -> usize) -> Column {
    let values: Vec<u64> = rows.iter().map(|row| field(row) as u64).collect();
    Series::new(name.into(), values).into_column()
}

/// Writes the ranked result table to `path` as CSV.
pub fn write_result_csv(
    path: &Path,
    outcome: &RankingOutcome,
    names: &NameTable,
    options: &ReportOptions,
) -> Result<()> {
    let mut df = result_frame(outcome, names, options)?;
    create_parent(path)?;
    let mut file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    info!(path = %path.display(), rows = df.height(), "result written");
    Ok(())
}

pub(crate) fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_header_adds_suffix_when_taken() {
        let mut used: BTreeSet<String> = ["Tier".to_string(), "Tier_1".to_string()].into();
        assert_eq!(unique_header("Tier", &mut used), "Tier_2");
        assert_eq!(unique_header("Position", &mut used), "Position");
        assert_eq!(unique_header("Position", &mut used), "Position_1");
    }

    #[test]
    fn default_output_sits_beside_input() {
        assert_eq!(
            default_output_path(Path::new("/data/cards.csv")),
            PathBuf::from("/data/cards_result.csv")
        );
        assert_eq!(
            default_output_path(Path::new("cards")),
            PathBuf::from("cards_result.csv")
        );
    }
}
