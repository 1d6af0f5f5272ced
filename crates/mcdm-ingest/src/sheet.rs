//! Splitting a raw sheet into names, criterion scores and significance.
//!
//! Sheet layout: one column holds alternative names, every other column is a
//! criterion. Each row but the last describes one alternative; the last row
//! holds the significance rank of each criterion.

use std::path::Path;

use mcdm_model::{AlternativeId, AlternativeRow, CriterionId, CriterionTable, NameTable};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::csv::read_sheet_frame;
use crate::error::{IngestError, Result};

/// How to interpret a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Column holding alternative names; the first column when unset.
    pub name_column: Option<String>,
}

impl IngestOptions {
    pub fn with_name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = Some(column.into());
        self
    }
}

/// A loaded sheet, ready for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeSheet {
    pub name_column: String,
    /// Criterion scores, columns in source order.
    pub table: CriterionTable,
    pub names: NameTable,
    /// One significance value per criterion column, in source order.
    pub significance_row: Vec<f64>,
}

impl AlternativeSheet {
    pub fn criteria(&self) -> &[CriterionId] {
        self.table.criteria()
    }
}

/// Reads and splits the sheet at `path`.
pub fn load_alternative_sheet(path: &Path, options: &IngestOptions) -> Result<AlternativeSheet> {
    let df = read_sheet_frame(path)?;
    let sheet = split_sheet(&df, options)?;
    info!(
        path = %path.display(),
        alternatives = sheet.table.alternative_count(),
        criteria = sheet.table.criterion_count(),
        "sheet loaded"
    );
    Ok(sheet)
}

/// Splits an already loaded frame.
pub fn split_sheet(df: &DataFrame, options: &IngestOptions) -> Result<AlternativeSheet> {
    let columns = string_columns(df)?;
    let name_column = match &options.name_column {
        Some(name) => name.clone(),
        None => columns
            .first()
            .map(|(name, _)| name.clone())
            .ok_or(IngestError::MissingSignificanceRow)?,
    };
    let name_index = columns
        .iter()
        .position(|(name, _)| name == &name_column)
        .ok_or_else(|| IngestError::NameColumnNotFound {
            column: name_column.clone(),
        })?;

    let criterion_columns: Vec<&(String, Vec<Option<String>>)> = columns
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != name_index)
        .map(|(_, column)| column)
        .collect();
    if criterion_columns.is_empty() {
        return Err(IngestError::NoCriteria { name_column });
    }

    let row_indices: Vec<usize> = (0..df.height())
        .filter(|&row| !is_blank_row(&columns, row))
        .collect();
    let Some((&significance_index, data_indices)) = row_indices.split_last() else {
        return Err(IngestError::MissingSignificanceRow);
    };

    let criteria = criterion_columns
        .iter()
        .map(|(name, _)| CriterionId::new(name.as_str()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let significance_row = criterion_columns
        .iter()
        .map(|(name, cells)| {
            let raw = cell(cells, significance_index);
            parse_number(raw).ok_or_else(|| IngestError::NonNumericSignificance {
                column: name.clone(),
                value: raw.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let name_cells = &columns[name_index].1;
    let mut names = NameTable::new();
    let mut rows = Vec::with_capacity(data_indices.len());
    for &row in data_indices {
        let id = AlternativeId::from_row_index(row);
        let label = cell(name_cells, row).trim();
        if !label.is_empty() {
            names.insert(id, label);
        }
        let values = criterion_columns
            .iter()
            .map(|(name, cells)| {
                let raw = cell(cells, row);
                parse_number(raw).ok_or_else(|| IngestError::NonNumericCell {
                    row: id.get() as usize,
                    column: name.clone(),
                    value: raw.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(AlternativeRow::new(id, values));
    }

    debug!(
        name_column = %name_column,
        skipped_blank = df.height() - row_indices.len(),
        "sheet split"
    );
    Ok(AlternativeSheet {
        name_column,
        table: CriterionTable::new(criteria, rows)?,
        names,
        significance_row,
    })
}

type StringColumn = (String, Vec<Option<String>>);

fn string_columns(df: &DataFrame) -> Result<Vec<StringColumn>> {
    df.get_columns()
        .iter()
        .map(|col| {
            let str_col = col.cast(&DataType::String)?;
            let values = str_col
                .str()?
                .iter()
                .map(|value| value.map(str::to_string))
                .collect();
            Ok((col.name().to_string(), values))
        })
        .collect()
}

fn cell(cells: &[Option<String>], row: usize) -> &str {
    cells.get(row).and_then(Option::as_deref).unwrap_or("")
}

fn is_blank_row(columns: &[StringColumn], row: usize) -> bool {
    columns
        .iter()
        .all(|(_, cells)| cell(cells, row).trim().is_empty())
}

/// Parses a finite number, rejecting blanks, `NaN` and infinities.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| {
                let values: Vec<String> = values.into_iter().map(str::to_string).collect();
                Series::new(name.into(), values).into_column()
            })
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn splits_names_scores_and_significance() {
        let df = frame(vec![
            ("Alternatives", vec!["A", "B", ""]),
            ("Price", vec!["10", "8.5", "2"]),
            ("Speed", vec!["1", "5", "1"]),
        ]);
        let sheet = split_sheet(&df, &IngestOptions::default()).unwrap();

        assert_eq!(sheet.name_column, "Alternatives");
        assert_eq!(sheet.significance_row, vec![2.0, 1.0]);
        assert_eq!(sheet.table.alternative_count(), 2);
        assert_eq!(sheet.table.rows()[1].values, vec![8.5, 5.0]);
        assert_eq!(sheet.names.get(AlternativeId::new(2)), Some("B"));
    }

    #[test]
    fn name_column_may_sit_anywhere() {
        let df = frame(vec![
            ("Price", vec!["10", "1"]),
            ("Label", vec!["A", "sig"]),
        ]);
        let options = IngestOptions::default().with_name_column("Label");
        let sheet = split_sheet(&df, &options).unwrap();
        assert_eq!(sheet.criteria()[0].as_str(), "Price");
        assert_eq!(sheet.names.get(AlternativeId::new(1)), Some("A"));
    }

    #[test]
    fn unknown_name_column() {
        let df = frame(vec![("Name", vec!["A", ""]), ("Price", vec!["1", "1"])]);
        let options = IngestOptions::default().with_name_column("Title");
        let err = split_sheet(&df, &options).unwrap_err();
        assert!(matches!(err, IngestError::NameColumnNotFound { .. }));
    }

    #[test]
    fn name_column_alone_has_no_criteria() {
        let df = frame(vec![("Name", vec!["A", ""])]);
        let err = split_sheet(&df, &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::NoCriteria { .. }));
    }

    #[test]
    fn non_numeric_cell_reports_position() {
        let df = frame(vec![
            ("Name", vec!["A", "B", ""]),
            ("Price", vec!["1", "cheap", "1"]),
        ]);
        let err = split_sheet(&df, &IngestOptions::default()).unwrap_err();
        match err {
            IngestError::NonNumericCell { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Price");
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_trailing_rows_are_ignored() {
        let df = frame(vec![
            ("Name", vec!["A", "", "", ""]),
            ("Price", vec!["4", "1", "", " "]),
        ]);
        let sheet = split_sheet(&df, &IngestOptions::default()).unwrap();
        assert_eq!(sheet.significance_row, vec![1.0]);
        assert_eq!(sheet.table.alternative_count(), 1);
    }

    #[test]
    fn only_a_significance_row_gives_empty_table() {
        let df = frame(vec![("Name", vec![""]), ("Price", vec!["1"])]);
        let sheet = split_sheet(&df, &IngestOptions::default()).unwrap();
        assert!(sheet.table.is_empty());
        assert!(sheet.names.is_empty());
    }

    #[test]
    fn header_only_sheet_lacks_significance() {
        let df = frame(vec![("Name", vec![]), ("Price", vec![])]);
        let err = split_sheet(&df, &IngestOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::MissingSignificanceRow));
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }
}
