//! Machine-readable run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mcdm_model::{CriterionId, NameTable, ParetoSummary, RankingOptions, RankingOutcome};
use serde::Serialize;
use tracing::info;

use crate::csv::create_parent;
use crate::error::{ReportError, Result};
use crate::rows::{ResultRow, result_rows};

/// Everything needed to audit one ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport<'a> {
    pub options: RankingOptions,
    pub criteria_order: &'a [CriterionId],
    pub pareto: &'a ParetoSummary,
    pub ranked: Vec<ResultRow>,
}

impl<'a> RankingReport<'a> {
    pub fn new(outcome: &'a RankingOutcome, names: &NameTable, options: RankingOptions) -> Self {
        Self {
            options,
            criteria_order: &outcome.criteria_order,
            pareto: &outcome.pareto,
            ranked: result_rows(outcome, names),
        }
    }
}

/// Writes the run report as pretty-printed JSON.
pub fn write_json_report(path: &Path, report: &RankingReport<'_>) -> Result<()> {
    create_parent(path)?;
    let file = File::create(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "json report written");
    Ok(())
}
