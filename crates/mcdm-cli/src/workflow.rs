//! Stage functions behind the CLI commands.
//!
//! Each stage runs inside its own span and logs its duration, so a run
//! with `-vv` shows where time goes.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use mcdm_core::{RankingState, build_default_pipeline, rank_alternatives};
use mcdm_ingest::{AlternativeSheet, IngestOptions, load_alternative_sheet};
use mcdm_model::{RankingOptions, RankingOutcome};
use mcdm_report::{
    RankingReport, ReportOptions, default_output_path, write_json_report, write_result_csv,
};
use tracing::{info, info_span};

use crate::types::{RankResult, ScoresResult};

/// Everything `rank_file` needs besides the input path.
#[derive(Debug, Clone, Default)]
pub struct RankConfig {
    pub ingest: IngestOptions,
    pub ranking: RankingOptions,
    pub output: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
    pub dry_run: bool,
}

/// Stage 1: load and split the sheet.
pub fn ingest(input: &Path, options: &IngestOptions) -> Result<AlternativeSheet> {
    let span = info_span!("ingest", input = %input.display());
    let start = Instant::now();
    let sheet = span
        .in_scope(|| load_alternative_sheet(input, options))
        .with_context(|| format!("load {}", input.display()))?;
    info!(
        alternatives = sheet.table.alternative_count(),
        criteria = sheet.table.criterion_count(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(sheet)
}

/// Stage 2: significance, Pareto reduction and lexicographic ranking.
pub fn rank(sheet: &AlternativeSheet, options: &RankingOptions) -> Result<RankingOutcome> {
    let start = Instant::now();
    let outcome = rank_alternatives(&sheet.table, &sheet.significance_row, options)
        .context("rank alternatives")?;
    info!(
        duration_ms = start.elapsed().as_millis(),
        "ranking stage complete"
    );
    Ok(outcome)
}

/// Loads, ranks and (unless dry-running) writes the result of `input`.
pub fn rank_file(input: &Path, config: &RankConfig) -> Result<RankResult> {
    for target in config.output.iter().chain(&config.json_report) {
        ensure!(
            !same_file(input, target),
            "output {} would overwrite the input sheet",
            target.display()
        );
    }
    let sheet = ingest(input, &config.ingest)?;
    let outcome = rank(&sheet, &config.ranking)?;
    let names = sheet.names.retain(outcome.ranked.as_slice());

    let mut output = None;
    let mut json_report = None;
    if config.dry_run {
        info!("dry run, no files written");
    } else {
        let span = info_span!("output");
        let _guard = span.enter();
        let path = config
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));
        let report_options = ReportOptions {
            name_header: sheet.name_column.clone(),
            ..ReportOptions::default()
        };
        write_result_csv(&path, &outcome, &names, &report_options)
            .with_context(|| format!("write {}", path.display()))?;
        output = Some(path);

        if let Some(path) = &config.json_report {
            let report = RankingReport::new(&outcome, &sheet.names, config.ranking);
            write_json_report(path, &report)
                .with_context(|| format!("write {}", path.display()))?;
            json_report = Some(path.clone());
        }
    }

    Ok(RankResult {
        input: input.to_path_buf(),
        output,
        json_report,
        name_column: sheet.name_column,
        names,
        options: config.ranking,
        alternatives: sheet.table.alternative_count(),
        outcome,
    })
}

/// Whether `a` and `b` name the same file. Paths that do not exist yet are
/// compared as given.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Loads `input` and runs the pipeline up to the Pareto reduction.
pub fn score_file(
    input: &Path,
    ingest_options: &IngestOptions,
    options: &RankingOptions,
) -> Result<ScoresResult> {
    let sheet = ingest(input, ingest_options)?;
    let pipeline = build_default_pipeline().remove_step("lexicographic");
    let mut state = RankingState::new(sheet.table, sheet.significance_row);
    pipeline
        .execute_with_state(&mut state, &options.with_pareto(true))
        .context("score alternatives")?;

    let significance = state
        .significance
        .context("significance step did not run")?;
    let pareto = state.pareto.context("pareto step did not run")?;
    Ok(ScoresResult {
        input: input.to_path_buf(),
        names: sheet.names,
        significance,
        criteria_order: state.table.criteria().to_vec(),
        pareto,
    })
}
