use anyhow::{Result, ensure};
use mcdm_cli::types::{RankResult, ScoresResult};
use mcdm_cli::workflow::{RankConfig, rank_file, score_file};
use mcdm_ingest::IngestOptions;
use mcdm_model::RankingOptions;
use tracing::info_span;

use crate::cli::{RankArgs, ScoresArgs, SheetArgs};

pub fn run_rank(args: &RankArgs) -> Result<RankResult> {
    let span = info_span!("rank_command", input = %args.sheet.input.display());
    let _guard = span.enter();
    let config = RankConfig {
        ingest: ingest_options(&args.sheet),
        ranking: ranking_options(&args.sheet)?.with_pareto(!args.no_pareto),
        output: args.output.clone(),
        json_report: args.json_report.clone(),
        dry_run: args.dry_run,
    };
    rank_file(&args.sheet.input, &config)
}

pub fn run_scores(args: &ScoresArgs) -> Result<ScoresResult> {
    let span = info_span!("scores_command", input = %args.sheet.input.display());
    let _guard = span.enter();
    score_file(
        &args.sheet.input,
        &ingest_options(&args.sheet),
        &ranking_options(&args.sheet)?,
    )
}

fn ingest_options(args: &SheetArgs) -> IngestOptions {
    IngestOptions {
        name_column: args.name_column.clone(),
    }
}

fn ranking_options(args: &SheetArgs) -> Result<RankingOptions> {
    ensure!(
        args.pareto_scale.is_finite() && args.pareto_scale > 0.0,
        "--pareto-scale must be a positive number, got {}",
        args.pareto_scale
    );
    Ok(RankingOptions::new()
        .with_direction(args.rank_direction.into())
        .with_pareto_scale(args.pareto_scale))
}
