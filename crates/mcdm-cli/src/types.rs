use std::path::PathBuf;

use mcdm_model::{
    CriterionId, NameTable, ParetoSummary, RankingOptions, RankingOutcome, SignificanceMap,
};

/// Result of `mcdm rank`.
#[derive(Debug)]
pub struct RankResult {
    pub input: PathBuf,
    /// Written result table; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub json_report: Option<PathBuf>,
    pub name_column: String,
    pub names: NameTable,
    pub options: RankingOptions,
    pub outcome: RankingOutcome,
    pub alternatives: usize,
}

/// Result of `mcdm scores`.
#[derive(Debug)]
pub struct ScoresResult {
    pub input: PathBuf,
    pub names: NameTable,
    pub significance: SignificanceMap,
    /// Criteria from most to least significant.
    pub criteria_order: Vec<CriterionId>,
    pub pareto: ParetoSummary,
}
