//! Ranking pipeline with ordered step execution.
//!
//! Each step implements the `RankingStep` trait and is executed in order.
//!
//! # Standard Pipeline Order
//!
//! 1. **SignificanceStep** - Resolve the significance row and reorder columns
//! 2. **ParetoStep** - Discard alternatives at or below the mean dominance score
//! 3. **LexicographicStep** - Split the survivors into ranked tiers
//!
//! # Example
//!
//! ```ignore
//! use mcdm_core::pipeline::build_default_pipeline;
//!
//! let pipeline = build_default_pipeline();
//! let outcome = pipeline.execute(&table, &significance_row, &RankingOptions::default())?;
//! ```

use std::time::Instant;

use mcdm_model::{
    CriterionTable, ParetoSummary, RankedSequence, RankingOptions, RankingOutcome,
    SignificanceMap, Tier,
};
use tracing::{debug, info, info_span};

use crate::error::{RankingError, Result};
use crate::lexicographic::lexicographic_tiers;
use crate::pareto::pareto_reduce;
use crate::significance::{order_by_significance, resolve_significance};

/// A single step in the ranking pipeline.
pub trait RankingStep: Send + Sync {
    /// Execute this step, reading and updating the shared state.
    fn execute(&self, state: &mut RankingState, options: &RankingOptions) -> Result<()>;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &'static str;

    /// Whether this step should be skipped for the given options.
    ///
    /// Default implementation always runs the step.
    fn should_skip(&self, _options: &RankingOptions) -> bool {
        false
    }
}

/// Mutable state passed from step to step.
#[derive(Debug, Clone)]
pub struct RankingState {
    /// Working table; replaced, never edited, by each step.
    pub table: CriterionTable,
    /// Raw significance values, one per column of the input table.
    pub significance_row: Vec<f64>,
    pub significance: Option<SignificanceMap>,
    pub pareto: Option<ParetoSummary>,
    pub tiers: Option<Vec<Tier>>,
    /// Step execution log for debugging.
    pub executed_steps: Vec<&'static str>,
}

impl RankingState {
    pub fn new(table: CriterionTable, significance_row: Vec<f64>) -> Self {
        Self {
            table,
            significance_row,
            significance: None,
            pareto: None,
            tiers: None,
            executed_steps: Vec::new(),
        }
    }

    /// Assembles the outcome once every required step has run.
    pub fn into_outcome(self) -> Result<RankingOutcome> {
        if self.significance.is_none() {
            return Err(RankingError::StageMissing("significance"));
        }
        let tiers = self
            .tiers
            .ok_or(RankingError::StageMissing("lexicographic"))?;
        let pareto = self
            .pareto
            .unwrap_or_else(|| ParetoSummary::skipped(self.table.alternative_ids()));
        Ok(RankingOutcome {
            criteria_order: self.table.criteria().to_vec(),
            pareto,
            ranked: RankedSequence::from_tiers(&tiers),
            tiers,
            table: self.table,
        })
    }
}

/// An ordered pipeline of ranking steps.
pub struct RankingPipeline {
    steps: Vec<Box<dyn RankingStep>>,
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the end of the pipeline.
    #[must_use]
    pub fn add_step(mut self, step: Box<dyn RankingStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Remove a step by name.
    #[must_use]
    pub fn remove_step(mut self, step_name: &str) -> Self {
        self.steps.retain(|s| s.step_name() != step_name);
        self
    }

    /// Execute all steps over `table` and return the assembled outcome.
    pub fn execute(
        &self,
        table: &CriterionTable,
        significance_row: &[f64],
        options: &RankingOptions,
    ) -> Result<RankingOutcome> {
        let mut state = RankingState::new(table.clone(), significance_row.to_vec());
        self.execute_with_state(&mut state, options)?;
        state.into_outcome()
    }

    /// Execute all steps with provided state.
    pub fn execute_with_state(
        &self,
        state: &mut RankingState,
        options: &RankingOptions,
    ) -> Result<()> {
        for step in &self.steps {
            if step.should_skip(options) {
                debug!(step = step.step_name(), "step skipped");
                continue;
            }
            let span = info_span!("step", step = step.step_name());
            let _guard = span.enter();
            let start = Instant::now();
            step.execute(state, options)?;
            debug!(
                alternatives = state.table.alternative_count(),
                duration_us = start.elapsed().as_micros(),
                "step complete"
            );
            state.executed_steps.push(step.step_name());
        }
        Ok(())
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

// ============================================================================
// Standard Ranking Steps
// ============================================================================

/// Step 1: Resolve significance and order columns most significant first.
pub struct SignificanceStep;

impl RankingStep for SignificanceStep {
    fn execute(&self, state: &mut RankingState, options: &RankingOptions) -> Result<()> {
        let significance = resolve_significance(state.table.criteria(), &state.significance_row)?;
        state.table = order_by_significance(&state.table, &significance, options.direction)?;
        debug!(order = ?state.table.criteria(), "criteria ordered by significance");
        state.significance = Some(significance);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "significance"
    }
}

/// Step 2: Pareto reduction.
pub struct ParetoStep;

impl RankingStep for ParetoStep {
    fn execute(&self, state: &mut RankingState, options: &RankingOptions) -> Result<()> {
        let reduction = pareto_reduce(&state.table, options.pareto_scale)?;
        state.table = reduction.survivors;
        state.pareto = Some(reduction.summary);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "pareto"
    }

    fn should_skip(&self, options: &RankingOptions) -> bool {
        !options.pareto
    }
}

/// Step 3: Lexicographic ranking of the remaining alternatives.
pub struct LexicographicStep;

impl RankingStep for LexicographicStep {
    fn execute(&self, state: &mut RankingState, _options: &RankingOptions) -> Result<()> {
        state.tiers = Some(lexicographic_tiers(&state.table)?);
        Ok(())
    }

    fn step_name(&self) -> &'static str {
        "lexicographic"
    }
}

/// Build the standard significance → Pareto → lexicographic pipeline.
pub fn build_default_pipeline() -> RankingPipeline {
    RankingPipeline::new()
        .add_step(Box::new(SignificanceStep))
        .add_step(Box::new(ParetoStep))
        .add_step(Box::new(LexicographicStep))
}

/// Ranks the alternatives of `table` with the default pipeline.
///
/// `table` holds criterion columns in their source order and
/// `significance_row` one rank per column.
pub fn rank_alternatives(
    table: &CriterionTable,
    significance_row: &[f64],
    options: &RankingOptions,
) -> Result<RankingOutcome> {
    let span = info_span!(
        "rank",
        alternatives = table.alternative_count(),
        criteria = table.criterion_count()
    );
    let _guard = span.enter();
    let outcome = build_default_pipeline().execute(table, significance_row, options)?;
    info!(
        ranked = outcome.ranked.len(),
        tiers = outcome.tiers.len(),
        discarded = outcome.pareto.discarded.len(),
        "ranking complete"
    );
    Ok(outcome)
}
