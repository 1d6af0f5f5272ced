//! Dominance Filter: weighted is-best scoring and below-mean pruning.
//!
//! Each column contributes a linear weight, `C` for the most significant
//! column down to `1` for the least significant. An alternative scores the
//! weight of every column where it holds the maximum value. Alternatives
//! whose score is at or below the mean score are discarded.
//!
//! The decision is made on the integer weight sums (`sum * n <= total`), so a
//! tie with the mean is detected exactly. The configured scale only affects
//! the reported scores.

use mcdm_model::{AlternativeId, CriterionTable, DominanceScore, ParetoSummary};
use tracing::{debug, info};

use crate::column::is_max;
use crate::error::{RankingError, Result};

/// Result of [`pareto_reduce`]: the summary and the surviving rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoReduction {
    pub summary: ParetoSummary,
    pub survivors: CriterionTable,
}

/// Weight of the column at `index` in a table of `count` significance-ordered columns.
pub fn column_weight(count: usize, index: usize) -> u64 {
    count.saturating_sub(index) as u64
}

/// Computes the weighted is-best score of every alternative, in row order.
///
/// Columns must already be ordered from most to least significant.
pub fn dominance_scores(table: &CriterionTable, scale: f64) -> Result<Vec<DominanceScore>> {
    validate_scale(scale)?;
    let count = table.criterion_count();
    let mut sums = vec![0u64; table.alternative_count()];
    for column in 0..count {
        let weight = column_weight(count, column);
        for (sum, best) in sums.iter_mut().zip(is_max(table, column)) {
            if best {
                *sum += weight;
            }
        }
    }
    Ok(table
        .rows()
        .iter()
        .zip(sums)
        .map(|(row, weight_sum)| DominanceScore {
            alternative: row.id,
            weight_sum,
            score: weight_sum as f64 / scale,
        })
        .collect())
}

/// Discards every alternative scoring at or below the mean.
///
/// When all scores are equal every alternative is discarded. An empty table
/// yields an empty summary with no mean.
pub fn pareto_reduce(table: &CriterionTable, scale: f64) -> Result<ParetoReduction> {
    let scores = dominance_scores(table, scale)?;
    if scores.is_empty() {
        return Ok(ParetoReduction {
            summary: ParetoSummary {
                scores,
                mean: None,
                discarded: Vec::new(),
                survivors: Vec::new(),
            },
            survivors: table.clone(),
        });
    }

    let n = scores.len() as u128;
    let total: u128 = scores.iter().map(|s| u128::from(s.weight_sum)).sum();
    let mean = total as f64 / n as f64 / scale;

    let mut discarded = Vec::new();
    let mut kept = Vec::new();
    for score in &scores {
        if u128::from(score.weight_sum) * n <= total {
            discarded.push(score.alternative);
        } else {
            kept.push(score.alternative);
        }
    }
    for score in &scores {
        debug!(
            alternative = %score.alternative,
            score = score.score,
            kept = kept.contains(&score.alternative),
            "dominance score"
        );
    }
    info!(
        alternatives = scores.len(),
        kept = kept.len(),
        discarded = discarded.len(),
        mean,
        "pareto reduction complete"
    );

    let survivors = table.retain_rows(&kept);
    Ok(ParetoReduction {
        summary: ParetoSummary {
            scores,
            mean: Some(mean),
            discarded,
            survivors: kept,
        },
        survivors,
    })
}

/// Ids of the alternatives [`pareto_reduce`] would discard.
pub fn pareto_set(table: &CriterionTable, scale: f64) -> Result<Vec<AlternativeId>> {
    Ok(pareto_reduce(table, scale)?.summary.discarded)
}

fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(RankingError::InvalidScale(scale))
    }
}
