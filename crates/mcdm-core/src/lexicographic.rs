//! Best-Subset Selector and Lexicographic Ranker.

use mcdm_model::{AlternativeId, AlternativeRow, CriterionTable, RankedSequence, Tier};
use tracing::debug;

use crate::column::column_max;
use crate::error::{RankingError, Result};

/// Narrows `table` to its lexicographically best rows.
///
/// Walks the columns from `start_column` onwards (columns ordered most
/// significant first), keeping only rows that hold the maximum of the rows
/// still kept. Stops as soon as one or no row remains. Returns the survivors'
/// ids in table row order; more than one id means a complete tie.
pub fn best_subset(table: &CriterionTable, start_column: usize) -> Vec<AlternativeId> {
    let mut remaining: Vec<&AlternativeRow> = table.rows().iter().collect();
    for column in start_column..table.criterion_count() {
        let Some(max) = column_max(remaining.iter().copied(), column) else {
            break;
        };
        remaining.retain(|row| row.values[column] == max);
        if remaining.len() <= 1 {
            break;
        }
    }
    remaining.into_iter().map(|row| row.id).collect()
}

/// Splits `table` into tiers of mutually tied alternatives, best first.
pub fn lexicographic_tiers(table: &CriterionTable) -> Result<Vec<Tier>> {
    let mut remaining = table.clone();
    let mut tiers = Vec::new();
    while !remaining.is_empty() {
        let best = best_subset(&remaining, 0);
        if best.is_empty() {
            return Err(RankingError::EmptyTier {
                remaining: remaining.alternative_count(),
            });
        }
        remaining = remaining.without_rows(&best);
        let tier = Tier {
            position: tiers.len() + 1,
            alternatives: best,
        };
        debug!(
            tier = tier.position,
            size = tier.len(),
            remaining = remaining.alternative_count(),
            "tier selected"
        );
        tiers.push(tier);
    }
    Ok(tiers)
}

/// Orders every alternative of `table` from most to least preferred.
pub fn lexicographic_order(table: &CriterionTable) -> Result<RankedSequence> {
    Ok(RankedSequence::from_tiers(&lexicographic_tiers(table)?))
}
