//! Results of a ranking run.

use serde::{Deserialize, Serialize};

use crate::{AlternativeId, CriterionId, CriterionTable};

/// One round of lexicographic selection: mutually tied alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// 1-based position of the tier, best first.
    pub position: usize,
    pub alternatives: Vec<AlternativeId>,
}

impl Tier {
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn is_tie(&self) -> bool {
        self.alternatives.len() > 1
    }
}

/// Alternatives in preference order, most preferred first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedSequence(Vec<AlternativeId>);

impl RankedSequence {
    pub fn from_tiers(tiers: &[Tier]) -> Self {
        Self(
            tiers
                .iter()
                .flat_map(|tier| tier.alternatives.iter().copied())
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[AlternativeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<AlternativeId> {
        self.0
    }
}

/// Weighted is-best score of one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominanceScore {
    pub alternative: AlternativeId,
    /// Sum of integer weights of the columns where the alternative is maximal.
    pub weight_sum: u64,
    /// `weight_sum` divided by the configured scale.
    pub score: f64,
}

/// Outcome of the Pareto reduction stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSummary {
    pub scores: Vec<DominanceScore>,
    /// Mean of `scores[..].score`; `None` for an empty table.
    pub mean: Option<f64>,
    pub discarded: Vec<AlternativeId>,
    pub survivors: Vec<AlternativeId>,
}

impl ParetoSummary {
    /// Summary for a run where the reduction was not applied.
    pub fn skipped(survivors: Vec<AlternativeId>) -> Self {
        Self {
            scores: Vec::new(),
            mean: None,
            discarded: Vec::new(),
            survivors,
        }
    }

    pub fn was_discarded(&self, id: AlternativeId) -> bool {
        self.discarded.contains(&id)
    }
}

/// Everything produced by one end-to-end ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Criteria from most to least significant.
    pub criteria_order: Vec<CriterionId>,
    pub pareto: ParetoSummary,
    /// Pareto survivors, columns in `criteria_order`.
    pub table: CriterionTable,
    pub tiers: Vec<Tier>,
    pub ranked: RankedSequence,
}

impl RankingOutcome {
    /// Tier position of `id`, if it was ranked.
    pub fn tier_of(&self, id: AlternativeId) -> Option<usize> {
        self.tiers
            .iter()
            .find(|tier| tier.alternatives.contains(&id))
            .map(|tier| tier.position)
    }
}
