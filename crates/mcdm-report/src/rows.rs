//! Projection of a ranking outcome onto labelled result rows.

use std::collections::BTreeMap;

use mcdm_model::{AlternativeId, NameTable, RankingOutcome};
use serde::Serialize;

/// One ranked alternative with its label and criterion values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// 1-based position in the ranked sequence.
    pub position: usize,
    pub tier: usize,
    pub id: AlternativeId,
    pub name: String,
    /// Values in `RankingOutcome::criteria_order`.
    pub values: Vec<f64>,
}

/// Builds the result rows in ranked order.
pub fn result_rows(outcome: &RankingOutcome, names: &NameTable) -> Vec<ResultRow> {
    let values: BTreeMap<AlternativeId, &[f64]> = outcome
        .table
        .rows()
        .iter()
        .map(|row| (row.id, row.values.as_slice()))
        .collect();

    outcome
        .tiers
        .iter()
        .flat_map(|tier| tier.alternatives.iter().map(move |&id| (tier.position, id)))
        .enumerate()
        .map(|(idx, (tier, id))| ResultRow {
            position: idx + 1,
            tier,
            id,
            name: names.display_name(id),
            values: values.get(&id).map(|&v| v.to_vec()).unwrap_or_default(),
        })
        .collect()
}
