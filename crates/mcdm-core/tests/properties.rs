//! Property tests for selection and ranking invariants.

use std::collections::BTreeSet;

use mcdm_core::{
    best_subset, lexicographic_order, lexicographic_tiers, pareto_reduce, rank_alternatives,
};
use mcdm_model::{
    AlternativeId, AlternativeRow, CriterionId, CriterionTable, DEFAULT_PARETO_SCALE,
    RankingOptions,
};
use proptest::prelude::*;

/// Tables with up to 12 rows and 1..=4 columns of small integers, so ties are common.
fn arb_table() -> impl Strategy<Value = CriterionTable> {
    (1usize..=4).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(0u8..4, width), 0..12).prop_map(
            move |rows| {
                let criteria = (0..width)
                    .map(|i| CriterionId::new(format!("c{i}")).expect("criterion"))
                    .collect();
                let rows = rows
                    .into_iter()
                    .enumerate()
                    .map(|(idx, values)| {
                        AlternativeRow::new(
                            AlternativeId::from_row_index(idx),
                            values.into_iter().map(f64::from).collect(),
                        )
                    })
                    .collect();
                CriterionTable::new(criteria, rows).expect("table")
            },
        )
    })
}

fn id_set(ids: &[AlternativeId]) -> BTreeSet<AlternativeId> {
    ids.iter().copied().collect()
}

proptest! {
    #[test]
    fn ranking_is_a_permutation_of_rows(table in arb_table()) {
        let ranked = lexicographic_order(&table).expect("rank");
        prop_assert_eq!(ranked.len(), table.alternative_count());
        prop_assert_eq!(id_set(ranked.as_slice()), id_set(&table.alternative_ids()));
    }

    #[test]
    fn reselecting_a_tier_returns_the_whole_tier(table in arb_table()) {
        for tier in lexicographic_tiers(&table).expect("tiers") {
            let sub = table.retain_rows(&tier.alternatives);
            prop_assert_eq!(best_subset(&sub, 0), tier.alternatives.clone());
        }
    }

    #[test]
    fn pareto_survivors_ignore_row_order(table in arb_table()) {
        let mut reversed_rows = table.rows().to_vec();
        reversed_rows.reverse();
        let reversed = CriterionTable::new(table.criteria().to_vec(), reversed_rows).expect("table");

        let a = pareto_reduce(&table, DEFAULT_PARETO_SCALE).expect("pareto");
        let b = pareto_reduce(&reversed, DEFAULT_PARETO_SCALE).expect("pareto");
        prop_assert_eq!(id_set(&a.summary.survivors), id_set(&b.summary.survivors));
    }

    #[test]
    fn ranked_sequence_matches_pareto_survivors(table in arb_table()) {
        let significance: Vec<f64> = (1..=table.criterion_count()).map(|r| r as f64).collect();
        let outcome = rank_alternatives(&table, &significance, &RankingOptions::default())
            .expect("rank");
        prop_assert_eq!(
            id_set(outcome.ranked.as_slice()),
            id_set(&outcome.pareto.survivors)
        );
        let discarded = id_set(&outcome.pareto.discarded);
        prop_assert!(outcome.ranked.as_slice().iter().all(|id| !discarded.contains(id)));
    }

    #[test]
    fn tiers_are_strictly_ordered(table in arb_table()) {
        let tiers = lexicographic_tiers(&table).expect("tiers");
        for pair in tiers.windows(2) {
            let best = table.rows().iter().find(|r| r.id == pair[0].alternatives[0]).expect("row");
            let next = table.rows().iter().find(|r| r.id == pair[1].alternatives[0]).expect("row");
            let ordering = best
                .values
                .iter()
                .zip(&next.values)
                .map(|(a, b)| a.partial_cmp(b).expect("finite"))
                .find(|o| o.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal);
            prop_assert_eq!(ordering, std::cmp::Ordering::Greater);
        }
    }
}
