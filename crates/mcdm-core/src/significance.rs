//! Significance Resolver: turns the metadata row into a criterion order.

use mcdm_model::{CriterionId, CriterionTable, RankDirection, SignificanceMap};

use crate::error::{RankingError, Result};

/// Builds the significance map from one rank value per criterion.
///
/// `ranks[i]` is the rank of `criteria[i]`. The values must be whole numbers
/// forming a permutation of `1..=criteria.len()`.
pub fn resolve_significance(criteria: &[CriterionId], ranks: &[f64]) -> Result<SignificanceMap> {
    if criteria.len() != ranks.len() {
        return Err(RankingError::SignificanceLength {
            expected: criteria.len(),
            actual: ranks.len(),
        });
    }
    let count = criteria.len();
    let mut pairs = Vec::with_capacity(count);
    for (criterion, &value) in criteria.iter().zip(ranks) {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(RankingError::NonIntegerRank {
                criterion: criterion.clone(),
                value,
            });
        }
        if value < 1.0 || value > count as f64 {
            return Err(RankingError::RankOutOfRange {
                criterion: criterion.clone(),
                value,
                count,
            });
        }
        pairs.push((value as u32, criterion.clone()));
    }
    SignificanceMap::new(pairs).map_err(RankingError::InvalidSignificance)
}

/// Reorders `table` so its columns run from most to least significant.
pub fn order_by_significance(
    table: &CriterionTable,
    significance: &SignificanceMap,
    direction: RankDirection,
) -> Result<CriterionTable> {
    let order = significance.ordered_by(direction);
    if order.len() != table.criterion_count() {
        return Err(RankingError::SignificanceLength {
            expected: table.criterion_count(),
            actual: order.len(),
        });
    }
    Ok(table.select_columns(&order)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcdm_model::{AlternativeId, AlternativeRow, ModelError};

    fn ids(names: &[&str]) -> Vec<CriterionId> {
        names.iter().map(|n| CriterionId::new(*n).unwrap()).collect()
    }

    #[test]
    fn resolves_permutation() {
        let map = resolve_significance(&ids(&["Price", "Memory", "Power"]), &[2.0, 3.0, 1.0])
            .unwrap();
        assert_eq!(map.ordered(), ids(&["Power", "Price", "Memory"]));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = resolve_significance(&ids(&["A", "B"]), &[1.0]).unwrap_err();
        assert_eq!(
            err,
            RankingError::SignificanceLength {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_fractional_rank() {
        let err = resolve_significance(&ids(&["A", "B"]), &[1.0, 1.5]).unwrap_err();
        assert!(matches!(err, RankingError::NonIntegerRank { .. }));
    }

    #[test]
    fn rejects_out_of_range_rank() {
        let err = resolve_significance(&ids(&["A", "B"]), &[1.0, 3.0]).unwrap_err();
        assert!(matches!(err, RankingError::RankOutOfRange { count: 2, .. }));

        let err = resolve_significance(&ids(&["A"]), &[0.0]).unwrap_err();
        assert!(matches!(err, RankingError::RankOutOfRange { .. }));
    }

    #[test]
    fn rejects_duplicate_rank() {
        let err = resolve_significance(&ids(&["A", "B", "C"]), &[1.0, 2.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            RankingError::InvalidSignificance(ModelError::DuplicateRank(2))
        );
    }

    #[test]
    fn reorders_table_columns() {
        let table = CriterionTable::new(
            ids(&["Price", "Memory"]),
            vec![AlternativeRow::new(AlternativeId::new(1), vec![5.0, 16.0])],
        )
        .unwrap();
        let map = resolve_significance(table.criteria(), &[2.0, 1.0]).unwrap();

        let ordered = order_by_significance(&table, &map, RankDirection::LowestFirst).unwrap();
        assert_eq!(ordered.criteria(), ids(&["Memory", "Price"]).as_slice());
        assert_eq!(ordered.rows()[0].values, vec![16.0, 5.0]);

        let reversed = order_by_significance(&table, &map, RankDirection::HighestFirst).unwrap();
        assert_eq!(reversed.criteria(), ids(&["Price", "Memory"]).as_slice());
    }
}
