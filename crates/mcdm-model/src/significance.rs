//! Ordinal significance of criteria.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CriterionId, ModelError, Result};

/// Which end of the rank scale marks the most significant criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankDirection {
    /// Rank 1 is the most significant criterion.
    #[default]
    LowestFirst,
    /// Rank C is the most significant criterion.
    HighestFirst,
}

/// Bijection between ranks `1..=C` and criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignificanceMap {
    by_rank: BTreeMap<u32, CriterionId>,
}

impl SignificanceMap {
    /// Builds the map from `(rank, criterion)` pairs.
    ///
    /// Fails unless the ranks are exactly a permutation of `1..=pairs.len()`
    /// and every criterion appears once.
    pub fn new(pairs: impl IntoIterator<Item = (u32, CriterionId)>) -> Result<Self> {
        let pairs: Vec<(u32, CriterionId)> = pairs.into_iter().collect();
        let count = pairs.len();
        let mut by_rank = BTreeMap::new();
        for (rank, criterion) in pairs {
            if rank == 0 || rank as usize > count {
                return Err(ModelError::RankOutOfRange { rank, count });
            }
            if by_rank.values().any(|existing| existing == &criterion) {
                return Err(ModelError::DuplicateCriterion(criterion));
            }
            if by_rank.insert(rank, criterion).is_some() {
                return Err(ModelError::DuplicateRank(rank));
            }
        }
        Ok(Self { by_rank })
    }

    pub fn len(&self) -> usize {
        self.by_rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }

    pub fn rank_of(&self, criterion: &CriterionId) -> Option<u32> {
        self.by_rank
            .iter()
            .find(|(_, c)| *c == criterion)
            .map(|(rank, _)| *rank)
    }

    /// Criteria from most to least significant, rank 1 first.
    pub fn ordered(&self) -> Vec<CriterionId> {
        self.ordered_by(RankDirection::LowestFirst)
    }

    /// Criteria from most to least significant under `direction`.
    pub fn ordered_by(&self, direction: RankDirection) -> Vec<CriterionId> {
        let ascending = self.by_rank.values().cloned();
        match direction {
            RankDirection::LowestFirst => ascending.collect(),
            RankDirection::HighestFirst => ascending.rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> CriterionId {
        CriterionId::new(name).unwrap()
    }

    #[test]
    fn orders_by_rank() {
        let map = SignificanceMap::new([(2, id("Speed")), (1, id("Price")), (3, id("Noise"))])
            .unwrap();
        assert_eq!(map.ordered(), vec![id("Price"), id("Speed"), id("Noise")]);
        assert_eq!(
            map.ordered_by(RankDirection::HighestFirst),
            vec![id("Noise"), id("Speed"), id("Price")]
        );
        assert_eq!(map.rank_of(&id("Speed")), Some(2));
    }

    #[test]
    fn rejects_gaps_and_duplicates() {
        let err = SignificanceMap::new([(1, id("A")), (3, id("B"))]).unwrap_err();
        assert_eq!(err, ModelError::RankOutOfRange { rank: 3, count: 2 });

        let err = SignificanceMap::new([(1, id("A")), (1, id("B"))]).unwrap_err();
        assert_eq!(err, ModelError::DuplicateRank(1));

        let err = SignificanceMap::new([(0, id("A"))]).unwrap_err();
        assert_eq!(err, ModelError::RankOutOfRange { rank: 0, count: 1 });
    }

    #[test]
    fn empty_map_is_valid() {
        let map = SignificanceMap::new(Vec::new()).unwrap();
        assert!(map.is_empty());
        assert!(map.ordered().is_empty());
    }
}
