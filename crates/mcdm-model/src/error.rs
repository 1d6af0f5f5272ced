use thiserror::Error;

use crate::{AlternativeId, CriterionId};

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("criterion label must not be empty")]
    EmptyCriterion,
    #[error("duplicate criterion '{0}'")]
    DuplicateCriterion(CriterionId),
    #[error("duplicate alternative {0}")]
    DuplicateAlternative(AlternativeId),
    #[error("alternative {id} has {actual} values, expected {expected}")]
    RowWidth {
        id: AlternativeId,
        expected: usize,
        actual: usize,
    },
    #[error("alternative {id} has non-finite value {value} for '{criterion}'")]
    NonFiniteValue {
        id: AlternativeId,
        criterion: CriterionId,
        value: f64,
    },
    #[error("unknown criterion '{0}'")]
    UnknownCriterion(CriterionId),
    #[error("significance rank {rank} is outside 1..={count}")]
    RankOutOfRange { rank: u32, count: usize },
    #[error("significance rank {0} is assigned more than once")]
    DuplicateRank(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
