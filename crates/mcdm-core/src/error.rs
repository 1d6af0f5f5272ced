//! Error types for ranking computations.

use thiserror::Error;

use mcdm_model::{CriterionId, ModelError};

/// Errors that abort a ranking run.
#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    // === Significance Errors ===
    /// The metadata row does not cover every criterion exactly once.
    #[error("significance row has {actual} values for {expected} criteria")]
    SignificanceLength { expected: usize, actual: usize },

    /// A significance value is not a whole number.
    #[error("significance of '{criterion}' is not a whole number: {value}")]
    NonIntegerRank { criterion: CriterionId, value: f64 },

    /// A significance value lies outside `1..=count`.
    #[error("significance of '{criterion}' is {value}, expected 1..={count}")]
    RankOutOfRange {
        criterion: CriterionId,
        value: f64,
        count: usize,
    },

    /// The ranks are in range but do not form a permutation.
    #[error("invalid significance ranks: {0}")]
    InvalidSignificance(#[source] ModelError),

    // === Configuration Errors ===
    /// Pareto scale must be positive and finite.
    #[error("pareto scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    // === Computation Errors ===
    /// Best-subset selection produced nothing for a non-empty table.
    #[error("best-subset selection returned no alternatives out of {remaining}")]
    EmptyTier { remaining: usize },

    /// A pipeline stage required by the outcome was skipped.
    #[error("ranking stage '{0}' did not run")]
    StageMissing(&'static str),

    /// Table construction or lookup failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ranking operations.
pub type Result<T> = std::result::Result<T, RankingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankingError::SignificanceLength {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "significance row has 2 values for 3 criteria"
        );
    }

    #[test]
    fn test_error_from_model() {
        let err: RankingError = ModelError::DuplicateRank(2).into();
        assert!(matches!(err, RankingError::Model(ModelError::DuplicateRank(2))));
    }
}
