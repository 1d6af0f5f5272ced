//! Configuration options for ranking runs.

use serde::{Deserialize, Serialize};

use crate::RankDirection;

/// Divisor applied to Pareto weights when reporting scores.
pub const DEFAULT_PARETO_SCALE: f64 = 100.0;

/// Options controlling a ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingOptions {
    /// How significance ranks map to importance.
    pub direction: RankDirection,

    /// Apply the Pareto reduction before lexicographic ranking.
    pub pareto: bool,

    /// Divisor for reported Pareto scores. Only relative weights matter;
    /// the keep/discard decision is computed on the integer weights.
    pub pareto_scale: f64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            direction: RankDirection::LowestFirst,
            pareto: true,
            pareto_scale: DEFAULT_PARETO_SCALE,
        }
    }
}

impl RankingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_direction(mut self, direction: RankDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_pareto(mut self, enable: bool) -> Self {
        self.pareto = enable;
        self
    }

    #[must_use]
    pub fn with_pareto_scale(mut self, scale: f64) -> Self {
        self.pareto_scale = scale;
        self
    }
}
