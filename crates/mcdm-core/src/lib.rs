//! Multi-criteria ranking core.
//!
//! The data flow is: significance resolution (column reorder) → Pareto
//! reduction (row subset removed) → lexicographic ranking (tiers of the
//! remaining rows). Every function takes its table by reference and returns
//! new values.

mod column;
pub mod error;
pub mod lexicographic;
pub mod pareto;
pub mod pipeline;
pub mod significance;

pub use error::{RankingError, Result};
pub use lexicographic::{best_subset, lexicographic_order, lexicographic_tiers};
pub use pareto::{ParetoReduction, column_weight, dominance_scores, pareto_reduce, pareto_set};
pub use pipeline::{
    LexicographicStep, ParetoStep, RankingPipeline, RankingState, RankingStep, SignificanceStep,
    build_default_pipeline, rank_alternatives,
};
pub use significance::{order_by_significance, resolve_significance};
