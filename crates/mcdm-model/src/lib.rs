//! Data model for multi-criteria alternative ranking.
//!
//! The core types are [`CriterionTable`] (alternatives × criteria scores),
//! [`NameTable`] (labels keyed like the table rows) and [`SignificanceMap`]
//! (ordinal importance of criteria). A finished run is a [`RankingOutcome`].

pub mod error;
pub mod ids;
pub mod names;
pub mod options;
pub mod ranking;
pub mod significance;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{AlternativeId, CriterionId};
pub use names::NameTable;
pub use options::{DEFAULT_PARETO_SCALE, RankingOptions};
pub use ranking::{DominanceScore, ParetoSummary, RankedSequence, RankingOutcome, Tier};
pub use significance::{RankDirection, SignificanceMap};
pub use table::{AlternativeRow, CriterionTable};
