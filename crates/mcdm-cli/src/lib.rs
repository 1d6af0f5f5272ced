//! CLI library components for the ranking tool.

pub mod logging;
pub mod types;
pub mod workflow;
