//! Generation-driven simulation: stepping, reports and cumulative stats

pub mod engine;
pub mod report;
pub mod stats;

pub use engine::{EngineState, GenerationEngine, DEFAULT_PARALLEL_THRESHOLD};
pub use report::{ClassifiedBeing, FormCount, GenerationReport};
pub use stats::{CumulativeStats, FormIncidence, IncidenceReport, StatsAggregator};
