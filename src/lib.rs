//! Growth Projector - compound-interest projections for investment simulations
//!
//! This library provides:
//! - Future value of a principal under yearly, quarterly or monthly compounding
//! - Year-by-year projection series for growth charts
//! - Summary figures (total gains, growth multiple) and growth-curve samples
//! - Batch and frequency-comparison runs
//! - JSON and CSV rendering of results

pub mod error;
pub mod simulation;
pub mod scenario;
pub mod output;

// Re-export commonly used types
pub use error::ProjectionError;
pub use simulation::{
    build_projection_series, compute_future_value, CompoundingFrequency, ProjectionInput,
    ProjectionPoint, ProjectionResult, ProjectionSummary,
};
pub use scenario::ScenarioRunner;
