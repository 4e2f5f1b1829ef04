//! Compound-interest projection for the investment simulator

mod frequency;
mod input;
mod compound;
mod series;

pub use frequency::CompoundingFrequency;
pub use input::{ProjectionInput, MAX_PROJECTION_YEARS};
pub use compound::compute_future_value;
pub use series::{
    build_projection_series, GrowthStep, ProjectionPoint, ProjectionResult, ProjectionSummary,
    DEFAULT_GROWTH_STEPS, MAX_GROWTH_STEPS,
};
