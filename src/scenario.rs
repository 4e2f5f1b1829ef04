//! Scenario runner for batch projections
//!
//! Holds a base input, then runs variations of it (other rates, other
//! compounding frequencies, or arbitrary input lists) in parallel.

use rayon::prelude::*;

use crate::error::Result;
use crate::simulation::{CompoundingFrequency, ProjectionInput, ProjectionResult};

/// Runner for families of projections sharing a base input
///
/// # Example
/// ```
/// use growth_projector::ScenarioRunner;
///
/// let runner = ScenarioRunner::new();
/// for (freq, result) in runner.compare_frequencies().unwrap() {
///     println!("{}: {:.2}", freq, result.final_value);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_input: ProjectionInput,
}

impl ScenarioRunner {
    /// Create runner around the default simulation input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner around a specific base input
    pub fn with_input(input: ProjectionInput) -> Self {
        Self { base_input: input }
    }

    /// Project the base input
    pub fn run(&self) -> Result<ProjectionResult> {
        self.base_input.project()
    }

    /// Project many inputs; results come back in input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ProjectionResult>> {
        inputs.par_iter().map(ProjectionInput::project).collect()
    }

    /// Project the base input once per annual rate
    pub fn run_rates(&self, annual_rates_percent: &[f64]) -> Vec<Result<ProjectionResult>> {
        let inputs: Vec<ProjectionInput> = annual_rates_percent
            .iter()
            .map(|&rate| ProjectionInput {
                annual_rate_percent: rate,
                ..self.base_input
            })
            .collect();
        self.run_batch(&inputs)
    }

    /// Project the base input under every compounding frequency,
    /// least frequent first
    pub fn compare_frequencies(&self) -> Result<Vec<(CompoundingFrequency, ProjectionResult)>> {
        CompoundingFrequency::ALL
            .par_iter()
            .map(|&frequency| {
                let input = ProjectionInput {
                    frequency,
                    ..self.base_input
                };
                input.project().map(|result| (frequency, result))
            })
            .collect()
    }

    /// Get reference to the base input
    pub fn input(&self) -> &ProjectionInput {
        &self.base_input
    }

    /// Get mutable reference to the base input for customization
    pub fn input_mut(&mut self) -> &mut ProjectionInput {
        &mut self.base_input
    }
}
