//! Projection input and its preconditions

use serde::{Deserialize, Serialize};

use super::frequency::CompoundingFrequency;
use crate::error::{ProjectionError, Result};

/// Longest horizon for which a year-by-year series is built
pub const MAX_PROJECTION_YEARS: u64 = 1_000;

/// Inputs for a single compound-interest projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Initial invested amount (currency units)
    pub principal: f64,

    /// Annual interest rate in percent (10.0 means 10% p.a.); negative means decay
    pub annual_rate_percent: f64,

    /// Projection horizon in whole years
    pub years: u64,

    /// How often interest compounds within a year
    pub frequency: CompoundingFrequency,
}

impl ProjectionInput {
    /// Build a validated input.
    ///
    /// `years` is taken as a signed integer so negative horizons coming from
    /// callers are rejected with `InvalidArgument` instead of wrapping.
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        years: i64,
        frequency: CompoundingFrequency,
    ) -> Result<Self> {
        if years < 0 {
            return Err(ProjectionError::invalid(
                "years",
                format!("must not be negative (got {})", years),
            ));
        }
        let years = years.unsigned_abs();

        let input = Self {
            principal,
            annual_rate_percent,
            years,
            frequency,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the preconditions on an input whose fields were set directly
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() {
            return Err(ProjectionError::invalid(
                "principal",
                format!("must be a finite number (got {})", self.principal),
            ));
        }
        if self.principal < 0.0 {
            return Err(ProjectionError::invalid(
                "principal",
                format!("must not be negative (got {})", self.principal),
            ));
        }
        if !self.annual_rate_percent.is_finite() {
            return Err(ProjectionError::invalid(
                "annual_rate_percent",
                format!("must be a finite number (got {})", self.annual_rate_percent),
            ));
        }
        Ok(())
    }
}

impl Default for ProjectionInput {
    /// Starting values of the simulation form
    fn default() -> Self {
        Self {
            principal: 10_000.0,
            annual_rate_percent: 10.0,
            years: 5,
            frequency: CompoundingFrequency::Yearly,
        }
    }
}
