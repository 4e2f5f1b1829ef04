//! Compound-interest future value
//!
//! `FV = P * (1 + r/n)^(n*t)` with `r` the annual rate as a decimal and `n`
//! the compounding periods per year. Values keep full precision here;
//! rounding happens only when a series is built for display.

use super::frequency::CompoundingFrequency;
use super::input::ProjectionInput;
use crate::error::{ProjectionError, Result};

/// Future value of `principal` after `years` of compounding.
///
/// Returns `principal` unchanged for a zero horizon or a zero rate, and `0`
/// for a zero principal.
pub fn compute_future_value(
    principal: f64,
    annual_rate_percent: f64,
    years: i64,
    frequency: CompoundingFrequency,
) -> Result<f64> {
    ProjectionInput::new(principal, annual_rate_percent, years, frequency)?.future_value()
}

impl ProjectionInput {
    /// Future value at the end of the projection horizon
    pub fn future_value(&self) -> Result<f64> {
        self.future_value_at(self.years as f64)
    }

    /// Future value after `years`, which may be fractional.
    pub fn future_value_at(&self, years: f64) -> Result<f64> {
        self.validate()?;
        if !years.is_finite() || years < 0.0 {
            return Err(ProjectionError::invalid(
                "years",
                format!("must be a non-negative finite number (got {})", years),
            ));
        }

        let value = compound(self.principal, self.annual_rate_percent, self.frequency, years);
        if !value.is_finite() {
            return Err(ProjectionError::invalid(
                "annual_rate_percent",
                format!(
                    "{}% compounded {} over {} years does not produce a finite value",
                    self.annual_rate_percent, self.frequency, years
                ),
            ));
        }
        Ok(value)
    }
}

fn compound(principal: f64, annual_rate_percent: f64, frequency: CompoundingFrequency, years: f64) -> f64 {
    if principal == 0.0 {
        return 0.0;
    }
    if years == 0.0 || annual_rate_percent == 0.0 {
        return principal;
    }

    let n = f64::from(frequency.periods_per_year());
    let r = annual_rate_percent / 100.0;
    principal * (1.0 + r / n).powf(n * years)
}
