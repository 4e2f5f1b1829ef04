//! Year-by-year projection series for growth charts

use serde::{Deserialize, Serialize};

use super::frequency::CompoundingFrequency;
use super::input::{ProjectionInput, MAX_PROJECTION_YEARS};
use crate::error::{ProjectionError, Result};

/// Number of samples in the compact growth strip shown next to the results
pub const DEFAULT_GROWTH_STEPS: usize = 5;

/// Upper bound on requested growth-curve samples
pub const MAX_GROWTH_STEPS: usize = 100;

/// Projected value at the end of one year, rounded to whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u64,
    pub value: f64,
}

/// Complete projection result
///
/// Serialize-only: the principal is not part of the wire shape, so a
/// result read back from JSON could not report its summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Value at the horizon, unrounded
    pub final_value: f64,

    /// One point per year from 0 to the horizon inclusive
    pub series: Vec<ProjectionPoint>,

    #[serde(skip)]
    principal: f64,
}

impl ProjectionResult {
    /// Initial invested amount the projection started from
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Horizon in years
    pub fn years(&self) -> u64 {
        self.series.last().map(|p| p.year).unwrap_or(0)
    }

    /// Gains and growth multiple at the horizon
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary::new(self.principal, self.final_value)
    }
}

/// Headline figures for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub principal: f64,
    pub final_value: f64,
    pub total_gains: f64,
    /// `final_value / principal`; absent for a zero principal
    pub growth_multiple: Option<f64>,
}

impl ProjectionSummary {
    pub fn new(principal: f64, final_value: f64) -> Self {
        let growth_multiple = if principal > 0.0 {
            Some(final_value / principal)
        } else {
            None
        };
        Self {
            principal,
            final_value,
            total_gains: final_value - principal,
            growth_multiple,
        }
    }
}

/// A sample of the growth curve at a possibly fractional year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthStep {
    pub year: f64,
    pub value: f64,
}

/// Build the year-by-year series for a projection.
///
/// Produces `years + 1` points; each value is computed at full precision and
/// rounded to the nearest whole unit for display. `final_value` is unrounded.
pub fn build_projection_series(
    principal: f64,
    annual_rate_percent: f64,
    years: i64,
    frequency: CompoundingFrequency,
) -> Result<ProjectionResult> {
    ProjectionInput::new(principal, annual_rate_percent, years, frequency)?.project()
}

impl ProjectionInput {
    /// Run the projection and build its display series.
    ///
    /// The series is materialised per year, so horizons above
    /// [`MAX_PROJECTION_YEARS`] are rejected here; the scalar
    /// [`future_value`](Self::future_value) has no such limit.
    pub fn project(&self) -> Result<ProjectionResult> {
        if self.years > MAX_PROJECTION_YEARS {
            return Err(ProjectionError::invalid(
                "years",
                format!(
                    "projection series is limited to {} years (got {})",
                    MAX_PROJECTION_YEARS, self.years
                ),
            ));
        }
        let final_value = self.future_value()?;

        let series = (0..=self.years)
            .map(|year| -> Result<ProjectionPoint> {
                let value = self.future_value_at(year as f64)?;
                Ok(ProjectionPoint {
                    year,
                    value: round_half_up(value),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Projected {:.2} at {}% {} over {} years: final value {:.2}",
            self.principal,
            self.annual_rate_percent,
            self.frequency,
            self.years,
            final_value
        );

        Ok(ProjectionResult {
            final_value,
            series,
            principal: self.principal,
        })
    }

    /// Sample the curve at `steps` evenly spaced points from year 0 to the
    /// horizon. Fewer than two steps yields the horizon value alone; more
    /// than [`MAX_GROWTH_STEPS`] is rejected.
    pub fn growth_steps(&self, steps: usize) -> Result<Vec<GrowthStep>> {
        if steps > MAX_GROWTH_STEPS {
            return Err(ProjectionError::invalid(
                "growth_steps",
                format!("must be at most {} (got {})", MAX_GROWTH_STEPS, steps),
            ));
        }
        let horizon = self.years as f64;
        if steps < 2 {
            return Ok(vec![GrowthStep {
                year: horizon,
                value: self.future_value()?,
            }]);
        }

        let stride = horizon / (steps - 1) as f64;
        (0..steps)
            .map(|i| -> Result<GrowthStep> {
                let year = stride * i as f64;
                Ok(GrowthStep {
                    year,
                    value: self.future_value_at(year)?,
                })
            })
            .collect()
    }
}

/// Round to the nearest whole unit, halves toward positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`)
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use CompoundingFrequency::*;

    #[test]
    fn test_series_length_and_order() {
        for years in [0_i64, 1, 5, 30] {
            let result = build_projection_series(1000.0, 6.0, years, Quarterly).unwrap();
            assert_eq!(result.series.len(), years as usize + 1);
            for (i, point) in result.series.iter().enumerate() {
                assert_eq!(point.year as usize, i);
            }
            assert_eq!(result.years() as i64, years);
        }
    }

    #[test]
    fn test_series_boundaries() {
        let result = build_projection_series(10_000.0, 10.0, 5, Yearly).unwrap();
        assert_eq!(result.series[0].value, 10_000.0);
        assert_eq!(result.series[5].value, 16_105.0);
        assert_relative_eq!(result.final_value, 16_105.10, epsilon = 1e-6);
        assert!((result.series[5].value - result.final_value).abs() <= 0.5);
    }

    #[test]
    fn test_series_values_match_yearly_growth() {
        let result = build_projection_series(10_000.0, 10.0, 5, Yearly).unwrap();
        let values: Vec<f64> = result.series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10_000.0, 11_000.0, 12_100.0, 13_310.0, 14_641.0, 16_105.0]);
    }

    #[test]
    fn test_monthly_final_value() {
        let result = build_projection_series(10_000.0, 10.0, 5, Monthly).unwrap();
        assert!((result.final_value - 16_453.09).abs() < 0.01);
        assert_eq!(result.series[5].value, 16_453.0);
    }

    #[test]
    fn test_series_non_decreasing_for_non_negative_rate() {
        for rate in [0.0, 0.5, 12.0] {
            let result = build_projection_series(777.0, rate, 25, Monthly).unwrap();
            for pair in result.series.windows(2) {
                assert!(pair[1].value >= pair[0].value);
            }
        }
    }

    #[test]
    fn test_negative_rate_series_strictly_decreasing() {
        let result = build_projection_series(10_000.0, -5.0, 3, Yearly).unwrap();
        for pair in result.series.windows(2) {
            assert!(pair[1].value < pair[0].value);
        }
        assert_relative_eq!(result.final_value, 8_573.75, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_principal_series() {
        let result = build_projection_series(0.0, 10.0, 10, Yearly).unwrap();
        assert_eq!(result.final_value, 0.0);
        assert!(result.series.iter().all(|p| p.value == 0.0));
        assert_eq!(result.summary().growth_multiple, None);
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(build_projection_series(100.0, 5.0, -1, Yearly).is_err());
        assert!(build_projection_series(100.0, f64::NAN, 1, Yearly).is_err());
    }

    #[test]
    fn test_summary() {
        let result = build_projection_series(10_000.0, 10.0, 5, Yearly).unwrap();
        let summary = result.summary();
        assert_eq!(summary.principal, 10_000.0);
        assert_relative_eq!(summary.total_gains, 6_105.10, epsilon = 1e-6);
        assert_relative_eq!(summary.growth_multiple.unwrap(), 1.61051, epsilon = 1e-9);
    }

    #[test]
    fn test_growth_steps() {
        let input = ProjectionInput::new(10_000.0, 10.0, 8, Yearly).unwrap();
        let steps = input.growth_steps(DEFAULT_GROWTH_STEPS).unwrap();
        let years: Vec<f64> = steps.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(steps[0].value, 10_000.0);
        assert_relative_eq!(steps[4].value, input.future_value().unwrap(), epsilon = 1e-9);

        let single = input.growth_steps(1).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].year, 8.0);
    }

    #[test]
    fn test_growth_steps_fractional_years() {
        let input = ProjectionInput::new(1000.0, 5.0, 5, Monthly).unwrap();
        let steps = input.growth_steps(5).unwrap();
        assert_eq!(steps[1].year, 1.25);
        assert!(steps.windows(2).all(|w| w[1].value > w[0].value));
    }

    #[test]
    fn test_json_shape() {
        let result = build_projection_series(100.0, 10.0, 1, Yearly).unwrap();
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert!(json.get("finalValue").is_some());
        assert!(json.get("principal").is_none());
        assert_eq!(json["series"][1]["year"], 1);
        assert_eq!(json["series"][1]["value"], 110.0);
    }

    #[test]
    fn test_series_horizon_is_capped() {
        let err = build_projection_series(1000.0, 1.0, MAX_PROJECTION_YEARS as i64 + 1, Yearly).unwrap_err();
        assert_eq!(err.field(), "years");
        let result = build_projection_series(1000.0, 1.0, MAX_PROJECTION_YEARS as i64, Yearly).unwrap();
        assert_eq!(result.series.len(), MAX_PROJECTION_YEARS as usize + 1);
    }

    #[test]
    fn test_growth_steps_limit() {
        let input = ProjectionInput::default();
        assert_eq!(input.growth_steps(MAX_GROWTH_STEPS).unwrap().len(), MAX_GROWTH_STEPS);
        let err = input.growth_steps(1_000_000_000_000).unwrap_err();
        assert_eq!(err.field(), "growth_steps");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(16_105.1), 16_105.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_negative_value_rounds_toward_positive_infinity() {
        // Rate below -100% yearly: 1 + r = -1.5, so year 1 is exactly -1.5
        let result = build_projection_series(1.0, -250.0, 2, Yearly).unwrap();
        assert_eq!(result.series[1].value, -1.0);
        assert_eq!(result.series[2].value, 2.0);
    }

    #[test]
    fn test_summary_survives_clone() {
        let result = build_projection_series(10_000.0, 10.0, 5, Yearly).unwrap();
        let copy = result.clone();
        assert_eq!(copy.principal(), 10_000.0);
        assert_eq!(copy.summary(), result.summary());
    }
}
