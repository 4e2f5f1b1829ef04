//! JSON and CSV rendering of projection results

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

use crate::simulation::{CompoundingFrequency, GrowthStep, ProjectionResult, ProjectionSummary};

/// Errors raised while writing results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Projection result plus the optional extras shown alongside the chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    #[serde(flatten)]
    pub result: ProjectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_steps: Option<Vec<GrowthStep>>,
}

impl ProjectionReport {
    /// Bare `{finalValue, series}` report
    pub fn new(result: ProjectionResult) -> Self {
        Self {
            result,
            summary: None,
            growth_steps: None,
        }
    }

    pub fn with_summary(mut self) -> Self {
        self.summary = Some(self.result.summary());
        self
    }

    pub fn with_growth_steps(mut self, steps: Vec<GrowthStep>) -> Self {
        self.growth_steps = Some(steps);
        self
    }
}

/// One row of a rate/frequency comparison table
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "AnnualRatePct")]
    pub annual_rate_percent: f64,
    #[serde(rename = "Frequency")]
    pub frequency: CompoundingFrequency,
    #[serde(rename = "Years")]
    pub years: u64,
    #[serde(rename = "FinalValue")]
    pub final_value: f64,
    #[serde(rename = "TotalGains")]
    pub total_gains: f64,
    #[serde(rename = "GrowthMultiple")]
    pub growth_multiple: Option<f64>,
}

impl ComparisonRow {
    pub fn from_result(annual_rate_percent: f64, frequency: CompoundingFrequency, result: &ProjectionResult) -> Self {
        let summary = result.summary();
        Self {
            annual_rate_percent,
            frequency,
            years: result.years(),
            final_value: summary.final_value,
            total_gains: summary.total_gains,
            growth_multiple: summary.growth_multiple,
        }
    }
}

/// Write a report as pretty-printed JSON followed by a newline
pub fn write_json<W: Write>(mut writer: W, report: &ProjectionReport) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the display series as `year,value` CSV
pub fn write_series_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<(), OutputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &result.series {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write comparison rows as CSV with a header line
pub fn write_comparison_csv<W: Write>(writer: W, rows: &[ComparisonRow]) -> Result<(), OutputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{build_projection_series, ProjectionInput};

    fn sample() -> ProjectionResult {
        build_projection_series(10_000.0, 10.0, 2, CompoundingFrequency::Yearly).unwrap()
    }

    #[test]
    fn test_json_bare_report() {
        let mut buf = Vec::new();
        write_json(&mut buf, &ProjectionReport::new(sample())).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("finalValue"));
        assert_eq!(json["series"].as_array().unwrap().len(), 3);
        assert_eq!(json["series"][2]["value"], 12_100.0);
    }

    #[test]
    fn test_json_with_extras() {
        let input = ProjectionInput::default();
        let report = ProjectionReport::new(input.project().unwrap())
            .with_summary()
            .with_growth_steps(input.growth_steps(5).unwrap());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["principal"], 10_000.0);
        assert!(json["summary"]["growthMultiple"].as_f64().unwrap() > 1.6);
        assert_eq!(json["growthSteps"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_series_csv() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "year,value");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,10000"));
    }

    #[test]
    fn test_comparison_csv() {
        let result = sample();
        let rows = vec![ComparisonRow::from_result(10.0, CompoundingFrequency::Yearly, &result)];
        let mut buf = Vec::new();
        write_comparison_csv(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("AnnualRatePct,Frequency,Years,FinalValue,TotalGains,GrowthMultiple\n"));
        assert!(text.contains(",Yearly,2,"));
    }
}
