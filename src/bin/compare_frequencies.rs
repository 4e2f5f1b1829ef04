//! Compare yearly, quarterly and monthly compounding over a grid of rates
//!
//! Outputs one row per (rate, frequency) pair for spreadsheet comparison.
//!
//! Usage: cargo run --bin compare_frequencies -- --principal 10000 --years 30

use anyhow::Context;
use clap::Parser;
use growth_projector::output::{write_comparison_csv, ComparisonRow};
use growth_projector::{ProjectionInput, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

/// Frequency comparison over a rate grid
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Initial invested amount
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Projection horizon in whole years
    #[arg(long, default_value_t = 30)]
    years: i64,

    /// Lowest annual rate in percent
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    min_rate: f64,

    /// Highest annual rate in percent
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    max_rate: f64,

    /// Rate increment in percent
    #[arg(long, default_value_t = 1.0)]
    step: f64,

    /// Output CSV path
    #[arg(long, short, default_value = "frequency_comparison.csv")]
    output: PathBuf,
}

/// Largest number of rates a single comparison run will evaluate
const MAX_GRID_RATES: usize = 10_000;

/// Rates from `min` to `max` inclusive in `step` increments
fn rate_grid(min: f64, max: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    anyhow::ensure!(step > 0.0 && step.is_finite(), "step must be positive (got {})", step);
    anyhow::ensure!(
        min.is_finite() && max.is_finite(),
        "rates must be finite (got {} to {})",
        min,
        max
    );
    anyhow::ensure!(min <= max, "min rate {} exceeds max rate {}", min, max);

    let intervals = ((max - min) / step + 1e-9).floor();
    anyhow::ensure!(
        intervals < MAX_GRID_RATES as f64,
        "rate grid from {} to {} by {} exceeds {} rates",
        min,
        max,
        step,
        MAX_GRID_RATES
    );

    let count = intervals as usize + 1;
    Ok((0..count).map(|i| min + step * i as f64).collect())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let rates = rate_grid(args.min_rate, args.max_rate, args.step)?;
    let base = ProjectionInput::new(args.principal, args.min_rate, args.years, Default::default())?;
    println!("Comparing {} rates over {} years...", rates.len(), base.years);

    // Run each rate's frequency comparison in parallel
    let per_rate: Vec<Vec<ComparisonRow>> = rates
        .par_iter()
        .map(|&rate| -> anyhow::Result<Vec<ComparisonRow>> {
            let runner = ScenarioRunner::with_input(ProjectionInput {
                annual_rate_percent: rate,
                ..base
            });
            let comparison = runner.compare_frequencies()?;
            Ok(comparison
                .iter()
                .map(|(freq, result)| ComparisonRow::from_result(rate, *freq, result))
                .collect())
        })
        .collect::<anyhow::Result<_>>()?;
    let rows: Vec<ComparisonRow> = per_rate.into_iter().flatten().collect();

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    write_comparison_csv(file, &rows)?;
    println!("Output written to {}", args.output.display());

    // Print the widest spread between yearly and monthly compounding
    if let Some(last) = rows.chunks(3).last() {
        println!(
            "\nAt {}%: Yearly={:.2} Quarterly={:.2} Monthly={:.2}",
            last[0].annual_rate_percent, last[0].final_value, last[1].final_value, last[2].final_value
        );
    }

    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_grid_inclusive() {
        let grid = rate_grid(1.0, 3.0, 0.5).unwrap();
        assert_eq!(grid, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert_eq!(rate_grid(5.0, 5.0, 1.0).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_rate_grid_rejects_bad_bounds() {
        assert!(rate_grid(1.0, 3.0, 0.0).is_err());
        assert!(rate_grid(4.0, 3.0, 1.0).is_err());
    }

    #[test]
    fn test_rate_grid_rejects_infinite_bounds() {
        assert!(rate_grid(f64::NEG_INFINITY, 20.0, 1.0).is_err());
        assert!(rate_grid(1.0, f64::INFINITY, 1.0).is_err());
        assert!(rate_grid(f64::NAN, 20.0, 1.0).is_err());
    }

    #[test]
    fn test_rate_grid_caps_row_count() {
        assert!(rate_grid(1.0, 1e15, 1e-3).is_err());
        let widest = rate_grid(0.0, (MAX_GRID_RATES - 1) as f64, 1.0).unwrap();
        assert_eq!(widest.len(), MAX_GRID_RATES);
    }
}
