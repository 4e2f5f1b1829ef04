//! Growth Projector CLI
//!
//! Projects an investment under compound interest and prints the result.
//!
//! Usage: project --principal 10000 --rate 10 --years 5 --frequency monthly

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use growth_projector::output::{write_json, write_series_csv, ProjectionReport};
use growth_projector::{CompoundingFrequency, ProjectionError, ProjectionInput};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for rejected inputs, matching clap's usage-error code
const EXIT_INVALID_ARGUMENT: u8 = 2;

/// Compound-interest projection of an investment
#[derive(Debug, Parser)]
#[command(name = "project", version)]
struct Args {
    /// Initial invested amount
    #[arg(long, default_value_t = 10_000.0, allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate in percent (negative for decay)
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    rate: f64,

    /// Projection horizon in whole years
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    years: i64,

    /// Compounding frequency
    #[arg(long, value_enum, default_value_t = CompoundingFrequency::Yearly)]
    frequency: CompoundingFrequency,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Include total gains and growth multiple (JSON only)
    #[arg(long)]
    summary: bool,

    /// Include this many evenly spaced growth-curve samples (JSON only)
    #[arg(long)]
    growth_steps: Option<usize>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

impl Args {
    /// Reject flag combinations clap cannot express on its own
    fn check_flags(&self) -> Result<(), clap::Error> {
        if self.format == OutputFormat::Csv && (self.summary || self.growth_steps.is_some()) {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "--summary and --growth-steps require --format json",
            ));
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = args.check_flags() {
        err.exit();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if err.downcast_ref::<ProjectionError>().is_some() {
                ExitCode::from(EXIT_INVALID_ARGUMENT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let input = ProjectionInput::new(args.principal, args.rate, args.years, args.frequency)?;
    let result = input.project()?;
    log::info!(
        "Projected {} years at {}% compounded {}: final value {:.2}",
        input.years,
        input.annual_rate_percent,
        input.frequency,
        result.final_value
    );

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Json => {
            let mut report = ProjectionReport::new(result);
            if args.summary {
                report = report.with_summary();
            }
            if let Some(steps) = args.growth_steps {
                report = report.with_growth_steps(input.growth_steps(steps)?);
            }
            write_json(writer, &report)?;
        }
        OutputFormat::Csv => write_series_csv(writer, &result)?,
    }

    if let Some(path) = &args.output {
        log::info!("Results written to {}", path.display());
    }
    Ok(())
}
