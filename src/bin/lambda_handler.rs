//! AWS Lambda handler for investment growth projections
//!
//! Accepts the simulation parameters as JSON and returns the projection
//! series along with the summary figures and growth-curve samples.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use growth_projector::output::ProjectionReport;
use growth_projector::simulation::DEFAULT_GROWTH_STEPS;
use growth_projector::{CompoundingFrequency, ProjectionError, ProjectionInput};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input parameters for the projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Initial invested amount (default: 10,000)
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual interest rate in percent (default: 10%)
    #[serde(default = "default_rate")]
    pub annual_rate_percent: f64,

    /// Projection horizon in years (default: 5)
    #[serde(default = "default_years")]
    pub years: i64,

    /// Compounding frequency label; unknown labels mean Yearly
    #[serde(default = "default_frequency")]
    pub frequency: String,

    /// Number of growth-curve samples (default: 5)
    #[serde(default = "default_growth_steps")]
    pub growth_steps: usize,
}

fn default_principal() -> f64 { 10_000.0 }
fn default_rate() -> f64 { 10.0 }
fn default_years() -> i64 { 5 }
fn default_frequency() -> String { CompoundingFrequency::Yearly.label().to_string() }
fn default_growth_steps() -> usize { DEFAULT_GROWTH_STEPS }

/// Error payload
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let text = serde_json::to_string(body)?;
    let response = with_cors(Response::builder().status(status))
        .header("Content-Type", "application/json")
        .body(Body::Text(text))?;
    Ok(response)
}

fn error_response(message: String, field: Option<&str>) -> Result<Response<Body>, Error> {
    json_response(400, &ErrorBody { error: message, field })
}

/// Turn a parsed request into a report
fn build_report(request: &ProjectionRequest) -> Result<ProjectionReport, ProjectionError> {
    let frequency = CompoundingFrequency::from_label(&request.frequency);
    let input = ProjectionInput::new(
        request.principal,
        request.annual_rate_percent,
        request.years,
        frequency,
    )?;

    let report = ProjectionReport::new(input.project()?)
        .with_summary()
        .with_growth_steps(input.growth_steps(request.growth_steps)?);
    Ok(report)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder().status(200)).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(format!("Invalid JSON: {}", e), None),
    };

    match build_report(&request) {
        Ok(report) => {
            log::info!(
                "Projected {} years for frequency {:?} in {:?}",
                request.years,
                request.frequency,
                start.elapsed()
            );
            json_response(200, &report)
        }
        Err(err) => {
            log::warn!("Rejected projection request: {}", err);
            error_response(err.to_string(), Some(err.field()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
