//! AWS Lambda handler for running savings projections
//!
//! Accepts a parameter set as JSON and returns the figures at maturity, the
//! rounded yearly table and the chart series, exactly as the report shows
//! them. Missing parameters take the simulator defaults.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::info;
use serde::{Deserialize, Serialize};

use savings_projection::report::{
    rounded_yearly, stacked_series, RoundedMonthlyRow, RoundedYearlyRecord, StackedBar,
};
use savings_projection::{
    InputHints, MaturitySummary, ProjectionConfig, ProjectionEngine, SimulationParameters,
};

/// Input configuration for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub params: SimulationParameters,

    /// Clamp parameters into the form's ranges first
    #[serde(default)]
    pub clamp: bool,

    /// Include one row per month
    #[serde(default)]
    pub monthly_detail: bool,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub params: SimulationParameters,
    pub final_capital: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<MaturitySummary>,
    pub yearly: Vec<RoundedYearlyRecord>,
    pub chart: Vec<StackedBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Vec<RoundedMonthlyRow>>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn respond(request: ProjectionRequest) -> ProjectionResponse {
    let start = std::time::Instant::now();

    let params = if request.clamp {
        InputHints::default().clamp(&request.params)
    } else {
        request.params
    };

    let config = ProjectionConfig {
        detailed_output: request.monthly_detail,
    };
    let result = ProjectionEngine::new(config).project(&params);

    // An empty projection is reported, not failed: the caller decides
    let (summary, error) = match result.summary() {
        Ok(summary) => (Some(summary.rounded()), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let monthly = request
        .monthly_detail
        .then(|| result.monthly.iter().map(RoundedMonthlyRow::from).collect());

    ProjectionResponse {
        final_capital: summary.as_ref().map(|s| s.final_capital),
        summary,
        yearly: rounded_yearly(&result),
        chart: stacked_series(&result),
        monthly,
        execution_time_ms: start.elapsed().as_millis() as u64,
        error,
        params,
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let response = respond(event.payload);
    info!(
        "projected {} years in {} ms",
        response.params.duration_years, response.execution_time_ms
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
