//! Scenario runner for batch projections
//!
//! Holds one engine configuration and runs it over many parameter sets.
//! Every run is independent, so batches are fanned out across the rayon pool.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::contract::SimulationParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::report::format::round_money;

/// Scenario runner for efficient batch projections
///
/// # Example
/// ```
/// use savings_projection::{ScenarioRunner, SimulationParameters};
///
/// let runner = ScenarioRunner::new();
/// let base = SimulationParameters::default();
/// let results = runner.run_rate_sweep(&base, &[1.5, 2.5, 3.5]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default (yearly only) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific engine configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, params: &SimulationParameters) -> ProjectionResult {
        self.engine.project(params)
    }

    /// Run projections for many parameter sets; output order matches input
    pub fn run_batch(&self, scenarios: &[SimulationParameters]) -> Vec<ProjectionResult> {
        info!("running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Run the same contract under several gross annual rates
    pub fn run_rate_sweep(
        &self,
        base: &SimulationParameters,
        rates: &[f64],
    ) -> Vec<ProjectionResult> {
        info!("sweeping {} gross rates", rates.len());
        rates
            .par_iter()
            .map(|&rate| self.engine.project(&base.with_rate(rate)))
            .collect()
    }

    /// Run a batch and flatten each run to one summary line
    pub fn summarize_batch(&self, scenarios: &[SimulationParameters]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .enumerate()
            .map(|(i, params)| {
                ScenarioOutcome::from_run(i + 1, params, &self.engine.project(params))
            })
            .collect()
    }
}

/// One line of a batch report
///
/// Maturity figures are empty for scenarios whose duration produced no years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: usize,
    pub duration_years: u32,
    pub annual_interest_rate_percent: f64,
    pub initial_deposit: f64,
    pub monthly_deposit: f64,
    pub entry_fee_percent: f64,
    pub management_fee_percent: f64,
    pub final_capital: Option<f64>,
    pub net_contributions: Option<f64>,
    pub interest_generated: Option<f64>,
    pub entry_fee_total: Option<f64>,
}

impl ScenarioOutcome {
    pub fn from_run(
        scenario: usize,
        params: &SimulationParameters,
        result: &ProjectionResult,
    ) -> Self {
        let last = result.last_year();
        Self {
            scenario,
            duration_years: params.duration_years,
            annual_interest_rate_percent: params.annual_interest_rate_percent,
            initial_deposit: params.initial_deposit,
            monthly_deposit: params.monthly_deposit,
            entry_fee_percent: params.entry_fee_percent,
            management_fee_percent: params.management_fee_percent,
            final_capital: last.map(|r| round_money(r.cumulative_capital)),
            net_contributions: last.map(|r| round_money(r.net_contributions)),
            interest_generated: last.map(|r| round_money(r.interest_generated)),
            entry_fee_total: last.map(|r| round_money(r.entry_fee_total)),
        }
    }
}
