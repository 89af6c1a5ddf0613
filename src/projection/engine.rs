//! Core projection engine for monthly compounding with yearly reporting

use log::{debug, warn};

use crate::contract::SimulationParameters;
use super::normalize::{normalize, NormalizedRates};
use super::records::{MonthlyRow, ProjectionResult, YearlyRecord};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProjectionConfig {
    /// Whether to keep one row per compounding month
    pub detailed_output: bool,
}

impl ProjectionConfig {
    pub fn detailed() -> Self {
        Self {
            detailed_output: true,
        }
    }
}

/// Main projection engine
///
/// Holds no state between runs; one engine can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for one parameter set
    pub fn project(&self, params: &SimulationParameters) -> ProjectionResult {
        let rates = normalize(params);
        debug!(
            "projecting {} years, monthly net rate {:.8}, net deposits {:.2} + {:.2}/month",
            params.duration_years,
            rates.monthly_net_rate,
            rates.net_initial_deposit,
            rates.net_monthly_deposit,
        );
        if params.duration_years == 0 {
            warn!("duration of 0 years: projection has no yearly records");
        }
        if rates.monthly_net_rate < 0.0 {
            warn!(
                "management fee {}% exceeds gross rate {}%: net rate is negative",
                params.management_fee_percent, params.annual_interest_rate_percent
            );
        }

        let mut result = ProjectionResult::new(params.duration_years, rates);
        let mut state = ProjectionState::at_inception(rates.net_initial_deposit);

        for year in 1..=params.duration_years {
            for _month in 1..=12 {
                state.advance_month(params);
                let row = self.step_month(params, &rates, &mut state);
                if self.config.detailed_output {
                    result.add_month(row);
                }
            }

            debug_assert!(state.is_year_end());
            result.add_year(YearlyRecord::at_year_end(year, state.eop_capital, params));
        }

        result
    }

    /// Capital after 12 steps per year, without building records
    ///
    /// Bit-identical to `project(params).final_capital()`.
    pub fn final_capital(&self, params: &SimulationParameters) -> Option<f64> {
        if params.duration_years == 0 {
            return None;
        }

        let rates = normalize(params);
        let mut capital = rates.net_initial_deposit;
        for _year in 1..=params.duration_years {
            for _month in 1..=12 {
                capital = capital * (1.0 + rates.monthly_net_rate) + rates.net_monthly_deposit;
            }
        }
        Some(capital)
    }

    /// Compound one month and describe it
    fn step_month(
        &self,
        params: &SimulationParameters,
        rates: &NormalizedRates,
        state: &mut ProjectionState,
    ) -> MonthlyRow {
        let interest = state.compound(rates.monthly_net_rate, rates.net_monthly_deposit);

        MonthlyRow {
            projection_month: state.projection_month,
            contract_year: state.contract_year,
            month_in_year: state.month_in_year,
            attained_age: params.attained_age(state.projection_month),
            bop_capital: state.bop_capital,
            interest,
            net_deposit: rates.net_monthly_deposit,
            eop_capital: state.eop_capital,
        }
    }
}

/// Project with the default (yearly only) configuration
pub fn project(params: &SimulationParameters) -> ProjectionResult {
    ProjectionEngine::default().project(params)
}
