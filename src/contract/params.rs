//! Contract parameters for a single simulation run

use serde::{Deserialize, Serialize};

/// Inputs of one projection run
///
/// Rates and fees are expressed in percent (2.5 means 2.5%). Nothing here is
/// validated: negative fees, rates above 100% or a management fee larger
/// than the gross rate are all computed as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Age of the subscriber at inception (informational)
    pub age: u32,

    /// Number of contract years to simulate
    pub duration_years: u32,

    /// Gross annual nominal interest rate, in percent
    pub annual_interest_rate_percent: f64,

    /// Lump sum paid in at month 0
    pub initial_deposit: f64,

    /// Contribution paid at the end of every month
    pub monthly_deposit: f64,

    /// Percentage taken from every contribution before it is invested
    pub entry_fee_percent: f64,

    /// Annual percentage taken off the gross interest rate
    pub management_fee_percent: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            age: 30,
            duration_years: 20,
            annual_interest_rate_percent: 2.5,
            initial_deposit: 5000.0,
            monthly_deposit: 200.0,
            entry_fee_percent: 3.0,
            management_fee_percent: 0.75,
        }
    }
}

impl SimulationParameters {
    /// Total number of monthly compounding steps
    pub fn total_months(&self) -> u32 {
        self.duration_years.saturating_mul(12)
    }

    /// Contract year (1-indexed) of a projection month
    pub fn contract_year(&self, projection_month: u32) -> u32 {
        projection_month.saturating_sub(1) / 12 + 1
    }

    /// Month within the contract year (1-12)
    pub fn month_in_contract_year(&self, projection_month: u32) -> u32 {
        (projection_month.saturating_sub(1) % 12) + 1
    }

    /// Age of the subscriber during a projection month
    /// Increments at the start of each contract year (month 13, 25, ...)
    pub fn attained_age(&self, projection_month: u32) -> u32 {
        self.age
            .saturating_add(self.contract_year(projection_month) - 1)
    }

    /// Fraction of every contribution that reaches the invested capital
    pub fn net_contribution_factor(&self) -> f64 {
        1.0 - self.entry_fee_percent / 100.0
    }

    /// Same parameters with a different gross annual rate
    pub fn with_rate(&self, annual_interest_rate_percent: f64) -> Self {
        Self {
            annual_interest_rate_percent,
            ..self.clone()
        }
    }
}
