//! Running state of a contract during projection

use crate::contract::SimulationParameters;

/// State of the contract at a point in time during projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection month (1-indexed, 0 before the first step)
    pub projection_month: u32,

    /// Contract year (1-indexed)
    pub contract_year: u32,

    /// Month within contract year (1-12)
    pub month_in_year: u32,

    /// Capital before this month's compounding
    pub bop_capital: f64,

    /// Capital after this month's compounding and deposit
    pub eop_capital: f64,
}

impl ProjectionState {
    /// State at month 0: only the net initial deposit is invested
    pub fn at_inception(net_initial_deposit: f64) -> Self {
        Self {
            projection_month: 0,
            contract_year: 1,
            month_in_year: 0,
            bop_capital: net_initial_deposit,
            eop_capital: net_initial_deposit,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self, params: &SimulationParameters) {
        self.projection_month = self.projection_month.saturating_add(1);
        self.contract_year = params.contract_year(self.projection_month);
        self.month_in_year = params.month_in_contract_year(self.projection_month);

        // BOP values come from prior EOP
        self.bop_capital = self.eop_capital;
    }

    /// Grow the capital by one month of interest, then add the deposit
    ///
    /// Returns the interest earned this month.
    pub fn compound(&mut self, monthly_net_rate: f64, net_monthly_deposit: f64) -> f64 {
        let grown = self.bop_capital * (1.0 + monthly_net_rate);
        self.eop_capital = grown + net_monthly_deposit;
        grown - self.bop_capital
    }

    /// True on the last month of a contract year
    pub fn is_year_end(&self) -> bool {
        self.month_in_year == 12
    }
}
