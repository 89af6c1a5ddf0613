//! Output structures for projections

use serde::{Deserialize, Serialize};

use crate::contract::SimulationParameters;
use crate::error::ProjectionError;
use super::normalize::NormalizedRates;

/// State of the contract at the end of one simulated year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: u32,

    /// Capital after the 12th month of this year
    pub cumulative_capital: f64,

    /// Everything paid in so far, before fees
    pub gross_contributions: f64,

    /// Everything paid in so far, after entry fees
    pub net_contributions: f64,

    pub entry_fee_total: f64,

    pub interest_generated: f64,
}

impl YearlyRecord {
    /// Build the record for `year` from the capital reached at its end
    ///
    /// Contribution totals are closed-form in `year` and use the gross
    /// deposits, never the running capital.
    pub fn at_year_end(year: u32, cumulative_capital: f64, params: &SimulationParameters) -> Self {
        let year_f = year as f64;
        let net_factor = params.net_contribution_factor();

        let gross_contributions = params.initial_deposit + params.monthly_deposit * 12.0 * year_f;
        let net_contributions = params.initial_deposit * net_factor
            + params.monthly_deposit * net_factor * 12.0 * year_f;

        Self {
            year,
            cumulative_capital,
            gross_contributions,
            net_contributions,
            entry_fee_total: gross_contributions - net_contributions,
            interest_generated: cumulative_capital - net_contributions,
        }
    }
}

/// One monthly compounding step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    // Timing
    pub projection_month: u32,
    pub contract_year: u32,
    pub month_in_year: u32,
    pub attained_age: u32,

    pub bop_capital: f64,
    pub interest: f64,
    pub net_deposit: f64,
    pub eop_capital: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Duration the run was asked for
    pub duration_years: u32,

    /// Rates the loop compounded with
    pub rates: NormalizedRates,

    /// One record per simulated year, ascending
    pub yearly: Vec<YearlyRecord>,

    /// Month-by-month rows, only filled when detailed output is requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monthly: Vec<MonthlyRow>,
}

impl ProjectionResult {
    pub fn new(duration_years: u32, rates: NormalizedRates) -> Self {
        Self {
            duration_years,
            rates,
            yearly: Vec::new(),
            monthly: Vec::new(),
        }
    }

    /// Add a yearly record
    pub fn add_year(&mut self, record: YearlyRecord) {
        self.yearly.push(record);
    }

    /// Add a monthly row
    pub fn add_month(&mut self, row: MonthlyRow) {
        self.monthly.push(row);
    }

    /// Capital at the end of the last simulated year
    ///
    /// `None` when the duration produced no years at all.
    pub fn final_capital(&self) -> Option<f64> {
        self.last_year().map(|r| r.cumulative_capital)
    }

    pub fn last_year(&self) -> Option<&YearlyRecord> {
        self.yearly.last()
    }

    pub fn is_empty(&self) -> bool {
        self.yearly.is_empty()
    }

    /// Figures at maturity, as shown in the recap and the printed report
    pub fn summary(&self) -> Result<MaturitySummary, ProjectionError> {
        let last = self.last_year().ok_or(ProjectionError::EmptyProjection {
            duration_years: self.duration_years,
        })?;

        Ok(MaturitySummary {
            duration_years: last.year,
            final_capital: last.cumulative_capital,
            gross_contributions: last.gross_contributions,
            net_contributions: last.net_contributions,
            interest_generated: last.interest_generated,
            entry_fee_total: last.entry_fee_total,
        })
    }
}

/// Summary figures at the end of the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturitySummary {
    pub duration_years: u32,
    pub final_capital: f64,
    pub gross_contributions: f64,
    pub net_contributions: f64,
    pub interest_generated: f64,
    pub entry_fee_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_end_totals_are_closed_form() {
        let params = SimulationParameters::default();
        let record = YearlyRecord::at_year_end(3, 15_000.0, &params);

        assert_relative_eq!(record.gross_contributions, 5000.0 + 200.0 * 36.0);
        assert_relative_eq!(
            record.net_contributions,
            (5000.0 + 200.0 * 36.0) * 0.97,
            epsilon = 1e-9
        );
        assert_relative_eq!(record.entry_fee_total, (5000.0 + 200.0 * 36.0) * 0.03, epsilon = 1e-9);
        assert_relative_eq!(record.interest_generated, 15_000.0 - record.net_contributions);
    }

    #[test]
    fn test_empty_result_has_no_summary() {
        let rates = NormalizedRates {
            net_initial_deposit: 0.0,
            net_monthly_deposit: 0.0,
            monthly_net_rate: 0.0,
        };
        let result = ProjectionResult::new(0, rates);

        assert!(result.is_empty());
        assert_eq!(result.final_capital(), None);
        assert!(matches!(
            result.summary(),
            Err(ProjectionError::EmptyProjection { duration_years: 0 })
        ));
    }
}
