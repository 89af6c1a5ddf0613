//! Presentation boundary: rounded views, chart data and document exports
//!
//! Everything here consumes a [`ProjectionResult`] as produced by the engine
//! and only rounds or formats it, so tables, charts and printed reports all
//! show the same figures.

pub mod format;
pub mod chart;
pub mod csv;
pub mod html;

use serde::{Deserialize, Serialize};

use crate::projection::{MaturitySummary, MonthlyRow, ProjectionResult, YearlyRecord};
use format::round_money;

pub use chart::{stacked_series, StackedBar};
pub use html::render_report;

/// Yearly record with every amount rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedYearlyRecord {
    pub year: u32,
    pub cumulative_capital: f64,
    pub gross_contributions: f64,
    pub net_contributions: f64,
    pub entry_fee_total: f64,
    pub interest_generated: f64,
}

impl From<&YearlyRecord> for RoundedYearlyRecord {
    fn from(record: &YearlyRecord) -> Self {
        Self {
            year: record.year,
            cumulative_capital: round_money(record.cumulative_capital),
            gross_contributions: round_money(record.gross_contributions),
            net_contributions: round_money(record.net_contributions),
            entry_fee_total: round_money(record.entry_fee_total),
            interest_generated: round_money(record.interest_generated),
        }
    }
}

/// Monthly row with amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundedMonthlyRow {
    pub projection_month: u32,
    pub contract_year: u32,
    pub month_in_year: u32,
    pub attained_age: u32,
    pub bop_capital: f64,
    pub interest: f64,
    pub net_deposit: f64,
    pub eop_capital: f64,
}

impl From<&MonthlyRow> for RoundedMonthlyRow {
    fn from(row: &MonthlyRow) -> Self {
        Self {
            projection_month: row.projection_month,
            contract_year: row.contract_year,
            month_in_year: row.month_in_year,
            attained_age: row.attained_age,
            bop_capital: round_money(row.bop_capital),
            interest: round_money(row.interest),
            net_deposit: round_money(row.net_deposit),
            eop_capital: round_money(row.eop_capital),
        }
    }
}

impl MaturitySummary {
    /// Same summary with every amount rounded to cents
    pub fn rounded(&self) -> MaturitySummary {
        MaturitySummary {
            duration_years: self.duration_years,
            final_capital: round_money(self.final_capital),
            gross_contributions: round_money(self.gross_contributions),
            net_contributions: round_money(self.net_contributions),
            interest_generated: round_money(self.interest_generated),
            entry_fee_total: round_money(self.entry_fee_total),
        }
    }
}

/// Rounded yearly table of a result
pub fn rounded_yearly(result: &ProjectionResult) -> Vec<RoundedYearlyRecord> {
    result.yearly.iter().map(RoundedYearlyRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::SimulationParameters;
    use crate::projection::project;

    #[test]
    fn test_rounded_table_keeps_every_year() {
        let result = project(&SimulationParameters::default());
        let table = rounded_yearly(&result);

        assert_eq!(table.len(), 20);
        assert_eq!(table[0].gross_contributions, 7400.0);
        assert_eq!(table[0].entry_fee_total, 222.0);
        assert_eq!(table[0].net_contributions, 7178.0);
        assert_eq!(table[19].cumulative_capital, round_money(result.final_capital().unwrap()));
    }

    #[test]
    fn test_rounded_summary() {
        let result = project(&SimulationParameters::default());
        let summary = result.summary().unwrap().rounded();

        assert_eq!(summary.duration_years, 20);
        assert_eq!(summary.gross_contributions, 53_000.0);
        assert_eq!(summary.entry_fee_total, 1590.0);
        assert_eq!(summary.net_contributions, 51_410.0);
    }
}
