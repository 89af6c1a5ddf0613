//! Data for the stacked "capital structure per year" bar chart

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;
use super::format::round_money;

/// Series of the stacked chart, bottom to top: (label, colour)
pub const SERIES: [(&str, &str); 3] = [
    ("Versements nets", "#3b82f6"),
    ("Intérêts cumulés", "#22c55e"),
    ("Frais d'entrée", "#ef4444"),
];

/// One bar of the chart: the three stacked components for a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBar {
    pub year: u32,
    pub net_contributions: f64,
    pub interest: f64,
    pub entry_fees: f64,
}

impl StackedBar {
    /// Values in [`SERIES`] order
    pub fn stack(&self) -> [f64; 3] {
        [self.net_contributions, self.interest, self.entry_fees]
    }

    /// Height of the whole bar (equals the gross contributions plus interest)
    pub fn total(&self) -> f64 {
        self.stack().iter().sum()
    }
}

/// One bar per projected year, values rounded to cents
pub fn stacked_series(result: &ProjectionResult) -> Vec<StackedBar> {
    result
        .yearly
        .iter()
        .map(|record| StackedBar {
            year: record.year,
            net_contributions: round_money(record.net_contributions),
            interest: round_money(record.interest_generated),
            entry_fees: round_money(record.entry_fee_total),
        })
        .collect()
}
