//! Load scenario parameter sets from CSV
//!
//! Header names are the parameter field names. Missing columns fall back to
//! the simulator defaults; blank cells are coerced to zero like form input.

use std::io::Read;
use std::path::Path;

use ::csv::{Reader, StringRecord};

use crate::contract::{coerce_real, coerce_whole, SimulationParameters};
use crate::error::ProjectionError;

/// Column positions of the known parameter fields
#[derive(Debug, Default)]
struct Columns {
    age: Option<usize>,
    duration_years: Option<usize>,
    annual_interest_rate_percent: Option<usize>,
    initial_deposit: Option<usize>,
    monthly_deposit: Option<usize>,
    entry_fee_percent: Option<usize>,
    management_fee_percent: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, ProjectionError> {
        let mut columns = Columns::default();
        for (i, name) in headers.iter().enumerate() {
            let slot = match name.trim() {
                "age" => &mut columns.age,
                "duration_years" => &mut columns.duration_years,
                "annual_interest_rate_percent" => &mut columns.annual_interest_rate_percent,
                "initial_deposit" => &mut columns.initial_deposit,
                "monthly_deposit" => &mut columns.monthly_deposit,
                "entry_fee_percent" => &mut columns.entry_fee_percent,
                "management_fee_percent" => &mut columns.management_fee_percent,
                other => {
                    return Err(ProjectionError::InvalidScenario {
                        line: 1,
                        reason: format!("unknown column: {}", other),
                    })
                }
            };
            *slot = Some(i);
        }
        Ok(columns)
    }

    fn to_params(&self, record: &StringRecord) -> SimulationParameters {
        let defaults = SimulationParameters::default();
        let real = |col: Option<usize>, fallback: f64| {
            col.map(|i| coerce_real(record.get(i).unwrap_or(""))).unwrap_or(fallback)
        };
        let whole = |col: Option<usize>, fallback: u32| {
            col.map(|i| coerce_whole(record.get(i).unwrap_or(""))).unwrap_or(fallback)
        };

        SimulationParameters {
            age: whole(self.age, defaults.age),
            duration_years: whole(self.duration_years, defaults.duration_years),
            annual_interest_rate_percent: real(
                self.annual_interest_rate_percent,
                defaults.annual_interest_rate_percent,
            ),
            initial_deposit: real(self.initial_deposit, defaults.initial_deposit),
            monthly_deposit: real(self.monthly_deposit, defaults.monthly_deposit),
            entry_fee_percent: real(self.entry_fee_percent, defaults.entry_fee_percent),
            management_fee_percent: real(
                self.management_fee_percent,
                defaults.management_fee_percent,
            ),
        }
    }
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<SimulationParameters>, ProjectionError> {
    let mut csv_reader = Reader::from_reader(reader);
    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut scenarios = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        scenarios.push(columns.to_params(&record));
    }

    Ok(scenarios)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<SimulationParameters>, ProjectionError> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenarios() {
        let data = "\
duration_years,initial_deposit,monthly_deposit,annual_interest_rate_percent
10,1000,50,3.5
25,,100,2
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].duration_years, 10);
        assert_eq!(scenarios[0].initial_deposit, 1000.0);
        assert_eq!(scenarios[0].annual_interest_rate_percent, 3.5);
        // Columns not in the file keep the defaults
        assert_eq!(scenarios[0].entry_fee_percent, 3.0);
        assert_eq!(scenarios[0].age, 30);

        // Blank cells are zero
        assert_eq!(scenarios[1].initial_deposit, 0.0);
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let data = "duration_years,volatility\n10,0.2\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidScenario { line: 1, .. }));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        let data = "duration_years,initial_deposit\n10\n";
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(ProjectionError::Csv(_))
        ));
    }
}
