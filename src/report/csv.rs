//! CSV export of the yearly breakdown and monthly detail

use std::io::Write;

use crate::error::ProjectionError;
use crate::projection::ProjectionResult;
use super::{RoundedMonthlyRow, RoundedYearlyRecord};

/// Header of the yearly CSV, in `RoundedYearlyRecord` field order
pub const YEARLY_COLUMNS: [&str; 6] = [
    "year",
    "cumulative_capital",
    "gross_contributions",
    "net_contributions",
    "entry_fee_total",
    "interest_generated",
];

/// Header of the monthly CSV, in `RoundedMonthlyRow` field order
pub const MONTHLY_COLUMNS: [&str; 8] = [
    "projection_month",
    "contract_year",
    "month_in_year",
    "attained_age",
    "bop_capital",
    "interest",
    "net_deposit",
    "eop_capital",
];

/// Writer whose first record is the header, even when no rows follow
fn headed_writer<W: Write>(
    writer: W,
    columns: &[&str],
) -> Result<::csv::Writer<W>, ProjectionError> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(columns)?;
    Ok(csv_writer)
}

/// Write the yearly breakdown, one row per year, amounts rounded to cents
pub fn write_yearly_csv<W: Write>(
    writer: W,
    result: &ProjectionResult,
) -> Result<(), ProjectionError> {
    let mut csv_writer = headed_writer(writer, &YEARLY_COLUMNS)?;
    for record in &result.yearly {
        csv_writer.serialize(RoundedYearlyRecord::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the month-by-month rows
///
/// Only the header is written when the result was projected without
/// detailed output.
pub fn write_monthly_csv<W: Write>(
    writer: W,
    result: &ProjectionResult,
) -> Result<(), ProjectionError> {
    let mut csv_writer = headed_writer(writer, &MONTHLY_COLUMNS)?;
    for row in &result.monthly {
        csv_writer.serialize(RoundedMonthlyRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::SimulationParameters;
    use crate::projection::{project, ProjectionConfig, ProjectionEngine};

    #[test]
    fn test_yearly_csv_layout() {
        let result = project(&SimulationParameters::default());
        let mut buffer = Vec::new();
        write_yearly_csv(&mut buffer, &result).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "year,cumulative_capital,gross_contributions,net_contributions,\
                 entry_fee_total,interest_generated"
            )
        );
        assert!(lines.next().unwrap().starts_with("1,"));
        assert!(lines.next().unwrap().starts_with("2,"));
        assert_eq!(text.lines().count(), 21);
    }

    #[test]
    fn test_yearly_csv_reads_back() {
        let result = project(&SimulationParameters::default());
        let mut buffer = Vec::new();
        write_yearly_csv(&mut buffer, &result).unwrap();

        let mut reader = ::csv::Reader::from_reader(buffer.as_slice());
        let rows: Vec<RoundedYearlyRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].gross_contributions, 7400.0);
        assert_eq!(rows[0].entry_fee_total, 222.0);
    }

    #[test]
    fn test_monthly_csv_has_row_per_month() {
        let engine = ProjectionEngine::new(ProjectionConfig::detailed());
        let params = SimulationParameters {
            duration_years: 2,
            ..Default::default()
        };
        let result = engine.project(&params);

        let mut buffer = Vec::new();
        write_monthly_csv(&mut buffer, &result).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("projection_month,contract_year,month_in_year,attained_age,"));
        assert_eq!(text.lines().count(), 1 + 24);
    }

    #[test]
    fn test_empty_result_still_has_header() {
        let params = SimulationParameters {
            duration_years: 0,
            ..Default::default()
        };
        let result = project(&params);

        let mut buffer = Vec::new();
        write_yearly_csv(&mut buffer, &result).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", YEARLY_COLUMNS.join(",")));

        let mut buffer = Vec::new();
        write_monthly_csv(&mut buffer, &result).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", MONTHLY_COLUMNS.join(",")));
    }

    fn header_of<T: serde::Serialize>(row: T) -> String {
        let mut buffer = Vec::new();
        {
            let mut csv_writer = ::csv::Writer::from_writer(&mut buffer);
            csv_writer.serialize(row).unwrap();
            csv_writer.flush().unwrap();
        }
        let text = String::from_utf8(buffer).unwrap();
        text.lines().next().unwrap().to_string()
    }

    #[test]
    fn test_columns_match_serialized_field_names() {
        let params = SimulationParameters {
            duration_years: 1,
            ..Default::default()
        };
        let result = ProjectionEngine::new(ProjectionConfig::detailed()).project(&params);

        assert_eq!(
            header_of(RoundedYearlyRecord::from(&result.yearly[0])),
            YEARLY_COLUMNS.join(",")
        );
        assert_eq!(
            header_of(RoundedMonthlyRow::from(&result.monthly[0])),
            MONTHLY_COLUMNS.join(",")
        );
    }
}
