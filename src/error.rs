//! Error types for the reporting and scenario layers
//!
//! The projection engine itself never fails; these errors come from the
//! collaborators that consume its output (exports, scenario files).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Result has no yearly records (duration below one year)
    #[error("projection over {duration_years} years produced no yearly records")]
    EmptyProjection { duration_years: u32 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scenario row that could not be turned into parameters
    #[error("invalid scenario on line {line}: {reason}")]
    InvalidScenario { line: u64, reason: String },
}
