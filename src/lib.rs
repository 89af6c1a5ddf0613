//! Savings Projection - Projection engine for savings contracts
//!
//! This library provides:
//! - Parameter normalization (entry fee on every contribution, management fee
//!   taken off the gross rate)
//! - Month-by-month compounding with a yearly breakdown of capital,
//!   contributions, entry fees and interest
//! - Presentation helpers: cent rounding, French money formatting, chart
//!   series, CSV and printable HTML reports
//! - Batch scenarios, scenario files and result caching

pub mod error;
pub mod contract;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::ProjectionError;
pub use contract::{FormFields, InputHints, SimulationParameters};
pub use projection::{
    normalize, project, MaturitySummary, NormalizedRates, ProjectionConfig, ProjectionEngine,
    ProjectionResult, YearlyRecord,
};
pub use scenario::{ProjectionCache, ScenarioRunner};
