//! Projection engine: parameter normalization and monthly compounding

mod state;
mod normalize;
mod engine;
mod records;

pub use state::ProjectionState;
pub use normalize::{normalize, NormalizedRates};
pub use engine::{project, ProjectionConfig, ProjectionEngine};
pub use records::{MaturitySummary, MonthlyRow, ProjectionResult, YearlyRecord};
