//! Batch scenarios, scenario files and result caching

mod runner;
mod cache;
pub mod loader;

pub use runner::{ScenarioOutcome, ScenarioRunner};
pub use cache::{ParamsKey, ProjectionCache};
pub use loader::{load_scenarios, load_scenarios_from_reader};
