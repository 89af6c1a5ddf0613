//! Contract parameters and form input handling

mod params;
pub mod input;

pub use params::SimulationParameters;
pub use input::{coerce_real, coerce_whole, FieldHint, FormFields, InputHints};
