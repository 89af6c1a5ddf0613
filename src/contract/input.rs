//! Form input coercion and range hints
//!
//! Raw form fields are coerced with "parse or zero" semantics before they
//! reach the engine. Range hints mirror the form's min/max/step attributes;
//! they are only applied when a caller asks for it via [`InputHints::clamp`].

use serde::{Deserialize, Serialize};

use super::SimulationParameters;

/// Raw text of the simulator form, one field per parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub age: String,
    pub duration_years: String,
    pub annual_interest_rate_percent: String,
    pub initial_deposit: String,
    pub monthly_deposit: String,
    pub entry_fee_percent: String,
    pub management_fee_percent: String,
}

/// Parse the leading decimal number of `raw`, or 0.0 when there is none
///
/// Trailing garbage is ignored ("12.5 %" gives 12.5) and NaN collapses to 0.
pub fn coerce_real(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    // Longest prefix that is a valid float wins
    let parsed = (1..=candidate_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok());

    match parsed {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Parse the leading integer of `raw`, or 0 when there is none
///
/// Negative values map to 0 and values past `u32::MAX` saturate.
pub fn coerce_whole(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}

impl SimulationParameters {
    /// Build parameters from raw form text
    pub fn from_form(fields: &FormFields) -> Self {
        Self {
            age: coerce_whole(&fields.age),
            duration_years: coerce_whole(&fields.duration_years),
            annual_interest_rate_percent: coerce_real(&fields.annual_interest_rate_percent),
            initial_deposit: coerce_real(&fields.initial_deposit),
            monthly_deposit: coerce_real(&fields.monthly_deposit),
            entry_fee_percent: coerce_real(&fields.entry_fee_percent),
            management_fee_percent: coerce_real(&fields.management_fee_percent),
        }
    }
}

/// Allowed range for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldHint {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl FieldHint {
    const fn new(min: Option<f64>, max: Option<f64>, step: Option<f64>) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into `[min, max]`; NaN passes through untouched
    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min {
            if v < min {
                v = min;
            }
        }
        if let Some(max) = self.max {
            if v > max {
                v = max;
            }
        }
        v
    }
}

/// Min/max/step hints shown next to each form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputHints {
    pub age: FieldHint,
    pub duration_years: FieldHint,
    pub annual_interest_rate_percent: FieldHint,
    pub initial_deposit: FieldHint,
    pub monthly_deposit: FieldHint,
    pub entry_fee_percent: FieldHint,
    pub management_fee_percent: FieldHint,
}

impl Default for InputHints {
    fn default() -> Self {
        Self {
            age: FieldHint::new(Some(18.0), Some(80.0), None),
            duration_years: FieldHint::new(Some(1.0), Some(40.0), None),
            annual_interest_rate_percent: FieldHint::new(Some(0.0), Some(10.0), Some(0.1)),
            initial_deposit: FieldHint::new(Some(0.0), None, None),
            monthly_deposit: FieldHint::new(Some(0.0), None, None),
            entry_fee_percent: FieldHint::new(Some(0.0), Some(5.0), Some(0.1)),
            management_fee_percent: FieldHint::new(Some(0.0), Some(2.0), Some(0.05)),
        }
    }
}

impl InputHints {
    /// Copy of `params` with every field pulled into its hinted range
    ///
    /// Steps are display hints only and are not snapped to.
    pub fn clamp(&self, params: &SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            age: self.age.clamp(params.age as f64) as u32,
            duration_years: self.duration_years.clamp(params.duration_years as f64) as u32,
            annual_interest_rate_percent: self
                .annual_interest_rate_percent
                .clamp(params.annual_interest_rate_percent),
            initial_deposit: self.initial_deposit.clamp(params.initial_deposit),
            monthly_deposit: self.monthly_deposit.clamp(params.monthly_deposit),
            entry_fee_percent: self.entry_fee_percent.clamp(params.entry_fee_percent),
            management_fee_percent: self
                .management_fee_percent
                .clamp(params.management_fee_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_real() {
        assert_eq!(coerce_real("2.5"), 2.5);
        assert_eq!(coerce_real("  0.75"), 0.75);
        assert_eq!(coerce_real("12.5 %"), 12.5);
        assert_eq!(coerce_real("1e3"), 1000.0);
        assert_eq!(coerce_real("-4"), -4.0);
        assert_eq!(coerce_real(""), 0.0);
        assert_eq!(coerce_real("abc"), 0.0);
        assert_eq!(coerce_real("."), 0.0);
        assert_eq!(coerce_real("3.e"), 3.0);
    }

    #[test]
    fn test_coerce_whole() {
        assert_eq!(coerce_whole("20"), 20);
        assert_eq!(coerce_whole("20.9"), 20);
        assert_eq!(coerce_whole(" 7 ans"), 7);
        assert_eq!(coerce_whole("+3"), 3);
        assert_eq!(coerce_whole("-3"), 0);
        assert_eq!(coerce_whole("x"), 0);
        assert_eq!(coerce_whole("99999999999"), u32::MAX);
    }

    #[test]
    fn test_from_form_blank_fields_are_zero() {
        let fields = FormFields {
            duration_years: "10".to_string(),
            monthly_deposit: "150".to_string(),
            ..Default::default()
        };
        let params = SimulationParameters::from_form(&fields);

        assert_eq!(params.duration_years, 10);
        assert_eq!(params.monthly_deposit, 150.0);
        assert_eq!(params.initial_deposit, 0.0);
        assert_eq!(params.entry_fee_percent, 0.0);
        assert_eq!(params.age, 0);
    }

    #[test]
    fn test_clamp_pulls_into_hint_ranges() {
        let params = SimulationParameters {
            age: 12,
            duration_years: 55,
            annual_interest_rate_percent: 14.0,
            initial_deposit: -10.0,
            monthly_deposit: 100.0,
            entry_fee_percent: 7.5,
            management_fee_percent: -1.0,
        };
        let clamped = InputHints::default().clamp(&params);

        assert_eq!(clamped.age, 18);
        assert_eq!(clamped.duration_years, 40);
        assert_eq!(clamped.annual_interest_rate_percent, 10.0);
        assert_eq!(clamped.initial_deposit, 0.0);
        assert_eq!(clamped.monthly_deposit, 100.0);
        assert_eq!(clamped.entry_fee_percent, 5.0);
        assert_eq!(clamped.management_fee_percent, 0.0);
    }
}
