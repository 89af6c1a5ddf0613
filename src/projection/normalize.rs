//! Net rates and contributions derived from the gross contract parameters

use serde::{Deserialize, Serialize};

use crate::contract::SimulationParameters;

/// Quantities the compounding loop works with, computed once per run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRates {
    /// Initial deposit after the entry fee
    pub net_initial_deposit: f64,

    /// Monthly deposit after the entry fee
    pub net_monthly_deposit: f64,

    /// (gross rate - management fee) / 100 / 12
    pub monthly_net_rate: f64,
}

/// Derive net deposits and the monthly net rate
///
/// Defined for every input; NaN and infinities propagate.
pub fn normalize(params: &SimulationParameters) -> NormalizedRates {
    let net_factor = params.net_contribution_factor();

    NormalizedRates {
        net_initial_deposit: params.initial_deposit * net_factor,
        net_monthly_deposit: params.monthly_deposit * net_factor,
        monthly_net_rate: (params.annual_interest_rate_percent - params.management_fee_percent)
            / 100.0
            / 12.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario_rates() {
        let rates = normalize(&SimulationParameters::default());

        assert_relative_eq!(rates.net_initial_deposit, 4850.0, epsilon = 1e-9);
        assert_relative_eq!(rates.net_monthly_deposit, 194.0, epsilon = 1e-9);
        assert_relative_eq!(rates.monthly_net_rate, 0.0014583333, epsilon = 1e-9);
    }

    #[test]
    fn test_fee_above_rate_gives_negative_monthly_rate() {
        let params = SimulationParameters {
            annual_interest_rate_percent: 0.5,
            management_fee_percent: 1.7,
            ..Default::default()
        };
        let rates = normalize(&params);

        assert!(rates.monthly_net_rate < 0.0);
        assert_relative_eq!(rates.monthly_net_rate, -0.001, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_entry_fee_is_a_bonus() {
        let params = SimulationParameters {
            initial_deposit: 1000.0,
            entry_fee_percent: -2.0,
            ..Default::default()
        };
        assert_relative_eq!(normalize(&params).net_initial_deposit, 1020.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let params = SimulationParameters {
            annual_interest_rate_percent: f64::NAN,
            ..Default::default()
        };
        assert!(normalize(&params).monthly_net_rate.is_nan());
    }
}
