//! Memoization of projection results keyed by the full parameter tuple
//!
//! The engine is pure, so a cached result is always identical to a fresh
//! run. Keys use the exact bit patterns of the float fields: 2.5 and
//! 2.5000000001 are different contracts, and NaN inputs are cacheable.

use std::collections::HashMap;

use log::debug;

use crate::contract::SimulationParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Exact identity of one projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamsKey {
    age: u32,
    duration_years: u32,
    annual_interest_rate_percent: u64,
    initial_deposit: u64,
    monthly_deposit: u64,
    entry_fee_percent: u64,
    management_fee_percent: u64,
    detailed_output: bool,
}

impl ParamsKey {
    pub fn new(params: &SimulationParameters, config: &ProjectionConfig) -> Self {
        Self {
            age: params.age,
            duration_years: params.duration_years,
            annual_interest_rate_percent: params.annual_interest_rate_percent.to_bits(),
            initial_deposit: params.initial_deposit.to_bits(),
            monthly_deposit: params.monthly_deposit.to_bits(),
            entry_fee_percent: params.entry_fee_percent.to_bits(),
            management_fee_percent: params.management_fee_percent.to_bits(),
            detailed_output: config.detailed_output,
        }
    }
}

/// Projection engine wrapped with a result cache
#[derive(Debug, Default)]
pub struct ProjectionCache {
    engine: ProjectionEngine,
    entries: HashMap<ParamsKey, ProjectionResult>,
    hits: u64,
    misses: u64,
}

impl ProjectionCache {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
            ..Default::default()
        }
    }

    /// Cached result for `params`, projecting on first request
    pub fn get_or_project(&mut self, params: &SimulationParameters) -> &ProjectionResult {
        let key = ParamsKey::new(params, self.engine.config());
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            debug!("cache miss for {:?}", key);
        }

        let engine = &self.engine;
        self.entries.entry(key).or_insert_with(|| engine.project(params))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation or the last clear
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Clear any cached data
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_cached_result_equals_fresh_run() {
        let mut cache = ProjectionCache::default();
        let params = SimulationParameters::default();

        let cached = cache.get_or_project(&params).clone();
        assert_eq!(cached, project(&params));
        assert_eq!(cache.get_or_project(&params), &cached);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats(), (1, 1));
    }

    #[test]
    fn test_any_field_change_is_a_new_entry() {
        let mut cache = ProjectionCache::default();
        let base = SimulationParameters::default();

        cache.get_or_project(&base);
        cache.get_or_project(&SimulationParameters { age: 31, ..base.clone() });
        cache.get_or_project(&base.with_rate(2.5000000001));
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), (0, 0));
    }

    #[test]
    fn test_config_is_part_of_the_key() {
        let params = SimulationParameters::default();
        let plain = ParamsKey::new(&params, &ProjectionConfig::default());
        let detailed = ParamsKey::new(&params, &ProjectionConfig::detailed());
        assert_ne!(plain, detailed);
    }
}
