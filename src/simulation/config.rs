//! Simulation configuration.
//!
//! Loaded from a JSON file; fields missing from the file keep their
//! defaults. Command-line flags are applied on top by the caller.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CheckoutError;
use crate::validation;

/// Parameters of a generated arrival stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of checkout counters.
    pub counters: usize,
    /// Number of customers to generate.
    pub customers: usize,
    /// Smallest item count per customer (inclusive).
    pub min_items: u32,
    /// Largest item count per customer (inclusive).
    pub max_items: u32,
    /// RNG seed; equal seeds produce equal arrival streams.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            counters: 3,
            customers: 20,
            min_items: 1,
            max_items: 20,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CheckoutError> {
        serde_json::from_str(json).map_err(|e| CheckoutError::Config(e.to_string()))
    }

    /// Reads and parses a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckoutError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| CheckoutError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    /// Sets the number of counters.
    pub fn with_counters(mut self, counters: usize) -> Self {
        self.counters = counters;
        self
    }

    /// Sets the number of customers.
    pub fn with_customers(mut self, customers: usize) -> Self {
        self.customers = customers;
        self
    }

    /// Sets the inclusive item-count range.
    pub fn with_item_range(mut self, min_items: u32, max_items: u32) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks counter count and item range.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        validation::validate_counter_count(self.counters)?;
        validation::validate_item_range(self.min_items, self.max_items)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.counters, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{"counters": 5, "seed": 7}"#).unwrap();
        assert_eq!(config.counters, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.customers, 20);
        assert_eq!(config.max_items, 20);
    }

    #[test]
    fn test_malformed_json() {
        let err = SimulationConfig::from_json("{counters: }").unwrap_err();
        assert!(matches!(err, CheckoutError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_file("/nonexistent/u-checkout.json").unwrap_err();
        assert!(matches!(err, CheckoutError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = SimulationConfig::default().with_counters(0);
        assert_eq!(
            zero.validate().unwrap_err(),
            CheckoutError::InvalidConfiguration { counters: 0 }
        );

        let inverted = SimulationConfig::default().with_item_range(9, 3);
        assert!(matches!(
            inverted.validate().unwrap_err(),
            CheckoutError::Config(_)
        ));
    }
}
