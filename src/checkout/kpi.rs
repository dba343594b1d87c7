//! Load-balance metrics (KPIs).
//!
//! Computed from a snapshot of every counter.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total customers | Customers routed across all counters |
//! | Total items | Sum of all item counts |
//! | Min / Max load | Smallest / largest counter total |
//! | Spread | Max load - min load |
//! | Mean load | Total items / counters |
//! | Share | Counter total / total items |

use serde::Serialize;

use crate::models::CounterSnapshot;

/// Checkout balance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutKpi {
    /// Number of counters.
    pub counters: usize,
    /// Customers routed across all counters.
    pub total_customers: usize,
    /// Items routed across all counters.
    pub total_items: u64,
    /// Smallest counter load.
    pub min_load: u64,
    /// Largest counter load.
    pub max_load: u64,
    /// `max_load - min_load`.
    pub spread: u64,
    /// Mean counter load.
    pub mean_load: f64,
    /// Fraction of all items per counter (0.0..1.0), by index.
    pub share_by_counter: Vec<f64>,
}

impl CheckoutKpi {
    /// Computes KPIs from a counter snapshot.
    pub fn calculate(counters: &[CounterSnapshot]) -> Self {
        let total_items: u64 = counters.iter().map(|c| c.total_items).sum();
        let total_customers: usize = counters.iter().map(|c| c.customers).sum();
        let min_load = counters.iter().map(|c| c.total_items).min().unwrap_or(0);
        let max_load = counters.iter().map(|c| c.total_items).max().unwrap_or(0);

        let mean_load = if counters.is_empty() {
            0.0
        } else {
            total_items as f64 / counters.len() as f64
        };

        let share_by_counter = counters
            .iter()
            .map(|c| {
                if total_items == 0 {
                    0.0
                } else {
                    c.total_items as f64 / total_items as f64
                }
            })
            .collect();

        Self {
            counters: counters.len(),
            total_customers,
            total_items,
            min_load,
            max_load,
            spread: max_load - min_load,
            mean_load,
            share_by_counter,
        }
    }

    /// Whether the counter loads differ by at most `tolerance` items.
    pub fn is_balanced_within(&self, tolerance: u64) -> bool {
        self.spread <= tolerance
    }
}
