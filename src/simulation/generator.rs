//! Seeded arrival generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SimulationConfig;

/// Produces item counts uniformly in `[min_items, max_items]`.
///
/// Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    rng: StdRng,
    min_items: u32,
    max_items: u32,
}

impl ArrivalGenerator {
    /// Creates a generator. Callers validate the range first.
    pub fn new(seed: u64, min_items: u32, max_items: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_items,
            max_items: max_items.max(min_items),
        }
    }

    /// Creates a generator from a simulation config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.seed, config.min_items, config.max_items)
    }

    /// Next customer's item count.
    pub fn next_item_count(&mut self) -> u32 {
        self.rng.random_range(self.min_items..=self.max_items)
    }

    /// The next `n` item counts.
    pub fn take_arrivals(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.next_item_count()).collect()
    }
}
