//! Per-counter load record.
//!
//! A `LoadRecord` is the unit stored in the assignment heap. Exactly one
//! record exists per counter for the lifetime of a checkout session.

use serde::{Deserialize, Serialize};

/// Aggregate load of a single checkout counter.
///
/// `counter_index` is fixed at construction. `total_items` only changes while
/// the record is held outside the heap (between extract and reinsert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Zero-based counter identity.
    counter_index: usize,
    /// Sum of all item counts routed to this counter.
    pub total_items: u64,
}

impl LoadRecord {
    /// Creates an idle record for the given counter.
    pub fn new(counter_index: usize) -> Self {
        Self {
            counter_index,
            total_items: 0,
        }
    }

    /// Sets the initial load.
    pub fn with_total_items(mut self, total_items: u64) -> Self {
        self.total_items = total_items;
        self
    }

    /// Counter this record belongs to.
    #[inline]
    pub fn counter_index(&self) -> usize {
        self.counter_index
    }

    /// Adds an arrival's item count to the load.
    #[inline]
    pub fn add_items(&mut self, item_count: u32) {
        self.total_items += u64::from(item_count);
    }
}
