//! Linear-scan counter assignment.
//!
//! Recomputes nothing incrementally: each arrival scans every counter total
//! and keeps the first strict minimum, so ties go to the lowest index.
//! Chooses exactly the same counters as [`CounterAssigner`](super::CounterAssigner)
//! at O(n) per arrival. Kept as the reference policy.

use crate::error::CheckoutError;
use crate::models::CounterSnapshot;
use crate::validation;

/// Least-loaded assignment by full scan.
#[derive(Debug, Clone)]
pub struct LinearScanAssigner {
    queues: Vec<Vec<u32>>,
    totals: Vec<u64>,
}

impl LinearScanAssigner {
    /// Creates `num_checkouts` idle counters.
    pub fn new(num_checkouts: usize) -> Result<Self, CheckoutError> {
        if num_checkouts == 0 {
            return Err(CheckoutError::InvalidConfiguration { counters: 0 });
        }
        Ok(Self {
            queues: vec![Vec::new(); num_checkouts],
            totals: vec![0; num_checkouts],
        })
    }

    /// Index of the least-loaded counter (lowest index on ties).
    pub fn find_best_checkout(&self) -> usize {
        let mut best_index = 0;
        let mut min_items = u64::MAX;
        for (index, &total) in self.totals.iter().enumerate() {
            if total < min_items {
                min_items = total;
                best_index = index;
            }
        }
        best_index
    }

    /// Assigns a customer and returns the chosen counter.
    pub fn add_customer(&mut self, item_count: u32) -> Result<usize, CheckoutError> {
        validation::validate_item_count(item_count)?;
        let index = self.find_best_checkout();
        self.queues[index].push(item_count);
        self.totals[index] += u64::from(item_count);
        Ok(index)
    }

    /// Number of counters.
    pub fn num_checkouts(&self) -> usize {
        self.queues.len()
    }

    /// Customers routed to a counter (0 for an unknown index).
    pub fn customer_count(&self, index: usize) -> usize {
        self.queues.get(index).map_or(0, Vec::len)
    }

    /// Current load per counter, by index.
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    /// Read-only view of every counter.
    pub fn snapshot(&self) -> Vec<CounterSnapshot> {
        self.queues
            .iter()
            .zip(&self.totals)
            .enumerate()
            .map(|(index, (queue, &total_items))| CounterSnapshot {
                index,
                total_items,
                customers: queue.len(),
                queue: queue.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counters_rejected() {
        assert!(LinearScanAssigner::new(0).is_err());
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut scan = LinearScanAssigner::new(3).unwrap();
        assert_eq!(scan.find_best_checkout(), 0);
        assert_eq!(scan.add_customer(2).unwrap(), 0);
        assert_eq!(scan.add_customer(2).unwrap(), 1);
        assert_eq!(scan.add_customer(2).unwrap(), 2);
        assert_eq!(scan.add_customer(1).unwrap(), 0);
        assert_eq!(scan.totals(), &[3, 2, 2]);
    }

    #[test]
    fn test_rejects_zero_items() {
        let mut scan = LinearScanAssigner::new(1).unwrap();
        assert!(scan.add_customer(0).is_err());
        assert_eq!(scan.snapshot()[0].customers, 0);
    }
}
