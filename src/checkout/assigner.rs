//! Heap-backed least-loaded counter assignment.
//!
//! # Algorithm
//!
//! 1. Extract the minimum `LoadRecord` (fewest items, then lowest index).
//! 2. Append the arrival's item count to that counter's queue.
//! 3. Add the item count to the record and reinsert it.
//!
//! Exactly one record per counter is in the heap between calls, so the
//! heap size stays at `num_checkouts` and extraction cannot fail unless a
//! record was lost.
//!
//! Each queue keeps its own running total, updated in the same step as
//! the heap record, so per-counter reads never search the heap.
//!
//! # Complexity
//! O(log n) per arrival, n = number of counters. Per-counter reads are O(1).

use tracing::{debug, error};

use crate::error::CheckoutError;
use crate::heap::{LeastLoaded, MinHeap};
use crate::models::{CounterQueue, CounterSnapshot, LoadRecord};
use crate::validation;

/// Routes each arrival to the counter with the fewest total items.
///
/// # Example
///
/// ```
/// use u_checkout::checkout::CounterAssigner;
///
/// let mut assigner = CounterAssigner::new(3).unwrap();
/// assert_eq!(assigner.add_customer(5).unwrap(), 0);
/// assert_eq!(assigner.add_customer(3).unwrap(), 1);
/// assert_eq!(assigner.add_customer(1).unwrap(), 2);
/// assert_eq!(assigner.add_customer(2).unwrap(), 2);
/// assert_eq!(assigner.render_delta(2).unwrap(), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct CounterAssigner {
    queues: Vec<CounterQueue>,
    heap: MinHeap<LoadRecord, LeastLoaded>,
}

impl CounterAssigner {
    /// Creates `num_checkouts` idle counters.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `num_checkouts` is zero.
    pub fn new(num_checkouts: usize) -> Result<Self, CheckoutError> {
        if num_checkouts == 0 {
            return Err(CheckoutError::InvalidConfiguration { counters: 0 });
        }

        let mut heap = MinHeap::with_capacity(LeastLoaded, num_checkouts);
        for index in 0..num_checkouts {
            heap.insert(LoadRecord::new(index));
        }

        Ok(Self {
            queues: vec![CounterQueue::new(); num_checkouts],
            heap,
        })
    }

    /// Assigns a customer to the least-loaded counter.
    ///
    /// Returns the chosen counter index.
    ///
    /// # Errors
    /// - `InvalidArrival` when `item_count` is zero (the heap is untouched).
    /// - `EmptyStructureAccess` if no load record is available.
    pub fn add_customer(&mut self, item_count: u32) -> Result<usize, CheckoutError> {
        validation::validate_item_count(item_count)?;

        let Some(mut record) = self.heap.extract_min() else {
            error!(
                counters = self.queues.len(),
                "load record heap is empty; assignment invariant broken"
            );
            return Err(CheckoutError::EmptyStructureAccess);
        };

        let index = record.counter_index();
        self.queues[index].push(item_count);
        record.add_items(item_count);

        debug!(
            counter = index,
            item_count,
            total_items = record.total_items,
            "customer assigned"
        );

        self.heap.insert(record);
        Ok(index)
    }

    /// Returns queue entries not yet rendered for `index` and advances the
    /// render cursor.
    ///
    /// Concatenating every delta of a counter, in call order, yields its
    /// full queue exactly once.
    pub fn render_delta(&mut self, index: usize) -> Result<&[u32], CheckoutError> {
        let counters = self.queues.len();
        self.queues
            .get_mut(index)
            .map(CounterQueue::take_delta)
            .ok_or(CheckoutError::UnknownCounter { index, counters })
    }

    /// Number of counters.
    #[inline]
    pub fn num_checkouts(&self) -> usize {
        self.queues.len()
    }

    /// Number of load records currently in the heap.
    #[inline]
    pub fn heap_size(&self) -> usize {
        self.heap.len()
    }

    /// Item counts routed to a counter, in arrival order.
    pub fn queue(&self, index: usize) -> Option<&[u32]> {
        self.queues.get(index).map(CounterQueue::items)
    }

    /// Render cursor position for a counter.
    pub fn render_cursor(&self, index: usize) -> Option<usize> {
        self.queues.get(index).map(CounterQueue::cursor)
    }

    /// Current load of a counter.
    pub fn total_items(&self, index: usize) -> Option<u64> {
        self.queues.get(index).map(CounterQueue::total_items)
    }

    /// Customers routed to a counter.
    pub fn customer_count(&self, index: usize) -> Option<usize> {
        self.queues.get(index).map(CounterQueue::len)
    }

    /// Whether the load heap satisfies its ordering invariant.
    pub fn heap_is_valid(&self) -> bool {
        self.heap.is_valid()
    }

    /// Read-only view of every counter, ordered by index.
    pub fn snapshot(&self) -> Vec<CounterSnapshot> {
        self.queues
            .iter()
            .enumerate()
            .map(|(index, queue)| CounterSnapshot {
                index,
                total_items: queue.total_items(),
                customers: queue.len(),
                queue: queue.items().to_vec(),
            })
            .collect()
    }
}
