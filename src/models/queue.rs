//! Counter queue and render cursor.
//!
//! A `CounterQueue` records the item counts of customers routed to one
//! counter, in arrival order. It is append-only. The embedded cursor marks
//! how many entries have already been handed to the rendering side, so a
//! renderer only ever receives what is new.

use serde::{Deserialize, Serialize};

/// Append-only queue of item counts with an incremental render cursor.
///
/// Invariants: `0 <= cursor <= items.len()` and `total == sum(items)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterQueue {
    items: Vec<u32>,
    total: u64,
    cursor: usize,
}

impl CounterQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a customer's item count.
    pub fn push(&mut self, item_count: u32) {
        self.items.push(item_count);
        self.total += u64::from(item_count);
    }

    /// All entries in arrival order.
    pub fn items(&self) -> &[u32] {
        &self.items
    }

    /// Number of customers in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no customer has been routed here yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item counts, maintained on push.
    #[inline]
    pub fn total_items(&self) -> u64 {
        self.total
    }

    /// Entries already handed out by [`take_delta`](Self::take_delta).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entries not yet rendered, without advancing the cursor.
    pub fn pending(&self) -> &[u32] {
        &self.items[self.cursor..]
    }

    /// Returns the entries at or after the cursor and advances the cursor
    /// to the end of the queue.
    pub fn take_delta(&mut self) -> &[u32] {
        let start = self.cursor;
        self.cursor = self.items.len();
        &self.items[start..]
    }
}

/// Read-only view of one counter's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Zero-based counter index.
    pub index: usize,
    /// Current load (sum of the queue).
    pub total_items: u64,
    /// Number of customers routed here.
    pub customers: usize,
    /// Item counts in arrival order.
    pub queue: Vec<u32>,
}

/// Incremental change for a single counter, as delivered to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterUpdate {
    /// Counter that received the arrival.
    pub counter_index: usize,
    /// Queue entries that were not yet rendered.
    pub new_entries: Vec<u32>,
    /// Counter load after the arrival.
    pub total_items: u64,
    /// Customer count after the arrival.
    pub customer_count: usize,
}
