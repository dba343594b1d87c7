//! Ordering rules for the min-heap.
//!
//! # Convention
//! `precedes(a, b)` returns `true` when `a` must leave the heap before `b`.
//! Rules must define a strict total order for deterministic extraction.

use crate::models::LoadRecord;

/// A strict ordering rule over heap elements.
pub trait HeapOrder<T> {
    /// Whether `a` strictly precedes `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Least total items first, ties broken by the lower counter index.
///
/// Since counter indices are unique, this is a strict total order over
/// the records of one checkout session.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastLoaded;

impl HeapOrder<LoadRecord> for LeastLoaded {
    fn precedes(&self, a: &LoadRecord, b: &LoadRecord) -> bool {
        a.total_items < b.total_items
            || (a.total_items == b.total_items && a.counter_index() < b.counter_index())
    }
}

/// Natural ascending order for `Ord` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: Ord> HeapOrder<T> for Ascending {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
