//! Thread-safe assigner handle.
//!
//! Extract → mutate → reinsert is not atomic on its own; two unsynchronized
//! arrivals could both read the same minimum and lose an update. The handle
//! holds one lock for the whole sequence.

use std::sync::Arc;

use parking_lot::Mutex;

use super::CounterAssigner;
use crate::error::CheckoutError;
use crate::models::CounterSnapshot;

/// Cloneable, `Send + Sync` wrapper around a [`CounterAssigner`].
#[derive(Debug, Clone)]
pub struct SharedAssigner {
    inner: Arc<Mutex<CounterAssigner>>,
}

impl SharedAssigner {
    /// Creates a shared assigner with `num_checkouts` counters.
    pub fn new(num_checkouts: usize) -> Result<Self, CheckoutError> {
        Ok(Self::from_assigner(CounterAssigner::new(num_checkouts)?))
    }

    /// Wraps an existing assigner.
    pub fn from_assigner(assigner: CounterAssigner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(assigner)),
        }
    }

    /// Assigns a customer while holding the lock.
    pub fn add_customer(&self, item_count: u32) -> Result<usize, CheckoutError> {
        self.inner.lock().add_customer(item_count)
    }

    /// Takes the pending render delta for a counter.
    pub fn render_delta(&self, index: usize) -> Result<Vec<u32>, CheckoutError> {
        self.inner.lock().render_delta(index).map(<[u32]>::to_vec)
    }

    /// Read-only view of every counter.
    pub fn snapshot(&self) -> Vec<CounterSnapshot> {
        self.inner.lock().snapshot()
    }

    /// Number of load records in the heap.
    pub fn heap_size(&self) -> usize {
        self.inner.lock().heap_size()
    }
}
