//! Checkout system: assigner plus rendering collaborator.
//!
//! Each arrival runs to completion before the next one:
//! assign → take render delta → notify observer.

use tracing::{instrument, warn};

use super::{CheckoutObserver, CounterAssigner};
use crate::error::CheckoutError;
use crate::models::{CounterSnapshot, CounterUpdate};
use crate::validation;

/// A checkout session wired to an observer.
///
/// # Example
/// ```
/// use u_checkout::checkout::{CheckoutSystem, RecordingObserver};
///
/// let mut system = CheckoutSystem::new(2, RecordingObserver::new()).unwrap();
/// let update = system.add_customer(4).unwrap();
/// assert_eq!(update.counter_index, 0);
/// assert_eq!(update.new_entries, vec![4]);
/// assert_eq!(system.observer().initialized, vec![2]);
/// ```
#[derive(Debug)]
pub struct CheckoutSystem<O> {
    assigner: CounterAssigner,
    observer: O,
}

impl<O: CheckoutObserver> CheckoutSystem<O> {
    /// Builds `num_checkouts` counters and announces them to the observer.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `num_checkouts` is zero; the observer is
    /// not notified in that case.
    pub fn new(num_checkouts: usize, mut observer: O) -> Result<Self, CheckoutError> {
        let assigner = CounterAssigner::new(num_checkouts)?;
        observer.on_system_initialized(num_checkouts);
        Ok(Self { assigner, observer })
    }

    /// Routes one customer and notifies the observer with the delta.
    #[instrument(level = "debug", skip(self))]
    pub fn add_customer(&mut self, item_count: u32) -> Result<CounterUpdate, CheckoutError> {
        let counter_index = self.assigner.add_customer(item_count)?;
        let new_entries = self.assigner.render_delta(counter_index)?.to_vec();

        let update = CounterUpdate {
            counter_index,
            new_entries,
            total_items: self.assigner.total_items(counter_index).unwrap_or_default(),
            customer_count: self.assigner.customer_count(counter_index).unwrap_or_default(),
        };

        self.observer.on_assignment_changed(&update);
        Ok(update)
    }

    /// Parses raw input and routes the customer.
    ///
    /// Invalid input never reaches the assigner.
    pub fn submit(&mut self, raw: &str) -> Result<CounterUpdate, CheckoutError> {
        match validation::parse_item_count(raw) {
            Ok(item_count) => self.add_customer(item_count),
            Err(err) => {
                warn!(input = raw, kind = ?err.kind, "arrival rejected");
                Err(err.into())
            }
        }
    }

    /// Number of counters.
    pub fn num_checkouts(&self) -> usize {
        self.assigner.num_checkouts()
    }

    /// Read-only view of every counter.
    pub fn snapshot(&self) -> Vec<CounterSnapshot> {
        self.assigner.snapshot()
    }

    /// The underlying assigner.
    pub fn assigner(&self) -> &CounterAssigner {
        &self.assigner
    }

    /// The injected observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the system, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
