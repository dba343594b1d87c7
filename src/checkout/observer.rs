//! Rendering collaborator interface.
//!
//! The checkout core never touches presentation state. It reports changes
//! to an injected `CheckoutObserver`, one call per arrival, carrying only
//! what changed for the affected counter.

use tracing::info;

use crate::models::CounterUpdate;

/// Receives checkout state changes.
pub trait CheckoutObserver {
    /// Called once, before any arrival, with the number of counters.
    fn on_system_initialized(&mut self, counter_count: usize);

    /// Called once per accepted arrival.
    fn on_assignment_changed(&mut self, update: &CounterUpdate);
}

impl<O: CheckoutObserver + ?Sized> CheckoutObserver for &mut O {
    fn on_system_initialized(&mut self, counter_count: usize) {
        (**self).on_system_initialized(counter_count);
    }

    fn on_assignment_changed(&mut self, update: &CounterUpdate) {
        (**self).on_assignment_changed(update);
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CheckoutObserver for NullObserver {
    fn on_system_initialized(&mut self, _counter_count: usize) {}

    fn on_assignment_changed(&mut self, _update: &CounterUpdate) {}
}

/// Keeps every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Counter counts passed to `on_system_initialized`.
    pub initialized: Vec<usize>,
    /// Updates in delivery order.
    pub updates: Vec<CounterUpdate>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenation of every delivered delta for one counter.
    pub fn rendered_queue(&self, counter_index: usize) -> Vec<u32> {
        self.updates
            .iter()
            .filter(|u| u.counter_index == counter_index)
            .flat_map(|u| u.new_entries.iter().copied())
            .collect()
    }
}

impl CheckoutObserver for RecordingObserver {
    fn on_system_initialized(&mut self, counter_count: usize) {
        self.initialized.push(counter_count);
    }

    fn on_assignment_changed(&mut self, update: &CounterUpdate) {
        self.updates.push(update.clone());
    }
}

/// Emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CheckoutObserver for TracingObserver {
    fn on_system_initialized(&mut self, counter_count: usize) {
        info!(counters = counter_count, "checkout system initialized");
    }

    fn on_assignment_changed(&mut self, update: &CounterUpdate) {
        info!(
            counter = update.counter_index,
            new_entries = ?update.new_entries,
            total_items = update.total_items,
            customers = update.customer_count,
            "counter updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_recording_observer_rebuilds_queue() {
        let mut observer = RecordingObserver::new();
        observer.on_system_initialized(2);
        for (counter_index, entry) in [(0, 4), (1, 2), (0, 6)] {
            observer.on_assignment_changed(&CounterUpdate {
                counter_index,
                new_entries: vec![entry],
                total_items: 0,
                customer_count: 0,
            });
        }
        assert_eq!(observer.initialized, vec![2]);
        assert_eq!(observer.rendered_queue(0), vec![4, 6]);
        assert_eq!(observer.rendered_queue(1), vec![2]);
    }

    #[traced_test]
    #[test]
    fn test_tracing_observer_logs_updates() {
        let mut observer = TracingObserver;
        observer.on_system_initialized(3);
        observer.on_assignment_changed(&CounterUpdate {
            counter_index: 1,
            new_entries: vec![7],
            total_items: 7,
            customer_count: 1,
        });

        assert!(logs_contain("checkout system initialized"));
        assert!(logs_contain("counter updated"));
        assert!(logs_contain("total_items=7"));
    }
}
