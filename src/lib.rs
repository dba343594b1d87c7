//! Checkout counter load balancing.
//!
//! Customers arrive with an item count and are routed to the checkout
//! counter with the fewest total items. A min-heap of per-counter load
//! records makes each assignment O(log n); ties go to the lowest counter
//! index, so every arrival sequence has exactly one outcome.
//!
//! # Modules
//!
//! - **`heap`**: Binary min-heap with a pluggable ordering rule
//! - **`models`**: `LoadRecord`, `CounterQueue`, snapshots and updates
//! - **`checkout`**: Assigner, observer-driven system, baseline, shared handle, KPIs
//! - **`validation`**: Input boundary (item counts, counter counts)
//! - **`simulation`**: Seeded arrival streams and policy runs
//! - **`render`**: Plain-text renderer
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use u_checkout::checkout::{CheckoutSystem, NullObserver};
//!
//! let mut system = CheckoutSystem::new(3, NullObserver).unwrap();
//! let chosen: Vec<usize> = [5, 3, 1, 2, 10]
//!     .into_iter()
//!     .map(|n| system.add_customer(n).unwrap().counter_index)
//!     .collect();
//! assert_eq!(chosen, vec![0, 1, 2, 2, 1]);
//! ```

pub mod checkout;
pub mod error;
pub mod heap;
pub mod logging;
pub mod models;
pub mod render;
pub mod simulation;
pub mod validation;

pub use error::CheckoutError;
