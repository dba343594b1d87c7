//! Checkout counter assignment.
//!
//! Routes arriving customers to the counter with the fewest total items
//! and reports per-counter changes to an injected renderer.
//!
//! # Components
//!
//! - **`CounterAssigner`**: heap-backed greedy policy with render cursors
//! - **`CheckoutSystem`**: assigner wired to a `CheckoutObserver`
//! - **`LinearScanAssigner`**: O(n) reference policy with identical choices
//! - **`SharedAssigner`**: mutex-guarded handle for concurrent arrivals
//! - **`CheckoutKpi`**: balance metrics over a snapshot
//!
//! # Tie-breaking
//!
//! Counters with equal load are ordered by index, so assignment sequences
//! are fully deterministic. Starting idle, the first n equal arrivals go to
//! counters `0, 1, ..., n-1`.

mod assigner;
mod baseline;
mod kpi;
mod observer;
mod shared;
mod system;

pub use assigner::CounterAssigner;
pub use baseline::LinearScanAssigner;
pub use kpi::CheckoutKpi;
pub use observer::{CheckoutObserver, NullObserver, RecordingObserver, TracingObserver};
pub use shared::SharedAssigner;
pub use system::CheckoutSystem;
