//! Checkout domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `LoadRecord` | Heap entry: counter identity plus current total items |
//! | `CounterQueue` | Item counts routed to one counter, with a render cursor |
//! | `CounterSnapshot` | Read-only view of a counter for reporting |
//! | `CounterUpdate` | Incremental change handed to a renderer |

mod load;
mod queue;

pub use load::LoadRecord;
pub use queue::{CounterQueue, CounterSnapshot, CounterUpdate};
