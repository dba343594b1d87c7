//! Plain-text renderer.
//!
//! Writes counter changes as they happen. Only the delta for the changed
//! counter is written; the counter most recently updated is marked with `*`.

use std::io::{self, Write};

use tracing::warn;

use crate::checkout::CheckoutObserver;
use crate::models::CounterUpdate;

/// `"1 item"`, `"3 items"`.
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// A `CheckoutObserver` that writes to any `io::Write`.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    highlighted: Option<usize>,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            highlighted: None,
        }
    }

    /// Counter currently highlighted.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_initialized(&mut self, counter_count: usize) -> io::Result<()> {
        for index in 0..counter_count {
            writeln!(
                self.out,
                "  Counter {}: 0 customers | Total items: 0",
                index + 1
            )?;
        }
        self.out.flush()
    }

    fn write_update(&mut self, update: &CounterUpdate) -> io::Result<()> {
        for &items in &update.new_entries {
            writeln!(self.out, "    + {}", pluralize(u64::from(items), "item"))?;
        }
        writeln!(
            self.out,
            "* Counter {}: {} | Total items: {}",
            update.counter_index + 1,
            pluralize(update.customer_count as u64, "customer"),
            update.total_items
        )?;
        self.out.flush()
    }
}

impl<W: Write> CheckoutObserver for TextRenderer<W> {
    fn on_system_initialized(&mut self, counter_count: usize) {
        self.highlighted = None;
        if let Err(err) = self.write_initialized(counter_count) {
            warn!(error = %err, "failed to render counters");
        }
    }

    fn on_assignment_changed(&mut self, update: &CounterUpdate) {
        self.highlighted = Some(update.counter_index);
        if let Err(err) = self.write_update(update) {
            warn!(error = %err, counter = update.counter_index, "failed to render update");
        }
    }
}
