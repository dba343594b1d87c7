//! Generated checkout sessions.
//!
//! Drives a checkout policy with a seeded arrival stream and reports the
//! resulting balance.

mod config;
mod generator;

pub use config::SimulationConfig;
pub use generator::ArrivalGenerator;

use serde::Serialize;
use tracing::info;

use crate::checkout::{CheckoutKpi, CheckoutObserver, CheckoutSystem, LinearScanAssigner};
use crate::error::CheckoutError;
use crate::models::{CounterSnapshot, CounterUpdate};

/// Assignment policy used by a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Min-heap assigner with incremental rendering.
    #[default]
    Heap,
    /// Linear-scan reference assigner.
    Linear,
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Policy that produced the assignments.
    pub policy: Policy,
    /// Item counts in arrival order.
    pub arrivals: Vec<u32>,
    /// Chosen counter per arrival.
    pub assignments: Vec<usize>,
    /// Final counter state.
    pub counters: Vec<CounterSnapshot>,
    /// Balance metrics of the final state.
    pub kpi: CheckoutKpi,
}

/// Runs `config.customers` generated arrivals through `policy`, reporting
/// each change to `observer`.
pub fn run<O: CheckoutObserver>(
    config: &SimulationConfig,
    policy: Policy,
    mut observer: O,
) -> Result<SimulationReport, CheckoutError> {
    config.validate()?;
    let arrivals = ArrivalGenerator::from_config(config).take_arrivals(config.customers);

    let (assignments, counters) = match policy {
        Policy::Heap => {
            let mut system = CheckoutSystem::new(config.counters, &mut observer)?;
            let assignments = arrivals
                .iter()
                .map(|&n| system.add_customer(n).map(|u| u.counter_index))
                .collect::<Result<Vec<_>, _>>()?;
            (assignments, system.snapshot())
        }
        Policy::Linear => {
            let mut scan = LinearScanAssigner::new(config.counters)?;
            observer.on_system_initialized(config.counters);
            let mut assignments = Vec::with_capacity(arrivals.len());
            for &n in &arrivals {
                let index = scan.add_customer(n)?;
                observer.on_assignment_changed(&CounterUpdate {
                    counter_index: index,
                    new_entries: vec![n],
                    total_items: scan.totals()[index],
                    customer_count: scan.customer_count(index),
                });
                assignments.push(index);
            }
            (assignments, scan.snapshot())
        }
    };

    let kpi = CheckoutKpi::calculate(&counters);
    info!(
        ?policy,
        counters = config.counters,
        customers = config.customers,
        spread = kpi.spread,
        "simulation finished"
    );

    Ok(SimulationReport {
        policy,
        arrivals,
        assignments,
        counters,
        kpi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{NullObserver, RecordingObserver};

    #[test]
    fn test_policies_agree() {
        let config = SimulationConfig::default()
            .with_counters(4)
            .with_customers(200)
            .with_seed(2024);

        let heap = run(&config, Policy::Heap, NullObserver).unwrap();
        let linear = run(&config, Policy::Linear, NullObserver).unwrap();

        assert_eq!(heap.arrivals, linear.arrivals);
        assert_eq!(heap.assignments, linear.assignments);
        assert_eq!(heap.counters, linear.counters);
        assert_eq!(heap.kpi, linear.kpi);
    }

    #[test]
    fn test_observer_sees_every_arrival() {
        let config = SimulationConfig::default().with_customers(15);
        let mut observer = RecordingObserver::new();
        let report = run(&config, Policy::Heap, &mut observer).unwrap();

        assert_eq!(observer.initialized, vec![3]);
        assert_eq!(observer.updates.len(), 15);
        for counter in &report.counters {
            assert_eq!(observer.rendered_queue(counter.index), counter.queue);
        }
    }

    #[test]
    fn test_greedy_keeps_spread_below_max_item() {
        let config = SimulationConfig::default()
            .with_counters(5)
            .with_customers(500)
            .with_item_range(1, 10);
        let report = run(&config, Policy::Heap, NullObserver).unwrap();
        assert!(report.kpi.is_balanced_within(10));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_counters(0);
        assert!(run(&config, Policy::Heap, NullObserver).is_err());
    }
}
