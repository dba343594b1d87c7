use proptest::prelude::*;

use u_checkout::checkout::{CheckoutSystem, CounterAssigner, LinearScanAssigner, RecordingObserver};
use u_checkout::heap::{Ascending, LeastLoaded, MinHeap};
use u_checkout::models::LoadRecord;

#[derive(Debug, Clone)]
enum HeapOp {
    Insert(u64, usize),
    Extract,
}

fn heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        3 => (0..50u64, 0..1_000usize).prop_map(|(total, index)| HeapOp::Insert(total, index)),
        2 => Just(HeapOp::Extract),
    ]
}

#[test]
fn worked_example_three_counters() {
    let mut assigner = CounterAssigner::new(3).unwrap();

    assert_eq!(assigner.add_customer(5).unwrap(), 0);
    assert_eq!(assigner.add_customer(3).unwrap(), 1);
    let first = assigner.render_delta(1).unwrap().to_vec();
    assert_eq!(assigner.add_customer(1).unwrap(), 2);
    assert_eq!(assigner.add_customer(2).unwrap(), 2);
    assert_eq!(assigner.add_customer(10).unwrap(), 1);
    let second = assigner.render_delta(1).unwrap().to_vec();

    assert_eq!(first, vec![3]);
    assert_eq!(second, vec![10]);
    assert_eq!(assigner.total_items(0), Some(5));
    assert_eq!(assigner.total_items(1), Some(13));
    assert_eq!(assigner.total_items(2), Some(3));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn heap_invariant_holds_after_any_ops(ops in prop::collection::vec(heap_op(), 0..200)) {
        let mut heap = MinHeap::new(LeastLoaded);
        let mut mirror: Vec<(u64, usize)> = Vec::new();

        for op in ops {
            match op {
                HeapOp::Insert(total, index) => {
                    heap.insert(LoadRecord::new(index).with_total_items(total));
                    mirror.push((total, index));
                }
                HeapOp::Extract => {
                    mirror.sort();
                    let expected = if mirror.is_empty() { None } else { Some(mirror.remove(0)) };
                    let got = heap
                        .extract_min()
                        .map(|r| (r.total_items, r.counter_index()));
                    prop_assert_eq!(got, expected);
                }
            }
            prop_assert!(heap.is_valid());
            prop_assert_eq!(heap.len(), mirror.len());
        }
    }

    #[test]
    fn heap_extracts_sorted(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = MinHeap::new(Ascending);
        for &v in &values {
            heap.insert(v);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| heap.extract_min()).collect();
        let mut sorted = values.clone();
        sorted.sort();
        prop_assert_eq!(drained, sorted);
    }

    #[test]
    fn assigner_conserves_items_and_heap_size(
        counters in 1..12usize,
        arrivals in prop::collection::vec(1..100u32, 0..300),
    ) {
        let mut assigner = CounterAssigner::new(counters).unwrap();
        for &n in &arrivals {
            assigner.add_customer(n).unwrap();
            prop_assert_eq!(assigner.heap_size(), counters);
            prop_assert!(assigner.heap_is_valid());
        }
        for counter in assigner.snapshot() {
            let sum: u64 = counter.queue.iter().map(|&n| u64::from(n)).sum();
            prop_assert_eq!(counter.total_items, sum);
        }
        let customers: usize = assigner.snapshot().iter().map(|c| c.customers).sum();
        prop_assert_eq!(customers, arrivals.len());
    }

    #[test]
    fn each_arrival_goes_to_a_least_loaded_counter(
        counters in 1..10usize,
        arrivals in prop::collection::vec(1..50u32, 0..200),
    ) {
        let mut assigner = CounterAssigner::new(counters).unwrap();
        let mut scan = LinearScanAssigner::new(counters).unwrap();

        for &n in &arrivals {
            let totals = scan.totals().to_vec();
            let min = *totals.iter().min().unwrap();
            let lowest_min_index = totals.iter().position(|&t| t == min).unwrap();

            let chosen = assigner.add_customer(n).unwrap();
            prop_assert_eq!(chosen, lowest_min_index);
            prop_assert_eq!(scan.add_customer(n).unwrap(), chosen);
        }
        prop_assert_eq!(assigner.snapshot(), scan.snapshot());
    }

    #[test]
    fn equal_arrivals_fill_counters_in_index_order(counters in 1..20usize, items in 1..1_000u32) {
        let mut assigner = CounterAssigner::new(counters).unwrap();
        let chosen: Vec<usize> = (0..counters)
            .map(|_| assigner.add_customer(items).unwrap())
            .collect();
        prop_assert_eq!(chosen, (0..counters).collect::<Vec<_>>());
    }

    #[test]
    fn render_deltas_reconstruct_queues(
        counters in 1..8usize,
        steps in prop::collection::vec((1..30u32, any::<bool>(), 0..8usize), 0..200),
    ) {
        let mut assigner = CounterAssigner::new(counters).unwrap();
        let mut rendered: Vec<Vec<u32>> = vec![Vec::new(); counters];

        for (items, render_now, target) in steps {
            let chosen = assigner.add_customer(items).unwrap();
            if render_now {
                let delta = assigner.render_delta(chosen).unwrap().to_vec();
                rendered[chosen].extend(delta);
            }
            let other = target % counters;
            let delta = assigner.render_delta(other).unwrap().to_vec();
            rendered[other].extend(delta);
            prop_assert!(assigner.render_cursor(other) == assigner.customer_count(other));
        }
        for (index, rendered_queue) in rendered.iter_mut().enumerate() {
            rendered_queue.extend(assigner.render_delta(index).unwrap().iter().copied());
            prop_assert_eq!(Some(rendered_queue.as_slice()), assigner.queue(index));
        }
    }

    #[test]
    fn system_notifications_match_state(
        counters in 1..6usize,
        arrivals in prop::collection::vec(1..40u32, 0..100),
    ) {
        let mut system = CheckoutSystem::new(counters, RecordingObserver::new()).unwrap();
        for &n in &arrivals {
            let update = system.add_customer(n).unwrap();
            prop_assert_eq!(update.new_entries, vec![n]);
        }
        let snapshot = system.snapshot();
        let observer = system.into_observer();
        prop_assert_eq!(&observer.initialized, &vec![counters]);
        prop_assert_eq!(observer.updates.len(), arrivals.len());
        for counter in snapshot {
            prop_assert_eq!(observer.rendered_queue(counter.index), counter.queue);
        }
    }
}
