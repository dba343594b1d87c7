//! Binary min-heap with a pluggable ordering rule.
//!
//! Backs the least-loaded counter selection. Elements are owned by the
//! heap while inside it; `extract_min` moves the element out, so the caller
//! holds the only copy until it is inserted again.
//!
//! # Layout
//! Array representation: the children of slot `i` are `2i + 1` and `2i + 2`,
//! its parent is `(i - 1) / 2`.
//!
//! # Complexity
//! `insert` and `extract_min` are O(log n); `len`, `peek` are O(1).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

mod order;

pub use order::{Ascending, HeapOrder, LeastLoaded};

/// A min-heap over `T` ordered by `O`.
///
/// # Example
/// ```
/// use u_checkout::heap::{MinHeap, LeastLoaded};
/// use u_checkout::models::LoadRecord;
///
/// let mut heap = MinHeap::new(LeastLoaded);
/// heap.insert(LoadRecord::new(0).with_total_items(5));
/// heap.insert(LoadRecord::new(1).with_total_items(2));
///
/// let min = heap.extract_min().unwrap();
/// assert_eq!(min.counter_index(), 1);
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, O> {
    items: Vec<T>,
    order: O,
}

impl<T, O: HeapOrder<T>> MinHeap<T, O> {
    /// Creates an empty heap.
    pub fn new(order: O) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Adds an element, preserving the heap invariant.
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum element, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if self.items.len() > 1 {
            self.sift_down(0);
        }
        min
    }

    /// The minimum element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Backing storage in heap order (not sorted).
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Checks that no element precedes its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.order.precedes(&self.items[i], &self.items[parent])
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.precedes(&self.items[index], &self.items[parent]) {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.order.precedes(&self.items[left], &self.items[smallest]) {
                smallest = left;
            }
            if right < len && self.order.precedes(&self.items[right], &self.items[smallest]) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, O: HeapOrder<T> + Default> Default for MinHeap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}
