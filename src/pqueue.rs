use core::cmp::Reverse;
use core::num::NonZeroUsize;

use crate::heap::DHeap;

/// Max-oriented priority queue over a single [`DHeap`].
///
/// The heap is min-ordered, so elements are stored wrapped in [`Reverse`];
/// its root is then the genuine maximum.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: DHeap<Reverse<T>>,
}

impl<T: Ord> PriorityQueue<T> {
    #[must_use]
    pub const fn new(d: NonZeroUsize) -> Self {
        Self { heap: DHeap::new(d) }
    }

    #[must_use]
    pub fn with_capacity(d: NonZeroUsize, capacity: usize) -> Self {
        Self {
            heap: DHeap::with_capacity(d, capacity),
        }
    }

    #[must_use]
    pub const fn branching(&self) -> NonZeroUsize {
        self.heap.branching()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn insert(&mut self, value: T) {
        self.heap.insert(Reverse(value));
    }

    /// The largest element, `None` when empty.
    #[must_use]
    pub fn maximum(&self) -> Option<&T> {
        self.heap.minimum().map(|Reverse(v)| v)
    }

    /// Removes and returns the largest element, `None` when empty.
    pub fn extract_max(&mut self) -> Option<T> {
        self.heap.extract_min().map(|Reverse(v)| v)
    }

    /// Same removal as [`Self::extract_max`], phrased as a deletion.
    pub fn delete_max(&mut self) -> Option<T> {
        self.extract_max()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the queue untouched when nothing matches.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.heap.iter().position(|Reverse(v)| v == value) {
            Some(index) => {
                self.heap.remove_at(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    fn arity(d: usize) -> NonZeroUsize {
        NonZeroUsize::new(d).unwrap()
    }

    #[test]
    fn test_extracts_descending() {
        let mut queue = PriorityQueue::new(arity(4));
        for key in [5, 3, 8, 1, 9, 2] {
            queue.insert(key);
        }
        let mut drawn = Vec::new();
        while let Some(key) = queue.extract_max() {
            drawn.push(key);
        }
        assert_eq!(drawn, [9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_maximum_peeks_at_largest() {
        let mut queue = PriorityQueue::new(arity(3));
        assert_eq!(queue.maximum(), None);
        queue.insert(2);
        queue.insert(11);
        queue.insert(7);
        assert_eq!(queue.maximum(), Some(&11));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_delete_max_drains_like_extract() {
        let mut queue = PriorityQueue::new(arity(2));
        for key in [4, 6, 6] {
            queue.insert(key);
        }
        assert_eq!(queue.delete_max(), Some(6));
        assert_eq!(queue.delete_max(), Some(6));
        assert_eq!(queue.delete_max(), Some(4));
        assert_eq!(queue.delete_max(), None);
        assert_eq!(queue.delete_max(), None);
    }

    #[test]
    fn test_delete_by_value() {
        let mut queue = PriorityQueue::new(arity(4));
        for key in [5, 3, 8, 1, 9, 2] {
            queue.insert(key);
        }
        assert!(queue.delete(&8));
        assert!(!queue.delete(&8));
        assert!(!queue.delete(&42));

        let mut drawn = Vec::new();
        while let Some(key) = queue.extract_max() {
            drawn.push(key);
        }
        assert_eq!(drawn, [9, 5, 3, 2, 1]);
    }

    #[test]
    fn test_agrees_with_sorted_input() {
        let mut rng = StdRng::seed_from_u64(14);
        for d in 1..=6 {
            let keys: Vec<u32> = (0..150).map(|_| rng.gen_range(0..30)).collect();

            let mut queue = PriorityQueue::with_capacity(arity(d), keys.len());
            for &key in &keys {
                queue.insert(key);
            }

            let mut drawn = Vec::with_capacity(keys.len());
            while let Some(key) = queue.extract_max() {
                drawn.push(key);
            }

            let mut expected = keys;
            expected.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(drawn, expected);
        }
    }
}
