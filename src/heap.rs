use core::num::NonZeroUsize;
use core::slice;

/// Array-backed d-ary min-heap.
///
/// The tree is implicit: the children of the element at `i` live at
/// `d*i + 1 ..= d*i + d`, its parent at `(i - 1) / d`. The element at
/// every index compares less than or equal to each of its children.
#[derive(Debug, Clone)]
pub struct DHeap<T> {
    d: NonZeroUsize,
    heap: Vec<T>,
}

impl<T: Ord> DHeap<T> {
    #[must_use]
    pub const fn new(d: NonZeroUsize) -> Self {
        Self { d, heap: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(d: NonZeroUsize, capacity: usize) -> Self {
        Self {
            d,
            heap: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub const fn branching(&self) -> NonZeroUsize {
        self.d
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Elements in storage order, not sorted order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn insert(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// The smallest element, `None` when empty.
    #[must_use]
    pub fn minimum(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes and returns the smallest element, `None` when empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.heap.len() > 1 {
            let last = self.heap.len() - 1;
            self.heap.swap(0, last);
        }
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Same removal as [`Self::extract_min`], phrased as a deletion.
    pub fn delete_min(&mut self) -> Option<T> {
        self.extract_min()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` and leaves the heap untouched when nothing matches.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.heap.iter().position(|v| v == value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index` in storage order.
    pub(crate) fn remove_at(&mut self, index: usize) -> T {
        let removed = self.heap.swap_remove(index);
        if index < self.heap.len() {
            // the replacement can sit wrong in either direction; at most
            // one of the two passes moves it
            self.sift_down(index);
            self.sift_up(index);
        }
        removed
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / self.d.get();
            if self.heap[parent] <= self.heap[index] {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.smallest_child(index) {
            if self.heap[index] <= self.heap[child] {
                break;
            }
            self.heap.swap(index, child);
            index = child;
        }
    }

    /// Index of the smallest in-bounds child of `index`, the first child
    /// on ties, `None` at a leaf.
    fn smallest_child(&self, index: usize) -> Option<usize> {
        let d = self.d.get();
        let first = index.saturating_mul(d).saturating_add(1);
        if first >= self.heap.len() {
            return None;
        }
        let end = first.saturating_add(d).min(self.heap.len());
        let mut smallest = first;
        for child in first + 1..end {
            if self.heap[child] < self.heap[smallest] {
                smallest = child;
            }
        }
        Some(smallest)
    }
}
