use core::num::NonZeroUsize;

/// Sorts `a` ascending, in place, through a d-ary max-heap.
///
/// Builds the heap over the whole slice, then repeatedly swaps the root
/// (the current maximum) behind a shrinking bound and restores the heap
/// over the remainder.
pub fn d_heapsort<T: Ord>(a: &mut [T], d: NonZeroUsize) {
    build_max_dheap(a, d);
    for end in (1..a.len()).rev() {
        a.swap(0, end);
        max_heapify(a, 0, end, d);
    }
}

/// Rearranges `a` into a d-ary max-heap, bottom up.
pub fn build_max_dheap<T: Ord>(a: &mut [T], d: NonZeroUsize) {
    let n = a.len();
    if n < 2 {
        return;
    }
    // greatest index whose first child d*i + 1 is still in bounds
    let last_parent = (n - 2) / d.get();
    for i in (0..=last_parent).rev() {
        max_heapify(a, i, n, d);
    }
}

/// Sifts `a[root]` down within `a[..bound]` until it is at least as large
/// as each of its children.
///
/// Every subtree below `root` must already be max-ordered.
fn max_heapify<T: Ord>(a: &mut [T], mut root: usize, bound: usize, d: NonZeroUsize) {
    debug_assert!(bound <= a.len());
    while let Some(child) = largest_child(a, root, bound, d) {
        if a[child] <= a[root] {
            break;
        }
        a.swap(root, child);
        root = child;
    }
}

/// Index of the largest child of `index` below `bound`, the first child
/// on ties, `None` at a leaf.
fn largest_child<T: Ord>(a: &[T], index: usize, bound: usize, d: NonZeroUsize) -> Option<usize> {
    let d = d.get();
    let first = index.saturating_mul(d).saturating_add(1);
    if first >= bound {
        return None;
    }
    let end = first.saturating_add(d).min(bound);
    let mut largest = first;
    for child in first + 1..end {
        if a[child] > a[largest] {
            largest = child;
        }
    }
    Some(largest)
}
