//! Introsort: quicksort with a recursion-depth bound.
//!
//! Pending ranges live on an explicit growable work list rather than the call
//! stack, so pathological pivot sequences cannot overflow anything. A range
//! that exhausts its depth budget switches to heap sort for that range only;
//! ranges at or below the insertion threshold go to insertion sort. The
//! in-place fallback of last resort: it needs no allocation beyond the work
//! list itself and never fails.

use crate::flags::SortFlags;
use crate::runtime::runtime;

use super::heap::heapsort;
use super::insertion::insertion_sort;
use super::SortItem;

/// Scalar median-of-three Lomuto partition.
///
/// Sorts the first/middle/last elements, parks the median at the end as the
/// pivot, then partitions against it. Returns the pivot's final index.
/// Requires `data.len() >= 2`.
pub fn scalar_partition<T: SortItem>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    let mid = data.len() / 2;

    if data[0] > data[mid] {
        data.swap(0, mid);
    }
    if data[mid] > data[last] {
        data.swap(mid, last);
    }
    if data[0] > data[mid] {
        data.swap(0, mid);
    }
    data.swap(mid, last);
    let pivot = data[last];

    let mut i = 0;
    for j in 0..last {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, last);
    i
}

pub fn introsort<T: SortItem>(data: &mut [T], flags: SortFlags) {
    if data.len() <= 1 {
        return;
    }

    let threshold = runtime().thresholds.insertion_threshold;
    let depth_limit = (2 * data.len().ilog2() as usize).max(1);

    let mut pending: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    pending.push((0, data.len(), depth_limit));

    while let Some((start, end, depth)) = pending.pop() {
        let range = &mut data[start..end];

        if range.len() <= threshold {
            insertion_sort(range);
            continue;
        }

        if depth == 0 {
            heapsort(range);
            continue;
        }

        let pivot = T::partition(range, flags);

        if pivot > 0 {
            pending.push((start, start + pivot, depth - 1));
        }
        if start + pivot + 1 < end {
            pending.push((start + pivot + 1, end, depth - 1));
        }
    }
}
