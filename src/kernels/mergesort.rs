//! Stable top-down merge sort.
//!
//! Backs the `FORCE_STABLE` path and supplies the merge step reused by the
//! parallel combine rounds. Needs scratch covering the full input, leased from
//! the shared pool when possible; when no scratch can be obtained at all the
//! caller falls back to introsort.

use crate::pool::{PoolItem, ScratchLease, ScratchPool};
use crate::runtime::runtime;

use super::insertion::insertion_sort;
use super::SortItem;

/// Merges the sorted runs `data[left..mid]` and `data[mid..right]` in place,
/// using `buffer` (at least `mid - left` elements) as staging for the left run.
///
/// Ties take from the left run first, so the merge preserves relative order.
pub(crate) fn merge<T: SortItem>(
    data: &mut [T],
    buffer: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) {
    let staged = mid - left;
    buffer[..staged].copy_from_slice(&data[left..mid]);

    let mut i = 0;
    let mut j = mid;
    let mut out = left;
    while i < staged && j < right {
        if buffer[i] <= data[j] {
            data[out] = buffer[i];
            i += 1;
        } else {
            data[out] = data[j];
            j += 1;
        }
        out += 1;
    }
    while i < staged {
        data[out] = buffer[i];
        i += 1;
        out += 1;
    }
    // Any remainder of the right run is already in place.
}

fn sort_range<T: SortItem>(
    data: &mut [T],
    buffer: &mut [T],
    left: usize,
    right: usize,
    leaf: usize,
) {
    if right - left <= leaf {
        insertion_sort(&mut data[left..right]);
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(data, buffer, left, mid, leaf);
    sort_range(data, buffer, mid, right, leaf);

    // Runs that happen to already be in order need no merge pass.
    if data[mid - 1] <= data[mid] {
        return;
    }
    merge(data, buffer, left, mid, right);
}

/// Stable sort of `data` into `buffer`-assisted merges.
///
/// `buffer` must hold at least `data.len()` elements.
pub fn mergesort<T: SortItem>(data: &mut [T], buffer: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    debug_assert!(buffer.len() >= data.len());

    let leaf = runtime().thresholds.insertion_threshold.max(1);
    sort_range(data, buffer, 0, data.len(), leaf);
}

/// Stable sort using leased scratch. Returns `false` when no scratch of
/// sufficient size could be obtained; `data` is untouched in that case.
pub fn stable_sort<T: SortItem + PoolItem>(
    data: &mut [T],
    pool: &'static ScratchPool<T>,
) -> bool {
    if data.len() <= 1 {
        return true;
    }

    let mut lease = match ScratchLease::acquire(pool, data) {
        Some(lease) => lease,
        None => return false,
    };
    let len = data.len();
    mergesort(data, &mut lease.as_mut_slice()[..len]);
    true
}
