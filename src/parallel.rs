//! Parallel sort: independent chunk sorts, then doubling-width merge rounds.
//!
//! Phase one hands cache-sized chunks to the rayon pool; phase two repeatedly
//! merges neighbouring runs, with each round's merges again running in
//! parallel. Pairing a data chunk with the matching scratch chunk gives every
//! merge a disjoint mutable window, so no round needs locking. Requires a
//! scratch lease covering the input; without one the caller falls back to a
//! sequential kernel.

use log::debug;
use rayon::prelude::*;

use crate::flags::SortFlags;
use crate::kernels::insertion::insertion_sort;
use crate::kernels::introsort::introsort;
use crate::kernels::mergesort::merge;
use crate::kernels::SortItem;
use crate::pool::{PoolItem, ScratchLease, ScratchPool};
use crate::runtime::runtime;

/// Floor on the per-chunk element count; below this the thread handoff costs
/// more than the sort.
const MIN_CHUNK: usize = 4096;

fn chunk_size() -> usize {
    let thresholds = &runtime().thresholds;
    thresholds
        .cache_optimal_elements
        .max(thresholds.insertion_threshold * 8)
        .max(MIN_CHUNK)
}

/// Sorts `data` across the rayon pool. Returns `false` when the input is too
/// small to split or no scratch could be leased; `data` is untouched then.
pub fn parallel_sort<T: SortItem + PoolItem>(
    data: &mut [T],
    pool: &'static ScratchPool<T>,
    flags: SortFlags,
) -> bool {
    let chunk = chunk_size();
    if data.len() <= chunk {
        return false;
    }

    let mut lease = match ScratchLease::acquire(pool, data) {
        Some(lease) => lease,
        None => return false,
    };

    let len = data.len();
    let insertion_threshold = runtime().thresholds.insertion_threshold;
    debug!(
        "parallel sort of {} elements in {} chunks of up to {}",
        len,
        len.div_ceil(chunk),
        chunk
    );

    data.par_chunks_mut(chunk).for_each(|run| {
        if run.len() <= insertion_threshold {
            insertion_sort(run);
        } else {
            introsort(run, flags);
        }
    });

    let scratch = &mut lease.as_mut_slice()[..len];
    let mut width = chunk;
    while width < len {
        let span = width * 2;
        data.par_chunks_mut(span)
            .zip(scratch.par_chunks_mut(span))
            .for_each(|(pair, staging)| {
                // A lone trailing run, or two runs already in order, needs no
                // merge this round.
                if pair.len() > width && pair[width - 1] > pair[width] {
                    let right = pair.len();
                    merge(pair, staging, 0, width, right);
                }
            });
        width = span;
    }
    true
}
