//! Unified sort entry point and algorithm selection.
//!
//! Selection walks a fixed order: the stability request, the nearly-sorted
//! probe, radix for large integer inputs, the parallel path for inputs above
//! the calibrated threshold, and finally in-place introsort. Every earlier
//! stage may decline (allocation failure, range not applicable, scratch
//! contention) and selection simply continues; introsort needs nothing and
//! always finishes the job. Allocation failures are therefore never surfaced
//! to the caller.

use std::cmp::Ordering;

use log::{debug, warn};

use crate::error::{invalid_argument, SortError};
use crate::flags::SortFlags;
use crate::kernels::counting::counting_sort_bytes;
use crate::kernels::insertion::insertion_sort;
use crate::kernels::introsort::introsort;
use crate::kernels::mergesort::stable_sort;
use crate::kernels::radix::radix_sort_i32;
use crate::kernels::SortItem;
use crate::parallel::parallel_sort;
use crate::pool::{PoolItem, ScratchPool, FLOAT_SCRATCH, INT_SCRATCH};
use crate::runtime::{default_flags, initialize, runtime};
use crate::sampler::nearly_sorted;

/// The buffer kinds the engine sorts natively.
///
/// Anything else goes through [`sort_with_comparator`].
pub enum SortBuffer<'a> {
    Int32(&'a mut [i32]),
    Float32(&'a mut [f32]),
    Bytes(&'a mut [u8]),
}

/// One sort invocation: the buffer plus behaviour flags.
///
/// [`SortFlags::NONE`] means "use the process-wide defaults"; see
/// [`crate::runtime::set_default_flags`].
pub struct SortRequest<'a> {
    pub buffer: SortBuffer<'a>,
    pub flags: SortFlags,
}

/// Sorts the request's buffer ascending.
///
/// Float buffers containing NaN are rejected before any element moves, since
/// no total order exists for them. Internal allocation failures never surface
/// here; a slower kernel finishes the sort and the call still succeeds.
pub fn sort(request: SortRequest<'_>) -> Result<(), SortError> {
    initialize();

    let flags = if request.flags.is_empty() {
        default_flags()
    } else {
        request.flags
    }
    .resolved();

    match request.buffer {
        SortBuffer::Int32(data) => {
            select_and_sort(data, &INT_SCRATCH, flags, Some(radix_sort_i32));
        }
        SortBuffer::Float32(data) => {
            if data.iter().any(|v| v.is_nan()) {
                return Err(invalid_argument("float buffer contains NaN"));
            }
            select_and_sort(data, &FLOAT_SCRATCH, flags, None);
        }
        SortBuffer::Bytes(data) => {
            counting_sort_bytes(data);
        }
    }
    Ok(())
}

fn select_and_sort<T: SortItem + PoolItem>(
    data: &mut [T],
    pool: &'static ScratchPool<T>,
    flags: SortFlags,
    radix: Option<fn(&mut [T]) -> bool>,
) {
    if data.len() <= 1 {
        return;
    }
    let thresholds = &runtime().thresholds;

    if flags.contains(SortFlags::FORCE_STABLE) {
        if stable_sort(data, pool) {
            return;
        }
        warn!(
            "stable sort scratch allocation failed, sorting {} elements with unstable introsort",
            data.len()
        );
        introsort(data, flags);
        return;
    }

    if nearly_sorted(data, thresholds.sample_size) {
        debug!("input judged nearly sorted, using insertion sort");
        insertion_sort(data);
        return;
    }

    if let Some(radix) = radix {
        if flags.contains(SortFlags::ALLOW_RADIX) && data.len() >= thresholds.radix_threshold {
            if radix(data) {
                return;
            }
            debug!(
                "radix sort declined for {} elements, continuing selection",
                data.len()
            );
        }
    }

    let mut parallel_at = thresholds.parallel_threshold;
    if flags.contains(SortFlags::PREFER_EFFICIENCY) {
        parallel_at *= 2;
    }
    if flags.contains(SortFlags::ALLOW_PARALLEL)
        && data.len() >= parallel_at
        && runtime().hardware.total_cores > 1
    {
        if parallel_sort(data, pool, flags) {
            return;
        }
        debug!(
            "parallel sort unavailable for {} elements, falling back to introsort",
            data.len()
        );
    }

    introsort(data, flags);
}

/// Sorts an `i32` buffer with the process-wide default flags.
pub fn sort_int32(data: &mut [i32]) -> Result<(), SortError> {
    sort(SortRequest {
        buffer: SortBuffer::Int32(data),
        flags: SortFlags::NONE,
    })
}

/// Sorts an `f32` buffer with the process-wide default flags, minus radix
/// (which has no float kernel).
pub fn sort_float32(data: &mut [f32]) -> Result<(), SortError> {
    sort(SortRequest {
        buffer: SortBuffer::Float32(data),
        flags: default_flags().without(SortFlags::ALLOW_RADIX),
    })
}

/// Sorts a byte buffer; always a single counting-sort pass.
pub fn sort_bytes(data: &mut [u8]) -> Result<(), SortError> {
    sort(SortRequest {
        buffer: SortBuffer::Bytes(data),
        flags: SortFlags::NONE,
    })
}

/// Comparator-driven sort for element types the engine has no kernel for.
///
/// Delegates to the standard unstable comparison sort; none of the flag-driven
/// strategies apply.
pub fn sort_with_comparator<T, F>(data: &mut [T], compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if std::mem::size_of::<T>() == 0 {
        return Err(invalid_argument("zero-sized element type"));
    }
    data.sort_unstable_by(compare);
    Ok(())
}
