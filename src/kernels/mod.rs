//! Sequential sorting kernels.
//!
//! All comparison kernels are generic over [`SortItem`]; the trait's
//! `partition` hook is the seam where the integer specialization swaps in the
//! vectorized block comparison. Radix and counting sort are type-specific.

pub mod counting;
pub mod heap;
pub mod insertion;
pub mod introsort;
pub mod mergesort;
pub mod radix;

use crate::flags::SortFlags;
use crate::runtime::runtime;
use crate::simd;

/// Minimum range length before the vectorized partition pays for itself.
const SIMD_PARTITION_MIN: usize = 32;

/// Element types the comparison kernels operate on.
///
/// The default `partition` is the scalar median-of-three Lomuto partition;
/// implementations may substitute an accelerated strategy as long as the
/// result is identical.
pub trait SortItem: Copy + PartialOrd + Send + Sync + 'static {
    /// Partitions `data` around a pivot, returning the pivot's final index.
    ///
    /// Requires `data.len() >= 2`.
    fn partition(data: &mut [Self], flags: SortFlags) -> usize {
        let _ = flags;
        introsort::scalar_partition(data)
    }
}

impl SortItem for i32 {
    fn partition(data: &mut [i32], flags: SortFlags) -> usize {
        let hardware = &runtime().hardware;
        let allow_simd = hardware.has_simd
            && (flags.contains(SortFlags::FORCE_SIMD)
                || flags.contains(SortFlags::PREFER_THROUGHPUT));

        if allow_simd && data.len() >= SIMD_PARTITION_MIN {
            return simd::partition_i32(data, hardware.simd_level);
        }
        introsort::scalar_partition(data)
    }
}

impl SortItem for f32 {}

impl SortItem for u8 {}
