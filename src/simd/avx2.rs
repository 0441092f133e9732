//! AVX2 block classification for the integer partition kernel.
//!
//! One 256-bit load compares 8 i32 lanes against the broadcast pivot. The
//! partition loop only needs to know whether a block is entirely on one side
//! of the pivot, so the comparison result is reduced to a lane mask.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::BlockClass;

/// Compares 8 lanes at `ptr` against `pivot`.
///
/// # Safety
///
/// The CPU must support AVX2 and `ptr` must point to at least 8 valid i32
/// values. No alignment requirement (unaligned load).
#[target_feature(enable = "avx2")]
pub unsafe fn classify_block(ptr: *const i32, pivot: i32) -> BlockClass {
    let values = _mm256_loadu_si256(ptr as *const __m256i);
    let pivot_vec = _mm256_set1_epi32(pivot);

    // Lane mask bit set where value > pivot.
    let gt = _mm256_cmpgt_epi32(values, pivot_vec);
    let mask = _mm256_movemask_ps(_mm256_castsi256_ps(gt));

    match mask {
        0x00 => BlockClass::AllLe,
        0xFF => BlockClass::NoneLe,
        _ => BlockClass::Mixed,
    }
}
