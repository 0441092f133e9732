//! NEON block classification for the integer partition kernel.
//!
//! One 128-bit load compares 4 i32 lanes against the broadcast pivot, then
//! horizontal min/max reductions collapse the comparison into a block verdict.

use std::arch::aarch64::*;

use super::BlockClass;

/// Compares 4 lanes at `ptr` against `pivot`.
///
/// # Safety
///
/// The CPU must support NEON and `ptr` must point to at least 4 valid i32
/// values. No alignment requirement.
#[target_feature(enable = "neon")]
pub unsafe fn classify_block(ptr: *const i32, pivot: i32) -> BlockClass {
    let values = vld1q_s32(ptr);
    let pivot_vec = vdupq_n_s32(pivot);

    // All-ones lanes where value > pivot.
    let gt = vcgtq_s32(values, pivot_vec);

    if vmaxvq_u32(gt) == 0 {
        BlockClass::AllLe
    } else if vminvq_u32(gt) == u32::MAX {
        BlockClass::NoneLe
    } else {
        BlockClass::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_block_all_cases() {
        if !std::arch::is_aarch64_feature_detected!("neon") {
            return;
        }

        let below = [1i32, 2, 3, 4];
        let above = [11i32, 12, 13, 14];
        let mixed = [1i32, 12, 3, 14];

        unsafe {
            assert_eq!(classify_block(below.as_ptr(), 10), BlockClass::AllLe);
            assert_eq!(classify_block(above.as_ptr(), 10), BlockClass::NoneLe);
            assert_eq!(classify_block(mixed.as_ptr(), 10), BlockClass::Mixed);
            assert_eq!(classify_block(below.as_ptr(), 4), BlockClass::AllLe);
        }
    }
}
