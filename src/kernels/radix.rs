//! Least-significant-digit radix sort for `i32`.
//!
//! Keys are rebased against the minimum value so the digit passes run over
//! unsigned magnitudes; eight bits per pass, and passes that the value range
//! does not reach are never executed. Needs two working arrays the size of the
//! input, so it declines (returns `false`) when those cannot be allocated.

use log::warn;

const DIGIT_BITS: u32 = 8;
const BINS: usize = 1 << DIGIT_BITS;

/// Sorts `data` without comparisons. Returns `false` when the working arrays
/// could not be allocated; `data` is untouched in that case.
pub fn radix_sort_i32(data: &mut [i32]) -> bool {
    if data.len() <= 1 {
        return true;
    }

    let mut min = data[0];
    let mut max = data[0];
    for &value in data.iter() {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    if min == max {
        return true;
    }

    // Rebase in 64-bit so `i32::MIN` cannot overflow; the span of any i32
    // range fits in a u32 key.
    let base = min as i64;
    let span = (max as i64 - base) as u64;
    let significant = 64 - span.leading_zeros();
    let passes = significant.div_ceil(DIGIT_BITS).max(1);

    let mut keys: Vec<u32> = Vec::new();
    let mut spill: Vec<u32> = Vec::new();
    if keys.try_reserve_exact(data.len()).is_err()
        || spill.try_reserve_exact(data.len()).is_err()
    {
        warn!(
            "radix working arrays for {} elements could not be allocated",
            data.len()
        );
        return false;
    }
    keys.extend(data.iter().map(|&v| (v as i64 - base) as u32));
    spill.resize(data.len(), 0);

    for pass in 0..passes {
        let shift = pass * DIGIT_BITS;
        let mut offsets = [0usize; BINS];
        for &key in &keys {
            offsets[((key >> shift) & 0xFF) as usize] += 1;
        }

        let mut running = 0;
        for slot in offsets.iter_mut() {
            let count = *slot;
            *slot = running;
            running += count;
        }

        // Forward scatter from exclusive prefix sums keeps equal digits in
        // arrival order.
        for &key in &keys {
            let bin = ((key >> shift) & 0xFF) as usize;
            spill[offsets[bin]] = key;
            offsets[bin] += 1;
        }
        std::mem::swap(&mut keys, &mut spill);
    }

    for (dst, &key) in data.iter_mut().zip(keys.iter()) {
        *dst = (key as i64 + base) as i32;
    }
    true
}
