//! Strided presortedness probe.
//!
//! Reads a bounded number of evenly spaced element pairs and counts the
//! inversions among them. The verdict steers the top-level strategy choice
//! toward insertion sort for inputs that are already close to sorted; a wrong
//! verdict costs performance, never correctness, so the probe stays cheap and
//! deliberately ignores disorder between sample points.

use crate::kernels::SortItem;

/// Pairs needed before the probe will commit to a verdict.
const MIN_SAMPLES: usize = 8;

/// Inputs shorter than this are handed to insertion sort regardless.
const MIN_PROBE_LEN: usize = 32;

/// Returns `true` when fewer than one in ten sampled strides is inverted.
///
/// `sample_hint` bounds how many pairs are inspected; the calibrated value in
/// [`crate::thresholds::Thresholds::sample_size`] is the usual argument.
pub fn nearly_sorted<T: SortItem>(data: &[T], sample_hint: usize) -> bool {
    if data.len() < MIN_PROBE_LEN {
        return false;
    }

    let samples = sample_hint.min(data.len() / 2);
    if samples < MIN_SAMPLES {
        return false;
    }

    let step = (data.len() / samples).max(1);
    let mut observed = 0usize;
    let mut inversions = 0usize;

    let mut i = 0;
    while i + step < data.len() && observed < samples {
        if data[i] > data[i + step] {
            inversions += 1;
        }
        observed += 1;
        i += step;
    }

    if observed == 0 {
        return false;
    }
    inversions * 10 < observed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sorted_input_is_detected() {
        let data: Vec<i32> = (0..10_000).collect();
        assert!(nearly_sorted(&data, 128));
    }

    #[test]
    fn test_reverse_input_is_rejected() {
        let data: Vec<i32> = (0..10_000).rev().collect();
        assert!(!nearly_sorted(&data, 128));
    }

    #[test]
    fn test_random_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(51);
        let data: Vec<i32> = (0..10_000).map(|_| rng.random_range(0..1_000_000)).collect();
        assert!(!nearly_sorted(&data, 128));
    }

    #[test]
    fn test_light_local_disorder_passes() {
        // Swap a handful of adjacent pairs in an otherwise sorted run.
        let mut data: Vec<i32> = (0..10_000).collect();
        for i in [100usize, 2000, 5000, 9000] {
            data.swap(i, i + 1);
        }
        assert!(nearly_sorted(&data, 128));
    }

    #[test]
    fn test_short_inputs_never_qualify() {
        let data: Vec<i32> = (0..31).collect();
        assert!(!nearly_sorted(&data, 128));
        assert!(!nearly_sorted(&data[..0], 128));
    }

    #[test]
    fn test_tiny_hint_never_qualifies() {
        let data: Vec<i32> = (0..1000).collect();
        assert!(!nearly_sorted(&data, 4));
    }

    #[test]
    fn test_stride_blind_spot() {
        // Disorder confined to the gaps between sample points goes unseen.
        // The probe only promises a cheap estimate, so this is expected.
        let len = 10_000usize;
        let samples = 128usize.min(len / 2);
        let step = len / samples;
        let mut data: Vec<i32> = (0..len as i32).collect();
        for chunk in data.chunks_mut(step) {
            chunk[1..].reverse();
        }
        assert!(nearly_sorted(&data, 128));
    }
}
