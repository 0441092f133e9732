//! End-to-end correctness of the public sorting surface.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vexsort::{
    current_thresholds, sort, sort_bytes, sort_float32, sort_int32, SortBuffer, SortFlags,
    SortRequest,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_sorted(data: &[i32]) {
    assert!(
        data.windows(2).all(|w| w[0] <= w[1]),
        "output is not in ascending order"
    );
}

fn assert_permutation(before: &[i32], after: &[i32]) {
    assert_eq!(before.len(), after.len());
    let mut counts: HashMap<i32, i64> = HashMap::new();
    for &v in before {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in after {
        *counts.entry(v).or_insert(0) -= 1;
    }
    assert!(
        counts.values().all(|&c| c == 0),
        "output is not a permutation of the input"
    );
}

fn random_ints(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(i32::MIN..i32::MAX)).collect()
}

#[test]
fn test_all_flag_combinations_sort_correctly() {
    init_logging();
    let flag_sets = [
        SortFlags::NONE,
        SortFlags::ALLOW_PARALLEL,
        SortFlags::ALLOW_RADIX,
        SortFlags::ALLOW_PARALLEL | SortFlags::ALLOW_RADIX,
        SortFlags::FORCE_STABLE,
        SortFlags::PREFER_EFFICIENCY | SortFlags::ALLOW_PARALLEL,
        SortFlags::FORCE_SIMD | SortFlags::ALLOW_RADIX | SortFlags::ALLOW_PARALLEL,
    ];

    for (i, &flags) in flag_sets.iter().enumerate() {
        let original = random_ints(100 + i as u64, 50_000);
        let mut data = original.clone();
        sort(SortRequest {
            buffer: SortBuffer::Int32(&mut data),
            flags,
        })
        .unwrap();

        assert_sorted(&data);
        assert_permutation(&original, &data);
    }
}

#[test]
fn test_insertion_threshold_boundaries() {
    let threshold = current_thresholds().insertion_threshold;
    for len in [threshold - 1, threshold, threshold + 1] {
        let original = random_ints(len as u64, len);
        let mut data = original.clone();
        sort_int32(&mut data).unwrap();
        assert_sorted(&data);
        assert_permutation(&original, &data);
    }
}

#[test]
fn test_radix_threshold_boundaries() {
    let threshold = current_thresholds().radix_threshold;
    for len in [threshold - 1, threshold, threshold + 1] {
        let original = random_ints(len as u64, len);
        let mut data = original.clone();
        sort(SortRequest {
            buffer: SortBuffer::Int32(&mut data),
            flags: SortFlags::ALLOW_RADIX,
        })
        .unwrap();
        assert_sorted(&data);
        assert_permutation(&original, &data);
    }
}

#[test]
fn test_parallel_threshold_boundaries() {
    let threshold = current_thresholds().parallel_threshold;
    for len in [threshold - 1, threshold, threshold + 1] {
        let mut data: Vec<i32> = (0..len as i32).rev().collect();
        sort(SortRequest {
            buffer: SortBuffer::Int32(&mut data),
            flags: SortFlags::ALLOW_PARALLEL,
        })
        .unwrap();
        assert_sorted(&data);
    }
}

#[test]
fn test_radix_and_introsort_agree() {
    let len = current_thresholds().radix_threshold + 1;
    let original = random_ints(7, len);

    let mut via_radix = original.clone();
    sort(SortRequest {
        buffer: SortBuffer::Int32(&mut via_radix),
        flags: SortFlags::ALLOW_RADIX,
    })
    .unwrap();

    let mut via_comparison = original.clone();
    sort(SortRequest {
        buffer: SortBuffer::Int32(&mut via_comparison),
        flags: SortFlags::PREFER_THROUGHPUT,
    })
    .unwrap();

    assert_eq!(via_radix, via_comparison);
    assert_sorted(&via_radix);
}

#[test]
fn test_extreme_values_sort_on_every_integer_path() {
    let seed = [5i32, -3, 0, i32::MAX, i32::MIN, -1];
    let expected = [i32::MIN, -3, -1, 0, 5, i32::MAX];

    let mut small = seed.to_vec();
    sort_int32(&mut small).unwrap();
    assert_eq!(small, expected);

    // Embed the extremes in a buffer long enough to qualify for radix.
    let len = current_thresholds().radix_threshold;
    let mut large = random_ints(8, len);
    large[..6].copy_from_slice(&seed);
    sort(SortRequest {
        buffer: SortBuffer::Int32(&mut large),
        flags: SortFlags::ALLOW_RADIX,
    })
    .unwrap();
    assert_sorted(&large);
    assert_eq!(large[0], i32::MIN);
    assert_eq!(large[len - 1], i32::MAX);
}

#[test]
fn test_idempotence() {
    let mut data = random_ints(9, 20_000);
    sort_int32(&mut data).unwrap();
    let once = data.clone();
    sort_int32(&mut data).unwrap();
    assert_eq!(data, once);
}

#[test]
fn test_nearly_sorted_inputs() {
    let mut data: Vec<i32> = (0..100_000).collect();
    for i in (0..data.len() - 1).step_by(5000) {
        data.swap(i, i + 1);
    }
    let original = data.clone();
    sort_int32(&mut data).unwrap();
    assert_sorted(&data);
    assert_permutation(&original, &data);
}

#[test]
fn test_float_buffers() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut data: Vec<f32> = (0..30_000).map(|_| rng.random_range(-1e6f32..1e6)).collect();
    sort_float32(&mut data).unwrap();
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_byte_buffers() {
    let mut rng = StdRng::seed_from_u64(11);
    let original: Vec<u8> = (0..70_000).map(|_| rng.random_range(0..=255)).collect();
    let mut data = original.clone();
    sort_bytes(&mut data).unwrap();

    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(data, expected);
}

#[test]
fn test_empty_and_singleton_every_kind() {
    for flags in [SortFlags::NONE, SortFlags::FORCE_STABLE, SortFlags::ALLOW_PARALLEL] {
        let mut ints: Vec<i32> = vec![];
        sort(SortRequest {
            buffer: SortBuffer::Int32(&mut ints),
            flags,
        })
        .unwrap();

        let mut one = vec![-9i32];
        sort(SortRequest {
            buffer: SortBuffer::Int32(&mut one),
            flags,
        })
        .unwrap();
        assert_eq!(one, vec![-9]);
    }

    let mut floats: Vec<f32> = vec![];
    sort_float32(&mut floats).unwrap();

    let mut bytes = vec![200u8];
    sort_bytes(&mut bytes).unwrap();
    assert_eq!(bytes, vec![200]);
}
