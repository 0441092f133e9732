//! In-place binary max-heap sort.
//!
//! Used only when introsort exhausts its depth budget, guaranteeing the
//! O(n log n) worst case. Not stable.

use super::SortItem;

fn sift_down<T: SortItem>(data: &mut [T], count: usize, mut root: usize) {
    loop {
        let mut child = root * 2 + 1;
        if child >= count {
            break;
        }
        if child + 1 < count && data[child] < data[child + 1] {
            child += 1;
        }
        if data[root] >= data[child] {
            break;
        }
        data.swap(root, child);
        root = child;
    }
}

pub fn heapsort<T: SortItem>(data: &mut [T]) {
    let count = data.len();
    if count < 2 {
        return;
    }

    for i in (0..count / 2).rev() {
        sift_down(data, count, i);
    }

    for i in (1..count).rev() {
        data.swap(0, i);
        sift_down(data, i, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_sorts_random_input() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut data: Vec<i32> = (0..1000).map(|_| rng.random_range(-500..500)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        heapsort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_reverse_and_uniform() {
        let mut data: Vec<i32> = (0..257).rev().collect();
        heapsort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));

        let mut uniform = vec![9i32; 64];
        heapsort(&mut uniform);
        assert_eq!(uniform, vec![9; 64]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: Vec<f32> = vec![];
        heapsort(&mut empty);

        let mut one = vec![1.5f32];
        heapsort(&mut one);
        assert_eq!(one, vec![1.5]);
    }
}
