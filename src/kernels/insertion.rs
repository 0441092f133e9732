//! Shift-based insertion sort.
//!
//! The recursion floor for every other comparison kernel, the chunk floor for
//! the parallel phase, and the fast path for nearly sorted inputs. Stable.

use super::SortItem;

pub fn insertion_sort<T: SortItem>(data: &mut [T]) {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > value {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_small_arrays() {
        let mut data = vec![5i32, 1, 4, 2, 3];
        insertion_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);

        let mut floats = vec![2.5f32, -1.0, 0.0, 2.4];
        insertion_sort(&mut floats);
        assert_eq!(floats, vec![-1.0, 0.0, 2.4, 2.5]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: Vec<i32> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42i32];
        insertion_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_already_sorted_is_untouched() {
        let mut data: Vec<i32> = (0..100).collect();
        let expected = data.clone();
        insertion_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_duplicates() {
        let mut data = vec![3i32, 1, 3, 1, 3, 1];
        insertion_sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 3]);
    }
}
