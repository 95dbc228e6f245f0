//! Heap sort.
//!
//! Build a max-heap over the slice, then repeatedly swap the
//! root to the shrinking tail. O(n log n) worst case, in-place,
//! not stable. The build phase sifts down from the last parent,
//! which is O(n) total rather than the O(n log n) a naive
//! insert-one-at-a-time build costs.
//!
//! A BinaryHeap-backed version shows the std way: push
//! everything, pop everything. Same asymptotics, extra O(n)
//! space, and it exercises `Reverse` for the ascending order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Heap-sort exercise struct.
pub struct HeapSort;

impl HeapSort {
    /// In-place sift-down heap sort.
    pub fn sort<T: Ord>(values: &mut [T]) {
        let n = values.len();
        if n < 2 {
            return;
        }
        // heapify: last parent is (n-2)/2
        for root in (0..=(n - 2) / 2).rev() {
            Self::sift_down(values, root, n);
        }
        for end in (1..n).rev() {
            values.swap(0, end);
            Self::sift_down(values, 0, end);
        }
    }

    /// std BinaryHeap detour.
    pub fn sort_with_std_heap<T: Ord>(values: &mut Vec<T>) {
        let mut heap: BinaryHeap<Reverse<T>> = values.drain(..).map(Reverse).collect();
        while let Some(Reverse(smallest)) = heap.pop() {
            values.push(smallest);
        }
    }

    fn sift_down<T: Ord>(values: &mut [T], mut root: usize, end: usize) {
        loop {
            let left = 2 * root + 1;
            if left >= end {
                return;
            }
            let right = left + 1;
            let mut largest = root;
            if values[left] > values[largest] {
                largest = left;
            }
            if right < end && values[right] > values[largest] {
                largest = right;
            }
            if largest == root {
                return;
            }
            values.swap(root, largest);
            root = largest;
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![12, 11, 13, 5, 6, 7];
    println!("input:  {:?}", values);
    HeapSort::sort(&mut values);
    println!("sorted: {:?}", values);

    let mut via_std = vec![4, 10, 3, 5, 1];
    HeapSort::sort_with_std_heap(&mut via_std);
    println!("std heap: {:?}", via_std);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases() -> Vec<Vec<i32>> {
        vec![
            vec![12, 11, 13, 5, 6, 7],
            vec![],
            vec![1],
            vec![2, 1],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![6, 6, 6],
            vec![2, 9, 2, 9, 2],
        ]
    }

    #[test]
    fn test_both_versions_sort() {
        for case in cases() {
            let mut expected = case.clone();
            expected.sort();

            let mut a = case.clone();
            HeapSort::sort(&mut a);
            assert_eq!(a, expected, "sift-down failed on {:?}", case);

            let mut b = case.clone();
            HeapSort::sort_with_std_heap(&mut b);
            assert_eq!(b, expected, "std heap failed on {:?}", case);
        }
    }

    #[test]
    fn test_heap_property_after_heapify() {
        let mut values = vec![3, 9, 2, 1, 4, 5];
        let n = values.len();
        for root in (0..=(n - 2) / 2).rev() {
            HeapSort::sift_down(&mut values, root, n);
        }
        for parent in 0..n {
            let left = 2 * parent + 1;
            let right = left + 1;
            if left < n {
                assert!(values[parent] >= values[left]);
            }
            if right < n {
                assert!(values[parent] >= values[right]);
            }
        }
    }

    #[test]
    fn test_sorts_strings() {
        let mut words = vec!["oak", "birch", "pine", "ash"];
        HeapSort::sort(&mut words);
        assert_eq!(words, vec!["ash", "birch", "oak", "pine"]);
    }
}
