//! Insertion sort.
//!
//! Quadratic in general, but the sort to reach for on tiny or
//! nearly-sorted slices; real-world quicksorts and mergesorts
//! hand off to it under a small-size cutoff.
//!
//! - swap version: bubble the new element left one swap at a
//!   time, shortest code;
//! - shift version: hold the element out, shift the tail right,
//!   drop it in once, n writes instead of 3n;
//! - binary insertion: find the slot with binary search, fewer
//!   comparisons when comparison is the expensive part (still
//!   O(n^2) moves). Binary insertion with `Ord` keys keeps
//!   stability by inserting after equal keys.

/// Insertion-sort exercise struct.
pub struct InsertionSort;

impl InsertionSort {
    /// Adjacent swaps.
    pub fn sort<T: Ord>(values: &mut [T]) {
        for i in 1..values.len() {
            let mut j = i;
            while j > 0 && values[j - 1] > values[j] {
                values.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Shift the run right, then one write.
    pub fn sort_by_shifting<T: Ord + Clone>(values: &mut [T]) {
        for i in 1..values.len() {
            let current = values[i].clone();
            let mut j = i;
            while j > 0 && values[j - 1] > current {
                values[j] = values[j - 1].clone();
                j -= 1;
            }
            values[j] = current;
        }
    }

    /// Locate the insertion point by binary search.
    pub fn sort_binary<T: Ord + Clone>(values: &mut [T]) {
        for i in 1..values.len() {
            let current = values[i].clone();
            // partition_point keeps equal elements to the left
            let slot = values[..i].partition_point(|existing| existing <= &current);
            let mut j = i;
            while j > slot {
                values[j] = values[j - 1].clone();
                j -= 1;
            }
            values[slot] = current;
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![7, 3, 9, 1, 3, 8];
    println!("input:  {:?}", values);
    InsertionSort::sort(&mut values);
    println!("sorted: {:?}", values);

    let mut nearly = vec![1, 2, 4, 3, 5, 6];
    InsertionSort::sort_by_shifting(&mut nearly);
    println!("nearly-sorted input comes out {:?}", nearly);
}
