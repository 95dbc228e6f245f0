//! Quickselect.
//!
//! Kth smallest element without fully sorting. Partition like
//! quicksort but recurse into only one side: expected O(n) with
//! a random pivot, O(n^2) worst case.
//!
//! The median-of-medians variant trades constants for a
//! guaranteed O(n): group by fives, take the median of the
//! group medians as pivot, which promises a 30/70 split at
//! worst. Nobody deploys it, everybody gets asked about it.
//!
//! k is zero-based; k = 0 is the minimum.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quickselect exercise struct.
pub struct Quickselect;

impl Quickselect {
    /// Expected-linear selection with a seeded random pivot.
    /// Returns None when k is out of range.
    pub fn kth_smallest(values: &[i64], k: usize, seed: u64) -> Option<i64> {
        if k >= values.len() {
            return None;
        }
        let mut scratch = values.to_vec();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut slice = &mut scratch[..];
        let mut k = k;
        loop {
            if slice.len() == 1 {
                return Some(slice[0]);
            }
            let chosen = rng.gen_range(0..slice.len());
            let pivot_index = Self::partition(slice, chosen);
            match k.cmp(&pivot_index) {
                std::cmp::Ordering::Equal => return Some(slice[pivot_index]),
                std::cmp::Ordering::Less => slice = &mut slice[..pivot_index],
                std::cmp::Ordering::Greater => {
                    k -= pivot_index + 1;
                    slice = &mut slice[pivot_index + 1..];
                }
            }
        }
    }

    /// Guaranteed-linear selection, median-of-medians pivot.
    pub fn kth_smallest_deterministic(values: &[i64], k: usize) -> Option<i64> {
        if k >= values.len() {
            return None;
        }
        let mut scratch = values.to_vec();
        Some(Self::select(&mut scratch, k))
    }

    /// Kth largest, zero-based, via kth smallest.
    pub fn kth_largest(values: &[i64], k: usize, seed: u64) -> Option<i64> {
        if k >= values.len() {
            return None;
        }
        Self::kth_smallest(values, values.len() - 1 - k, seed)
    }

    /// Lower median (element at index (n-1)/2 of the sorted order).
    pub fn median(values: &[i64]) -> Option<i64> {
        if values.is_empty() {
            return None;
        }
        Self::kth_smallest_deterministic(values, (values.len() - 1) / 2)
    }

    fn select(slice: &mut [i64], k: usize) -> i64 {
        if slice.len() <= 5 {
            slice.sort_unstable();
            return slice[k];
        }

        // median of each group of five, gathered at the front
        let mut medians: Vec<i64> = slice
            .chunks_mut(5)
            .map(|chunk| {
                chunk.sort_unstable();
                chunk[(chunk.len() - 1) / 2]
            })
            .collect();
        let medians_mid = (medians.len() - 1) / 2;
        let pivot_value = Self::select(&mut medians, medians_mid);

        let pivot_position = slice
            .iter()
            .position(|&v| v == pivot_value)
            .unwrap_or(0);
        let pivot_index = Self::partition(slice, pivot_position);
        match k.cmp(&pivot_index) {
            std::cmp::Ordering::Equal => slice[pivot_index],
            std::cmp::Ordering::Less => Self::select(&mut slice[..pivot_index], k),
            std::cmp::Ordering::Greater => {
                Self::select(&mut slice[pivot_index + 1..], k - pivot_index - 1)
            }
        }
    }

    /// Lomuto partition around the value at `chosen`.
    fn partition(slice: &mut [i64], chosen: usize) -> usize {
        let last = slice.len() - 1;
        slice.swap(chosen, last);
        let mut boundary = 0usize;
        for i in 0..last {
            if slice[i] < slice[last] {
                slice.swap(i, boundary);
                boundary += 1;
            }
        }
        slice.swap(boundary, last);
        boundary
    }
}

/// Print sample input and output.
pub fn demo() {
    let values = [7, 10, 4, 3, 20, 15];
    println!("input: {:?}", values);
    for k in 0..3 {
        println!(
            "k = {}: smallest {:?}, largest {:?}",
            k,
            Quickselect::kth_smallest(&values, k, 42),
            Quickselect::kth_largest(&values, k, 42)
        );
    }
    println!("median: {:?}", Quickselect::median(&values));
}
