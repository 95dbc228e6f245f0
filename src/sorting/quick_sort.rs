//! Quick sort.
//!
//! Average O(n log n), worst O(n^2), in-place, not stable.
//! Three partition strategies to compare:
//! - Lomuto with last-element pivot: simplest to get right,
//!   degrades to quadratic on sorted input;
//! - Hoare with first-element pivot: roughly a third of the
//!   swaps, trickier index discipline, same sorted-input trap;
//! - randomized pivot over Lomuto: the standard fix for
//!   adversarial orderings, seeded here so runs reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quick-sort exercise struct.
pub struct QuickSort;

impl QuickSort {
    /// Lomuto partition, last element as pivot.
    pub fn sort_lomuto<T: Ord>(values: &mut [T]) {
        if values.len() < 2 {
            return;
        }
        let pivot_index = Self::partition_lomuto(values);
        let (left, right) = values.split_at_mut(pivot_index);
        Self::sort_lomuto(left);
        Self::sort_lomuto(&mut right[1..]);
    }

    /// Hoare partition, first element as pivot.
    pub fn sort_hoare<T: Ord + Clone>(values: &mut [T]) {
        if values.len() < 2 {
            return;
        }
        let split = Self::partition_hoare(values);
        let (left, right) = values.split_at_mut(split + 1);
        Self::sort_hoare(left);
        Self::sort_hoare(right);
    }

    /// Lomuto with a seeded random pivot.
    pub fn sort_randomized<T: Ord>(values: &mut [T], seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::randomized_recurse(values, &mut rng);
    }

    fn randomized_recurse<T: Ord>(values: &mut [T], rng: &mut StdRng) {
        if values.len() < 2 {
            return;
        }
        let chosen = rng.gen_range(0..values.len());
        let last = values.len() - 1;
        values.swap(chosen, last);
        let pivot_index = Self::partition_lomuto(values);
        let (left, right) = values.split_at_mut(pivot_index);
        Self::randomized_recurse(left, rng);
        Self::randomized_recurse(&mut right[1..], rng);
    }

    /// Returns the pivot's final index.
    fn partition_lomuto<T: Ord>(values: &mut [T]) -> usize {
        let last = values.len() - 1;
        let mut boundary = 0usize;
        for i in 0..last {
            if values[i] <= values[last] {
                values.swap(i, boundary);
                boundary += 1;
            }
        }
        values.swap(boundary, last);
        boundary
    }

    /// Returns j with values[..=j] <= pivot <= values[j+1..].
    /// First element as pivot keeps j < len-1, so both recursive
    /// halves strictly shrink.
    fn partition_hoare<T: Ord + Clone>(values: &mut [T]) -> usize {
        let pivot = values[0].clone();
        let mut i = -1isize;
        let mut j = values.len() as isize;
        loop {
            loop {
                i += 1;
                if values[i as usize] >= pivot {
                    break;
                }
            }
            loop {
                j -= 1;
                if values[j as usize] <= pivot {
                    break;
                }
            }
            if i >= j {
                return j as usize;
            }
            values.swap(i as usize, j as usize);
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![10, 80, 30, 90, 40, 50, 70];
    println!("input:  {:?}", values);
    QuickSort::sort_lomuto(&mut values);
    println!("lomuto: {:?}", values);

    let mut shuffled: Vec<u32> = (1..=15).rev().collect();
    println!("reversed run: {:?}", shuffled);
    QuickSort::sort_randomized(&mut shuffled, 42);
    println!("randomized:   {:?}", shuffled);
}
