//! Permutations with and without duplicates (CCI 8.7 / 8.8).
//!
//! Two generators with different trade-offs:
//!
//! - the insertion builder from 8.7: take the permutations of the
//!   first n-1 elements and splice the last element into every gap.
//!   Simple, but it does a lot of cloning;
//! - Heap's algorithm: generates each next permutation by a single
//!   swap in place, visiting them through a callback so callers can
//!   stream instead of collecting.
//!
//! The duplicate-aware variant from 8.8 counts occurrences first and
//! branches on distinct values only, so `aab` yields 3 permutations
//! rather than 6.

use std::collections::BTreeMap;

/// Permutation generators.
pub struct Permutations;

impl Permutations {
    /// CCI 8.7 insertion scheme, input assumed free of duplicates.
    pub fn of_unique<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        let (last, rest) = match items.split_last() {
            Some(split) => split,
            None => return vec![Vec::new()],
        };
        let mut result = Vec::new();
        for shorter in Self::of_unique(rest) {
            for gap in 0..=shorter.len() {
                let mut longer = shorter.clone();
                longer.insert(gap, last.clone());
                result.push(longer);
            }
        }
        result
    }

    /// Heap's algorithm, one swap per permutation, streamed to `visit`.
    pub fn heaps<T, F: FnMut(&[T])>(items: &mut [T], mut visit: F) {
        let n = items.len();
        Self::heaps_inner(items, n, &mut visit);
    }

    fn heaps_inner<T, F: FnMut(&[T])>(items: &mut [T], k: usize, visit: &mut F) {
        if k <= 1 {
            visit(items);
            return;
        }
        for i in 0..k {
            Self::heaps_inner(items, k - 1, visit);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
    }

    /// CCI 8.8: permutations of a string that may contain duplicates,
    /// each distinct permutation exactly once.
    pub fn of_string_with_dups(text: &str) -> Vec<String> {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for c in text.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        let mut counts: Vec<(char, usize)> = counts.into_iter().collect();
        let mut result = Vec::new();
        let mut prefix = String::new();
        let remaining = text.chars().count();
        Self::branch_on_counts(&mut counts, &mut prefix, remaining, &mut result);
        result
    }

    fn branch_on_counts(
        counts: &mut [(char, usize)],
        prefix: &mut String,
        remaining: usize,
        result: &mut Vec<String>,
    ) {
        if remaining == 0 {
            result.push(prefix.clone());
            return;
        }
        for slot in 0..counts.len() {
            let (c, count) = counts[slot];
            if count == 0 {
                continue;
            }
            counts[slot].1 -= 1;
            prefix.push(c);
            Self::branch_on_counts(counts, prefix, remaining - 1, result);
            prefix.pop();
            counts[slot].1 += 1;
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("permutations of [1, 2, 3]:");
    for p in Permutations::of_unique(&[1, 2, 3]) {
        println!("  {:?}", p);
    }

    let mut streamed = 0usize;
    Permutations::heaps(&mut [1, 2, 3, 4], |_| streamed += 1);
    println!("Heap's algorithm visited {} permutations of 4 items", streamed);

    println!("distinct permutations of \"aab\":");
    for p in Permutations::of_string_with_dups("aab") {
        println!("  {}", p);
    }
}
