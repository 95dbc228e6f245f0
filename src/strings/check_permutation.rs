//! Permutation check.
//!
//! CCI 1.2: given two strings, decide whether one is a
//! permutation of the other. Case and whitespace are significant.
//!
//! - counting map: one pass to count, one pass to discharge,
//!   O(n) for any unicode;
//! - fixed array of 128 counters when inputs are ASCII, no
//!   hashing cost;
//! - sort both and compare, the two-liner worth remembering
//!   when n is tiny.

use std::collections::HashMap;

/// Permutation-check exercise struct.
pub struct CheckPermutation;

impl CheckPermutation {
    /// Counting map over chars.
    pub fn by_counting(first: &str, second: &str) -> bool {
        if first.chars().count() != second.chars().count() {
            return false;
        }
        let mut counts: HashMap<char, i64> = HashMap::new();
        for c in first.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        for c in second.chars() {
            match counts.get_mut(&c) {
                Some(count) => {
                    *count -= 1;
                    if *count < 0 {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    /// ASCII-only fast path with a stack array.
    ///
    /// Returns None when either input has a non-ASCII char.
    pub fn by_ascii_table(first: &str, second: &str) -> Option<bool> {
        if !first.is_ascii() || !second.is_ascii() {
            return None;
        }
        if first.len() != second.len() {
            return Some(false);
        }
        let mut counts = [0i32; 128];
        for byte in first.bytes() {
            counts[byte as usize] += 1;
        }
        for byte in second.bytes() {
            counts[byte as usize] -= 1;
            if counts[byte as usize] < 0 {
                return Some(false);
            }
        }
        Some(true)
    }

    /// Sort-and-compare.
    pub fn by_sorting(first: &str, second: &str) -> bool {
        let mut a: Vec<char> = first.chars().collect();
        let mut b: Vec<char> = second.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

/// Print sample input and output.
pub fn demo() {
    let pairs = [
        ("listen", "silent"),
        ("triangle", "integral"),
        ("apple", "pale"),
        ("dog ", "dog"),
    ];
    for (first, second) in pairs {
        println!(
            "{:?} / {:?} -> {}",
            first,
            second,
            CheckPermutation::by_counting(first, second)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations() {
        assert!(CheckPermutation::by_counting("listen", "silent"));
        assert!(CheckPermutation::by_counting("", ""));
        assert!(CheckPermutation::by_counting("aab", "aba"));
    }

    #[test]
    fn test_non_permutations() {
        assert!(!CheckPermutation::by_counting("apple", "pale"));
        assert!(!CheckPermutation::by_counting("aab", "abb"));
        // case sensitive by problem statement
        assert!(!CheckPermutation::by_counting("Dog", "dog"));
        // whitespace counts
        assert!(!CheckPermutation::by_counting("dog ", "dog"));
    }

    #[test]
    fn test_versions_agree() {
        let pairs = [
            ("listen", "silent"),
            ("apple", "pale"),
            ("", ""),
            ("ab", "ba"),
            ("ab", "ab "),
        ];
        for (first, second) in pairs {
            let expected = CheckPermutation::by_counting(first, second);
            assert_eq!(CheckPermutation::by_sorting(first, second), expected);
            assert_eq!(
                CheckPermutation::by_ascii_table(first, second),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_ascii_table_rejects_unicode() {
        assert_eq!(CheckPermutation::by_ascii_table("日月", "月日"), None);
        assert!(CheckPermutation::by_counting("日月", "月日"));
    }
}
