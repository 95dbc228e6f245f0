//! Palindrome permutation.
//!
//! CCI 1.4: can some permutation of the input form a palindrome?
//! True exactly when at most one character has an odd count.
//! Letters are compared case-insensitively and non-alphanumeric
//! characters are ignored, like the book's "Tact Coa" example.
//!
//! - counting map, then count the odd entries;
//! - toggle set: flip membership per char, palindrome iff at
//!   most one char is left, which for a-z collapses to one u32
//!   and `mask & (mask - 1) == 0`.

use std::collections::{HashMap, HashSet};

/// Palindrome-permutation exercise struct.
pub struct PalindromePermutation;

impl PalindromePermutation {
    fn significant(text: &str) -> impl Iterator<Item = char> + '_ {
        text.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(|c| c.to_lowercase())
    }

    /// Count odd frequencies.
    pub fn check_by_counting(text: &str) -> bool {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in Self::significant(text) {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts.values().filter(|&&count| count % 2 == 1).count() <= 1
    }

    /// Toggle membership per char.
    pub fn check_by_toggling(text: &str) -> bool {
        let mut odd: HashSet<char> = HashSet::new();
        for c in Self::significant(text) {
            if !odd.insert(c) {
                odd.remove(&c);
            }
        }
        odd.len() <= 1
    }

    /// Bitmask specialization for a-z input (after lowering).
    ///
    /// Returns None when some significant char is outside a-z.
    pub fn check_by_bitmask(text: &str) -> Option<bool> {
        let mut mask: u32 = 0;
        for c in Self::significant(text) {
            if !c.is_ascii_lowercase() {
                return None;
            }
            mask ^= 1 << (c as u32 - 'a' as u32);
        }
        // at most one bit set
        Some(mask & mask.wrapping_sub(1) == 0)
    }
}

/// Print sample input and output.
pub fn demo() {
    for text in ["Tact Coa", "racecar", "palindrome", "Was it a car or a cat I saw?"] {
        println!(
            "{:?} -> {}",
            text,
            PalindromePermutation::check_by_counting(text)
        );
    }
    println!(
        "bitmask on {:?}: {:?}",
        "Tact Coa",
        PalindromePermutation::check_by_bitmask("Tact Coa")
    );
}
