//! Unique characters check.
//!
//! CCI 1.1: determine if a string has all unique characters.
//! Three takes with different constraints:
//! - HashSet, the obvious O(n) answer for arbitrary unicode;
//! - a u32 bitmask when the alphabet is just a-z, no allocation
//!   at all (the classic "what if you cannot use additional
//!   data structures" follow-up);
//! - sort-then-scan, O(n log n) time but O(1) extra space beyond
//!   the scratch copy.

use std::collections::HashSet;

/// Unique-characters exercise struct.
pub struct UniqueChars;

impl UniqueChars {
    /// HashSet version, any unicode input.
    pub fn all_unique(text: &str) -> bool {
        let mut seen = HashSet::new();
        text.chars().all(|c| seen.insert(c))
    }

    /// Bitmask version, lowercase a-z only.
    ///
    /// Returns None when the input contains anything outside a-z.
    pub fn all_unique_bitmask(text: &str) -> Option<bool> {
        let mut mask: u32 = 0;
        for c in text.chars() {
            if !c.is_ascii_lowercase() {
                return None;
            }
            let bit = 1u32 << (c as u32 - 'a' as u32);
            if mask & bit != 0 {
                return Some(false);
            }
            mask |= bit;
        }
        Some(true)
    }

    /// Sort a scratch copy, then look for equal neighbors.
    pub fn all_unique_sorted(text: &str) -> bool {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort_unstable();
        chars.windows(2).all(|pair| pair[0] != pair[1])
    }
}

/// Print sample input and output.
pub fn demo() {
    for text in ["abcdefg", "hello", "", "ab cd"] {
        println!("{:?} all unique: {}", text, UniqueChars::all_unique(text));
    }
    println!(
        "bitmask on {:?}: {:?}",
        "planet",
        UniqueChars::all_unique_bitmask("planet")
    );
    println!(
        "bitmask on {:?}: {:?}",
        "Mars",
        UniqueChars::all_unique_bitmask("Mars")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_and_duplicate() {
        assert!(UniqueChars::all_unique("abcdefg"));
        assert!(!UniqueChars::all_unique("hello"));
        assert!(UniqueChars::all_unique(""));
        assert!(UniqueChars::all_unique("a"));
    }

    #[test]
    fn test_bitmask_restricted_alphabet() {
        assert_eq!(UniqueChars::all_unique_bitmask("planet"), Some(true));
        assert_eq!(UniqueChars::all_unique_bitmask("hello"), Some(false));
        assert_eq!(UniqueChars::all_unique_bitmask("Mars"), None);
        assert_eq!(UniqueChars::all_unique_bitmask("a b"), None);
        assert_eq!(UniqueChars::all_unique_bitmask(""), Some(true));
    }

    #[test]
    fn test_versions_agree_on_lowercase() {
        for text in ["abcdefg", "hello", "zyx", "aa", ""] {
            let expected = UniqueChars::all_unique(text);
            assert_eq!(UniqueChars::all_unique_sorted(text), expected);
            assert_eq!(UniqueChars::all_unique_bitmask(text), Some(expected));
        }
    }

    #[test]
    fn test_unicode_input() {
        assert!(UniqueChars::all_unique("hélo"));
        assert!(!UniqueChars::all_unique("日日"));
        assert!(UniqueChars::all_unique("日月"));
    }
}
