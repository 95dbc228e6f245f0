//! String problems.
//!
//! Mostly the CCI chapter 1 block plus a few LeetCode and
//! Rosetta staples. Inputs are treated as unicode unless a file
//! documents an ASCII fast path.

pub mod anagram_groups;
pub mod caesar_cipher;
pub mod check_permutation;
pub mod kmp_search;
pub mod one_away;
pub mod palindrome_permutation;
pub mod reverse_words;
pub mod roman_numerals;
pub mod string_compression;
pub mod string_rotation;
pub mod unique_chars;
pub mod urlify;

pub use anagram_groups::AnagramGroups;
pub use caesar_cipher::CaesarCipher;
pub use check_permutation::CheckPermutation;
pub use kmp_search::KmpSearch;
pub use one_away::OneAway;
pub use palindrome_permutation::PalindromePermutation;
pub use reverse_words::ReverseWords;
pub use roman_numerals::RomanNumerals;
pub use string_compression::StringCompression;
pub use string_rotation::StringRotation;
pub use unique_chars::UniqueChars;
pub use urlify::Urlify;

use crate::runner::{Category, Demo};

/// All demos registered by this category.
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "strings/unique-chars",
            Category::Strings,
            "All-unique check with set, bitmask and sort takes",
            unique_chars::demo,
        ),
        Demo::new(
            "strings/check-permutation",
            Category::Strings,
            "Permutation test by counting, table and sorting",
            check_permutation::demo,
        ),
        Demo::new(
            "strings/urlify",
            Category::Strings,
            "Space escaping, including the in-place buffer form",
            urlify::demo,
        ),
        Demo::new(
            "strings/palindrome-permutation",
            Category::Strings,
            "Odd-count argument for palindrome rearrangement",
            palindrome_permutation::demo,
        ),
        Demo::new(
            "strings/one-away",
            Category::Strings,
            "Single-edit closeness without the DP table",
            one_away::demo,
        ),
        Demo::new(
            "strings/string-compression",
            Category::Strings,
            "Run-length encoding with shrink-only fallback",
            string_compression::demo,
        ),
        Demo::new(
            "strings/string-rotation",
            Category::Strings,
            "Rotation test via the doubled-string trick",
            string_rotation::demo,
        ),
        Demo::new(
            "strings/reverse-words",
            Category::Strings,
            "Word-order reversal and per-word reversal",
            reverse_words::demo,
        ),
        Demo::new(
            "strings/kmp-search",
            Category::Strings,
            "Failure-table substring search with naive oracle",
            kmp_search::demo,
        ),
        Demo::new(
            "strings/anagram-groups",
            Category::Strings,
            "Bucket words by canonical anagram key",
            anagram_groups::demo,
        ),
        Demo::new(
            "strings/roman-numerals",
            Category::Strings,
            "Roman numeral encoding and strict decoding",
            roman_numerals::demo,
        ),
        Demo::new(
            "strings/caesar-cipher",
            Category::Strings,
            "Shift cipher with frequency-analysis cracking",
            caesar_cipher::demo,
        ),
    ]
}
