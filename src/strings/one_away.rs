//! One away.
//!
//! CCI 1.5: two strings are "one away" when they differ by at
//! most one edit (insert, delete, or replace one character).
//!
//! The trick is to never build the edit-distance table. Equal
//! lengths mean at most one replacement; lengths off by one mean
//! at most one insertion, checked by walking both strings with
//! two pointers and letting the longer one skip once. Lengths
//! off by two or more fail immediately.
//!
//! A split-out pair of checks mirrors how the book decomposes
//! the problem; the combined entry point is what callers want.

/// One-away exercise struct.
pub struct OneAway;

impl OneAway {
    /// At most one edit apart?
    pub fn check(first: &str, second: &str) -> bool {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        match a.len().abs_diff(b.len()) {
            0 => Self::one_replace_at_most(&a, &b),
            1 => {
                if a.len() > b.len() {
                    Self::one_insert_at_most(&b, &a)
                } else {
                    Self::one_insert_at_most(&a, &b)
                }
            }
            _ => false,
        }
    }

    /// Same length: differ in at most one position.
    fn one_replace_at_most(a: &[char], b: &[char]) -> bool {
        a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() <= 1
    }

    /// `longer` is exactly one char longer than `shorter`.
    fn one_insert_at_most(shorter: &[char], longer: &[char]) -> bool {
        let mut i = 0;
        let mut j = 0;
        let mut skipped = false;
        while i < shorter.len() && j < longer.len() {
            if shorter[i] == longer[j] {
                i += 1;
                j += 1;
            } else {
                if skipped {
                    return false;
                }
                skipped = true;
                j += 1;
            }
        }
        true
    }
}

/// Print sample input and output.
pub fn demo() {
    let pairs = [
        ("pale", "ple"),
        ("pales", "pale"),
        ("pale", "bale"),
        ("pale", "bake"),
        ("same", "same"),
    ];
    for (first, second) in pairs {
        println!(
            "{:?} / {:?} -> {}",
            first,
            second,
            OneAway::check(first, second)
        );
    }
}
