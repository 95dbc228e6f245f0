//! String rotation.
//!
//! CCI 1.9: is s2 a rotation of s1 ("erbottlewat" of
//! "waterbottle")? The interview answer uses a single substring
//! check: s2 is a rotation of s1 iff s2 appears in s1 + s1.
//!
//! The manual version compares char by char under a shifted
//! index for every candidate split, O(n^2) worst case but zero
//! allocation. A rotate_left helper produces test inputs and is
//! a tiny exercise on char boundaries itself.

/// String-rotation exercise struct.
pub struct StringRotation;

impl StringRotation {
    /// Concat trick: one substring call.
    pub fn is_rotation(original: &str, candidate: &str) -> bool {
        if original.len() != candidate.len() {
            return false;
        }
        if original.is_empty() {
            return true;
        }
        let doubled = format!("{}{}", original, original);
        doubled.contains(candidate)
    }

    /// Try every split point, comparing under shifted indices.
    pub fn is_rotation_manual(original: &str, candidate: &str) -> bool {
        let a: Vec<char> = original.chars().collect();
        let b: Vec<char> = candidate.chars().collect();
        if a.len() != b.len() {
            return false;
        }
        if a.is_empty() {
            return true;
        }
        (0..a.len()).any(|shift| (0..a.len()).all(|i| a[(shift + i) % a.len()] == b[i]))
    }

    /// Rotate left by `count` chars, in char units.
    pub fn rotate_left(text: &str, count: usize) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let split = count % chars.len();
        chars[split..].iter().chain(chars[..split].iter()).collect()
    }
}

/// Print sample input and output.
pub fn demo() {
    println!(
        "waterbottle / erbottlewat: {}",
        StringRotation::is_rotation("waterbottle", "erbottlewat")
    );
    println!(
        "waterbottle / bottlewater: {}",
        StringRotation::is_rotation("waterbottle", "bottlewater")
    );
    println!(
        "waterbottle / erbottlewta: {}",
        StringRotation::is_rotation("waterbottle", "erbottlewta")
    );
    println!(
        "rotate_left(abcdef, 2) = {:?}",
        StringRotation::rotate_left("abcdef", 2)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_example() {
        assert!(StringRotation::is_rotation("waterbottle", "erbottlewat"));
        assert!(!StringRotation::is_rotation("waterbottle", "erbottlewta"));
    }

    #[test]
    fn test_equal_strings_are_rotations() {
        assert!(StringRotation::is_rotation("abc", "abc"));
        assert!(StringRotation::is_rotation("", ""));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!StringRotation::is_rotation("ab", "aba"));
        assert!(!StringRotation::is_rotation("abc", ""));
    }

    #[test]
    fn test_manual_agrees_with_concat() {
        let cases = [
            ("waterbottle", "erbottlewat"),
            ("waterbottle", "erbottlewta"),
            ("aaab", "abaa"),
            ("abc", "cab"),
            ("abc", "bca"),
            ("", ""),
        ];
        for (original, candidate) in cases {
            assert_eq!(
                StringRotation::is_rotation(original, candidate),
                StringRotation::is_rotation_manual(original, candidate),
                "diverged on {:?}/{:?}",
                original,
                candidate
            );
        }
    }

    #[test]
    fn test_every_rotation_detected() {
        let text = "rotation";
        for shift in 0..text.len() {
            let rotated = StringRotation::rotate_left(text, shift);
            assert!(StringRotation::is_rotation(text, &rotated));
        }
    }

    #[test]
    fn test_rotate_left_wraps() {
        assert_eq!(StringRotation::rotate_left("abcdef", 2), "cdefab");
        assert_eq!(StringRotation::rotate_left("abcdef", 6), "abcdef");
        assert_eq!(StringRotation::rotate_left("abcdef", 8), "cdefab");
        assert_eq!(StringRotation::rotate_left("", 3), "");
    }

    #[test]
    fn test_multibyte_rotation() {
        let rotated = StringRotation::rotate_left("春夏秋冬", 1);
        assert_eq!(rotated, "夏秋冬春");
        assert!(StringRotation::is_rotation("春夏秋冬", &rotated));
    }
}
