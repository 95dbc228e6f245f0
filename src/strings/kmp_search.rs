//! KMP substring search.
//!
//! Knuth-Morris-Pratt: find every occurrence of a pattern in a
//! text in O(n + m) by never re-reading text characters. The
//! failure table records, for each pattern prefix, the length of
//! its longest proper prefix that is also a suffix; on mismatch
//! the pattern slides by consulting the table instead of
//! restarting.
//!
//! A naive O(n*m) scan sits alongside as the correctness oracle,
//! matching how the table-driven version gets debugged in
//! practice. Both operate on chars, so multibyte text works;
//! returned positions are char indices, not byte offsets.

/// KMP exercise struct.
pub struct KmpSearch;

impl KmpSearch {
    /// All match positions (char indices), KMP.
    pub fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }

        let failure = Self::failure_table(&pattern);
        let mut matches = Vec::new();
        let mut matched = 0usize;
        for (position, &c) in text.iter().enumerate() {
            while matched > 0 && pattern[matched] != c {
                matched = failure[matched - 1];
            }
            if pattern[matched] == c {
                matched += 1;
            }
            if matched == pattern.len() {
                matches.push(position + 1 - pattern.len());
                matched = failure[matched - 1];
            }
        }
        matches
    }

    /// First match only.
    pub fn find_first(text: &str, pattern: &str) -> Option<usize> {
        Self::find_all(text, pattern).into_iter().next()
    }

    /// Naive scan, the oracle.
    pub fn find_all_naive(text: &str, pattern: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() || pattern.len() > text.len() {
            return Vec::new();
        }
        (0..=text.len() - pattern.len())
            .filter(|&start| text[start..start + pattern.len()] == pattern[..])
            .collect()
    }

    /// Longest proper prefix == suffix, per pattern prefix.
    fn failure_table(pattern: &[char]) -> Vec<usize> {
        let mut failure = vec![0usize; pattern.len()];
        let mut length = 0usize;
        for i in 1..pattern.len() {
            while length > 0 && pattern[i] != pattern[length] {
                length = failure[length - 1];
            }
            if pattern[i] == pattern[length] {
                length += 1;
            }
            failure[i] = length;
        }
        failure
    }
}

/// Print sample input and output.
pub fn demo() {
    let text = "abababcababc";
    for pattern in ["ababc", "ab", "missing"] {
        println!(
            "find {:?} in {:?}: {:?}",
            pattern,
            text,
            KmpSearch::find_all(text, pattern)
        );
    }
    println!(
        "first {:?} in {:?}: {:?}",
        "aaa",
        "aaaaa",
        KmpSearch::find_first("aaaaa", "aaa")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matches() {
        assert_eq!(KmpSearch::find_all("abababcababc", "ababc"), vec![2, 7]);
        assert_eq!(KmpSearch::find_first("hello world", "world"), Some(6));
        assert_eq!(KmpSearch::find_first("hello", "xyz"), None);
    }

    #[test]
    fn test_overlapping_matches_reported() {
        assert_eq!(KmpSearch::find_all("aaaaa", "aaa"), vec![0, 1, 2]);
        assert_eq!(KmpSearch::find_all("abababab", "abab"), vec![0, 2, 4]);
    }

    #[test]
    fn test_agrees_with_naive() {
        let cases = [
            ("abababcababc", "ababc"),
            ("aaaaa", "aa"),
            ("mississippi", "issi"),
            ("short", "longerpattern"),
            ("edgeedge", "edge"),
        ];
        for (text, pattern) in cases {
            assert_eq!(
                KmpSearch::find_all(text, pattern),
                KmpSearch::find_all_naive(text, pattern),
                "diverged on {:?}/{:?}",
                text,
                pattern
            );
        }
    }

    #[test]
    fn test_empty_pattern_and_text() {
        assert_eq!(KmpSearch::find_all("abc", ""), Vec::<usize>::new());
        assert_eq!(KmpSearch::find_all("", "a"), Vec::<usize>::new());
        assert_eq!(KmpSearch::find_all("", ""), Vec::<usize>::new());
    }

    #[test]
    fn test_char_indices_for_multibyte_text() {
        // byte offsets would be 3 and 9; char indices are 1 and 3
        assert_eq!(KmpSearch::find_all("你好你好", "好"), vec![1, 3]);
    }

    #[test]
    fn test_failure_table_shape() {
        let pattern: Vec<char> = "ababaca".chars().collect();
        assert_eq!(KmpSearch::failure_table(&pattern), vec![0, 0, 1, 2, 3, 0, 1]);
    }
}
