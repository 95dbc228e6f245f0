//! Anagram grouping.
//!
//! LeetCode 49: bucket a list of words so that anagrams land
//! together. Everything hinges on the choice of canonical key:
//! - sorted chars, O(k log k) per word, works for any unicode;
//! - letter-count signature for a-z words, O(k) per word and a
//!   cheap array key, the follow-up answer when words are long.
//!
//! Group order follows first appearance; words inside a group
//! keep input order. Comparison is case-sensitive on purpose,
//! normalize upstream if needed.

use std::collections::HashMap;

/// Anagram-grouping exercise struct.
pub struct AnagramGroups;

impl AnagramGroups {
    /// Sorted-chars key.
    pub fn group(words: &[&str]) -> Vec<Vec<String>> {
        let mut order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
        for &word in words {
            let mut key: Vec<char> = word.chars().collect();
            key.sort_unstable();
            let key: String = key.into_iter().collect();
            let bucket = buckets.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            bucket.push(word.to_string());
        }
        order
            .into_iter()
            .filter_map(|key| buckets.remove(&key))
            .collect()
    }

    /// Letter-count key, a-z only.
    ///
    /// Returns None when any word strays outside lowercase a-z.
    pub fn group_by_counts(words: &[&str]) -> Option<Vec<Vec<String>>> {
        let mut order: Vec<[u8; 26]> = Vec::new();
        let mut buckets: HashMap<[u8; 26], Vec<String>> = HashMap::new();
        for &word in words {
            let mut signature = [0u8; 26];
            for c in word.chars() {
                if !c.is_ascii_lowercase() {
                    return None;
                }
                signature[(c as u8 - b'a') as usize] += 1;
            }
            let bucket = buckets.entry(signature).or_insert_with(|| {
                order.push(signature);
                Vec::new()
            });
            bucket.push(word.to_string());
        }
        Some(
            order
                .into_iter()
                .filter_map(|key| buckets.remove(&key))
                .collect(),
        )
    }

    /// Two words, one check.
    pub fn are_anagrams(first: &str, second: &str) -> bool {
        let mut a: Vec<char> = first.chars().collect();
        let mut b: Vec<char> = second.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

/// Print sample input and output.
pub fn demo() {
    let words = ["eat", "tea", "tan", "ate", "nat", "bat"];
    println!("input: {:?}", words);
    println!("groups: {:?}", AnagramGroups::group(&words));
    println!(
        "count-keyed: {:?}",
        AnagramGroups::group_by_counts(&words)
    );
    println!(
        "listen/silent anagrams: {}",
        AnagramGroups::are_anagrams("listen", "silent")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_grouping() {
        let groups = AnagramGroups::group(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        assert_eq!(
            groups,
            vec![
                vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
                vec!["tan".to_string(), "nat".to_string()],
                vec!["bat".to_string()],
            ]
        );
    }

    #[test]
    fn test_count_key_agrees() {
        let words = ["eat", "tea", "tan", "ate", "nat", "bat"];
        assert_eq!(
            AnagramGroups::group_by_counts(&words),
            Some(AnagramGroups::group(&words))
        );
    }

    #[test]
    fn test_count_key_rejects_uppercase() {
        assert_eq!(AnagramGroups::group_by_counts(&["Eat"]), None);
        // sorted-key version has no such restriction
        assert_eq!(AnagramGroups::group(&["Eat"]).len(), 1);
    }

    #[test]
    fn test_empty_input_and_empty_words() {
        assert!(AnagramGroups::group(&[]).is_empty());
        let groups = AnagramGroups::group(&["", "", "a"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_are_anagrams() {
        assert!(AnagramGroups::are_anagrams("listen", "silent"));
        assert!(!AnagramGroups::are_anagrams("hello", "world"));
        assert!(!AnagramGroups::are_anagrams("ab", "abc"));
        assert!(AnagramGroups::are_anagrams("", ""));
    }

    #[test]
    fn test_case_sensitivity() {
        let groups = AnagramGroups::group(&["abc", "Cba"]);
        assert_eq!(groups.len(), 2);
    }
}
