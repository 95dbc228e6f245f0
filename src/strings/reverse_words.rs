//! Reverse words.
//!
//! LeetCode 151: reverse the word order of a sentence, squeezing
//! runs of whitespace down to single spaces and trimming the
//! ends. "  hello   world  " becomes "world hello".
//!
//! - split/rev/join, the one-liner Rust makes trivial;
//! - two-pass in a byte buffer: reverse the whole thing, then
//!   reverse each word back, the classic O(1)-extra-space
//!   answer for mutable ASCII buffers;
//! - plus reversing each word in place while keeping word order
//!   (LeetCode 557), because the two get confused all the time.

/// Reverse-words exercise struct.
pub struct ReverseWords;

impl ReverseWords {
    /// Iterator one-liner.
    pub fn reverse_order(sentence: &str) -> String {
        sentence.split_whitespace().rev().collect::<Vec<_>>().join(" ")
    }

    /// Double-reverse on an ASCII byte buffer.
    ///
    /// Returns None for non-ASCII input; byte reversal would
    /// shred multibyte chars.
    pub fn reverse_order_in_buffer(sentence: &str) -> Option<String> {
        if !sentence.is_ascii() {
            return None;
        }
        // normalize spacing first so the buffer trick stays simple
        let normalized = sentence.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut bytes = normalized.into_bytes();
        bytes.reverse();

        let mut start = 0;
        for end in 0..=bytes.len() {
            if end == bytes.len() || bytes[end] == b' ' {
                bytes[start..end].reverse();
                start = end + 1;
            }
        }
        String::from_utf8(bytes).ok()
    }

    /// Keep word order, reverse each word's chars.
    pub fn reverse_each_word(sentence: &str) -> String {
        sentence
            .split_whitespace()
            .map(|word| word.chars().rev().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Print sample input and output.
pub fn demo() {
    let sentence = "  the sky  is blue ";
    println!("input: {:?}", sentence);
    println!("reversed order: {:?}", ReverseWords::reverse_order(sentence));
    println!(
        "buffer version: {:?}",
        ReverseWords::reverse_order_in_buffer(sentence)
    );
    println!(
        "each word:      {:?}",
        ReverseWords::reverse_each_word("Let's take LeetCode contest")
    );
}
