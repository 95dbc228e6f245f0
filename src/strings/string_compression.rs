//! String compression.
//!
//! CCI 1.6: run-length encode "aabcccccaaa" into "a2b1c5a3",
//! but return the original when compression would not shrink it.
//! Counts are written in decimal so runs past 9 are fine.
//!
//! The decode direction is included to close the loop, plus a
//! pre-counting variant that sizes the output buffer first, the
//! book's follow-up about avoiding repeated reallocation.

/// String-compression exercise struct.
pub struct StringCompression;

impl StringCompression {
    /// Compress, falling back to the original if not shorter.
    pub fn compress(text: &str) -> String {
        let compressed = Self::run_length_encode(text);
        if compressed.chars().count() < text.chars().count() {
            compressed
        } else {
            text.to_string()
        }
    }

    /// Plain run-length encoding, no fallback.
    pub fn run_length_encode(text: &str) -> String {
        let mut encoded = String::new();
        let mut chars = text.chars().peekable();
        while let Some(current) = chars.next() {
            let mut run = 1usize;
            while chars.peek() == Some(&current) {
                chars.next();
                run += 1;
            }
            encoded.push(current);
            encoded.push_str(&run.to_string());
        }
        encoded
    }

    /// Encode with the output pre-sized by a counting pass.
    pub fn run_length_encode_presized(text: &str) -> String {
        // first pass: exact output length
        let mut needed = 0usize;
        let mut chars = text.chars().peekable();
        while let Some(current) = chars.next() {
            let mut run = 1usize;
            while chars.peek() == Some(&current) {
                chars.next();
                run += 1;
            }
            needed += current.len_utf8() + Self::digits(run);
        }

        let mut encoded = String::with_capacity(needed);
        let mut chars = text.chars().peekable();
        while let Some(current) = chars.next() {
            let mut run = 1usize;
            while chars.peek() == Some(&current) {
                chars.next();
                run += 1;
            }
            encoded.push(current);
            encoded.push_str(&run.to_string());
        }
        encoded
    }

    /// Decode "a2b1c5" shaped input.
    ///
    /// Returns None on malformed input (missing count, count of
    /// zero, leading digit).
    pub fn run_length_decode(encoded: &str) -> Option<String> {
        let mut decoded = String::new();
        let mut chars = encoded.chars().peekable();
        while let Some(current) = chars.next() {
            if current.is_ascii_digit() {
                return None;
            }
            let mut count = String::new();
            while let Some(&digit) = chars.peek() {
                if !digit.is_ascii_digit() {
                    break;
                }
                count.push(digit);
                chars.next();
            }
            let count: usize = count.parse().ok()?;
            if count == 0 {
                return None;
            }
            for _ in 0..count {
                decoded.push(current);
            }
        }
        Some(decoded)
    }

    fn digits(mut value: usize) -> usize {
        let mut width = 1;
        while value >= 10 {
            value /= 10;
            width += 1;
        }
        width
    }
}

/// Print sample input and output.
pub fn demo() {
    for text in ["aabcccccaaa", "abcdef", "aa"] {
        println!("compress {:?} -> {:?}", text, StringCompression::compress(text));
    }
    println!(
        "decode {:?} -> {:?}",
        "a2b1c5a3",
        StringCompression::run_length_decode("a2b1c5a3")
    );
    println!(
        "decode {:?} -> {:?}",
        "a0",
        StringCompression::run_length_decode("a0")
    );
}
