//! URLify.
//!
//! CCI 1.3: replace every space with "%20". The book version
//! works in place on a byte buffer that already has room at the
//! end, filling from the back so nothing gets overwritten before
//! it is read. Rust strings are not mutable-in-place friendly,
//! so this file keeps both shapes:
//! - the idiomatic allocation version (also a general
//!   percent-escape helper for a small reserved set);
//! - the in-place buffer version on `&mut [u8]` with a declared
//!   true length, faithful to the original exercise.

/// URLify exercise struct.
pub struct Urlify;

impl Urlify {
    /// Allocating version over chars.
    pub fn encode_spaces(text: &str) -> String {
        let mut encoded = String::with_capacity(text.len());
        for c in text.chars() {
            if c == ' ' {
                encoded.push_str("%20");
            } else {
                encoded.push(c);
            }
        }
        encoded
    }

    /// In-place version on a pre-sized byte buffer.
    ///
    /// `true_length` is the length of the real content at the
    /// front of `buffer`; the tail must hold exactly two extra
    /// bytes per space. Returns the encoded length, or None when
    /// the buffer is too small.
    pub fn encode_in_place(buffer: &mut [u8], true_length: usize) -> Option<usize> {
        if true_length > buffer.len() {
            return None;
        }
        let spaces = buffer[..true_length].iter().filter(|&&b| b == b' ').count();
        let encoded_length = true_length + spaces * 2;
        if encoded_length > buffer.len() {
            return None;
        }

        // walk backwards so unread content is never clobbered
        let mut write = encoded_length;
        for read in (0..true_length).rev() {
            if buffer[read] == b' ' {
                buffer[write - 3..write].copy_from_slice(b"%20");
                write -= 3;
            } else {
                buffer[write - 1] = buffer[read];
                write -= 1;
            }
        }
        Some(encoded_length)
    }

    /// Small percent-escape helper for spaces and a few reserved
    /// ASCII characters, enough for notebook experiments.
    pub fn escape_reserved(text: &str) -> String {
        let mut encoded = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                ' ' => encoded.push_str("%20"),
                '!' => encoded.push_str("%21"),
                '#' => encoded.push_str("%23"),
                '&' => encoded.push_str("%26"),
                '?' => encoded.push_str("%3F"),
                other => encoded.push(other),
            }
        }
        encoded
    }
}

/// Print sample input and output.
pub fn demo() {
    println!(
        "encode {:?} -> {:?}",
        "Mr John Smith",
        Urlify::encode_spaces("Mr John Smith")
    );

    let mut buffer = *b"Mr John Smith    ";
    let length = Urlify::encode_in_place(&mut buffer, 13);
    if let Some(length) = length {
        println!(
            "in place -> {:?}",
            String::from_utf8_lossy(&buffer[..length])
        );
    }

    println!(
        "escape {:?} -> {:?}",
        "a&b ok?",
        Urlify::escape_reserved("a&b ok?")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_spaces() {
        assert_eq!(Urlify::encode_spaces("Mr John Smith"), "Mr%20John%20Smith");
        assert_eq!(Urlify::encode_spaces("nospace"), "nospace");
        assert_eq!(Urlify::encode_spaces(""), "");
        assert_eq!(Urlify::encode_spaces("  "), "%20%20");
    }

    #[test]
    fn test_in_place_matches_allocating() {
        let text = "Mr John Smith";
        let mut buffer = vec![0u8; text.len() + 4];
        buffer[..text.len()].copy_from_slice(text.as_bytes());

        let length =
            Urlify::encode_in_place(&mut buffer, text.len()).expect("Buffer sized in test");
        assert_eq!(&buffer[..length], Urlify::encode_spaces(text).as_bytes());
    }

    #[test]
    fn test_in_place_buffer_too_small() {
        let mut buffer = *b"a b";
        assert_eq!(Urlify::encode_in_place(&mut buffer, 3), None);

        let mut buffer = *b"ab";
        assert_eq!(Urlify::encode_in_place(&mut buffer, 5), None);
    }

    #[test]
    fn test_in_place_no_spaces_is_identity() {
        let mut buffer = *b"plain";
        assert_eq!(Urlify::encode_in_place(&mut buffer, 5), Some(5));
        assert_eq!(&buffer, b"plain");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(Urlify::escape_reserved("a&b ok?"), "a%26b%20ok%3F");
        assert_eq!(Urlify::escape_reserved("plain"), "plain");
    }
}
