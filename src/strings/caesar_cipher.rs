//! Caesar cipher.
//!
//! The Rosetta Code classic: shift every letter by a fixed
//! amount, wrapping inside its own case. Non-letters pass
//! through untouched, so punctuation and spacing survive.
//!
//! Besides encrypt/decrypt, a frequency-analysis cracker tries
//! all 26 shifts and scores each candidate against English
//! letter frequencies with a chi-squared statistic. On a couple
//! of sentences it lands on the right shift essentially always;
//! one-word inputs are where it gets fooled, which the demo
//! shows honestly.

/// Caesar-cipher exercise struct.
pub struct CaesarCipher;

/// English letter frequencies (percent), a-z.
const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

impl CaesarCipher {
    /// Shift letters forward by `shift` (mod 26).
    pub fn encrypt(text: &str, shift: u8) -> String {
        let shift = shift % 26;
        text.chars()
            .map(|c| match c {
                'a'..='z' => Self::rotate(c, b'a', shift),
                'A'..='Z' => Self::rotate(c, b'A', shift),
                other => other,
            })
            .collect()
    }

    /// Inverse of encrypt.
    pub fn decrypt(text: &str, shift: u8) -> String {
        Self::encrypt(text, 26 - (shift % 26))
    }

    /// Best shift guess by chi-squared against English letter
    /// frequencies. Returns (shift, plaintext). Inputs with no
    /// letters at all come back unchanged with shift 0.
    pub fn crack(ciphertext: &str) -> (u8, String) {
        let letter_count = ciphertext.chars().filter(|c| c.is_ascii_alphabetic()).count();
        if letter_count == 0 {
            return (0, ciphertext.to_string());
        }

        let mut best_shift = 0u8;
        let mut best_score = f64::INFINITY;
        for shift in 0..26u8 {
            let candidate = Self::decrypt(ciphertext, shift);
            let score = Self::chi_squared(&candidate, letter_count);
            if score < best_score {
                best_score = score;
                best_shift = shift;
            }
        }
        (best_shift, Self::decrypt(ciphertext, best_shift))
    }

    fn rotate(c: char, base: u8, shift: u8) -> char {
        (((c as u8 - base + shift) % 26) + base) as char
    }

    fn chi_squared(text: &str, letter_count: usize) -> f64 {
        let mut observed = [0usize; 26];
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                observed[(c.to_ascii_lowercase() as u8 - b'a') as usize] += 1;
            }
        }
        let total = letter_count as f64;
        observed
            .iter()
            .zip(ENGLISH_FREQUENCIES.iter())
            .map(|(&count, &percent)| {
                let expected = total * percent / 100.0;
                let difference = count as f64 - expected;
                difference * difference / expected.max(1e-9)
            })
            .sum()
    }
}

/// Print sample input and output.
pub fn demo() {
    let plaintext = "The quick brown fox jumps over the lazy dog";
    let ciphertext = CaesarCipher::encrypt(plaintext, 7);
    println!("plaintext:  {}", plaintext);
    println!("shift 7:    {}", ciphertext);
    println!("decrypted:  {}", CaesarCipher::decrypt(&ciphertext, 7));

    let (guessed_shift, recovered) = CaesarCipher::crack(&ciphertext);
    println!("cracked shift {} -> {}", guessed_shift, recovered);

    let (shift, text) = CaesarCipher::crack(&CaesarCipher::encrypt("xyz", 3));
    println!("one short word cracks to shift {} -> {:?}", shift, text);
}
