//! Roman numerals.
//!
//! LeetCode 12/13 plus the Rosetta Code staple: convert both
//! directions between integers and roman numerals.
//!
//! Encoding walks a value table that folds the subtractive pairs
//! (CM, XC, IV...) in as first-class entries, so the greedy loop
//! stays branch-free. Decoding reads right to left: a symbol
//! smaller than the one after it is subtracted, everything else
//! added.
//!
//! Encoding accepts 1..=3999, the classic representable range.
//! Decoding validates by re-encoding, which rejects junk like
//! "IIII" or "IC" without a pile of pattern rules.

/// Roman-numeral exercise struct.
pub struct RomanNumerals;

const VALUE_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

impl RomanNumerals {
    /// Integer to numeral. None outside 1..=3999.
    pub fn encode(mut value: u32) -> Option<String> {
        if value == 0 || value > 3999 {
            return None;
        }
        let mut numeral = String::new();
        for &(step, symbol) in VALUE_TABLE.iter() {
            while value >= step {
                numeral.push_str(symbol);
                value -= step;
            }
        }
        Some(numeral)
    }

    /// Numeral to integer, lenient: any subtractive-looking pair
    /// is honored. "IC" decodes to 99 here.
    pub fn decode_lenient(numeral: &str) -> Option<u32> {
        let mut total: i64 = 0;
        let mut previous: i64 = 0;
        for c in numeral.chars().rev() {
            let value = Self::symbol_value(c)? as i64;
            if value < previous {
                total -= value;
            } else {
                total += value;
                previous = value;
            }
        }
        if total <= 0 {
            return None;
        }
        Some(total as u32)
    }

    /// Strict decode: only accepts canonical numerals.
    pub fn decode(numeral: &str) -> Option<u32> {
        let value = Self::decode_lenient(numeral)?;
        if Self::encode(value)? == numeral {
            Some(value)
        } else {
            None
        }
    }

    fn symbol_value(symbol: char) -> Option<u32> {
        match symbol {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    for value in [9, 14, 1994, 3999] {
        println!("{} -> {:?}", value, RomanNumerals::encode(value));
    }
    for numeral in ["MCMXCIV", "LVIII", "IIII", "IC"] {
        println!(
            "{:?} -> strict {:?}, lenient {:?}",
            numeral,
            RomanNumerals::decode(numeral),
            RomanNumerals::decode_lenient(numeral)
        );
    }
}
