//! Generate valid parentheses (CCI 8.9, LeetCode 22).
//!
//! All strings of n balanced parenthesis pairs. The backtracking
//! generator tracks how many opens and closes are still available
//! and never builds an invalid prefix, so the output size equals
//! the Catalan number C(n) with no filtering pass.
//!
//! A separate validity checker and a closed-form Catalan counter
//! back the generator up in tests.

/// Balanced-parentheses exercises.
pub struct GenerateParens;

impl GenerateParens {
    /// All valid strings of `pairs` parenthesis pairs, lexicographic
    /// with '(' ordered before ')'.
    pub fn generate(pairs: usize) -> Vec<String> {
        let mut result = Vec::new();
        let mut buffer = String::with_capacity(pairs * 2);
        Self::extend(pairs, 0, 0, &mut buffer, &mut result);
        result
    }

    fn extend(
        pairs: usize,
        opened: usize,
        closed: usize,
        buffer: &mut String,
        result: &mut Vec<String>,
    ) {
        if closed == pairs {
            result.push(buffer.clone());
            return;
        }
        if opened < pairs {
            buffer.push('(');
            Self::extend(pairs, opened + 1, closed, buffer, result);
            buffer.pop();
        }
        if closed < opened {
            buffer.push(')');
            Self::extend(pairs, opened, closed + 1, buffer, result);
            buffer.pop();
        }
    }

    /// Counter-based validity check, no stack needed for one bracket kind.
    pub fn is_valid(text: &str) -> bool {
        let mut depth = 0i64;
        for c in text.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => return false,
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }

    /// Catalan number C(n), the expected output size.
    pub fn catalan(n: u64) -> u64 {
        // C(0) = 1, C(k+1) = C(k) * 2(2k+1) / (k+2)
        let mut c = 1u64;
        for k in 0..n {
            c = c * 2 * (2 * k + 1) / (k + 2);
        }
        c
    }
}

/// 打印示例输入输出
pub fn demo() {
    for pairs in 1..=3 {
        let strings = GenerateParens::generate(pairs);
        println!("{} pairs ({} strings): {}", pairs, strings.len(), strings.join(" "));
    }
    for n in [4u64, 8, 12] {
        println!("catalan({}) = {}", n, GenerateParens::catalan(n));
    }
}
