//! Fibonacci, second pass.
//!
//! Rewritten from memory some weeks after the dp/ version. Went
//! with free functions this time, and instead of the first pass's
//! "caller keeps n <= 186" contract the overflow is handled both
//! ways: `fib` wraps modulo 2^128, `fib_checked` returns `None`.
//! An iterator flavor fell out for free and is worth keeping.

/// Iterative, wrapping modulo 2^128 once n > 186.
pub fn fib(n: u32) -> u128 {
    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 0..n {
        let next = previous.wrapping_add(current);
        previous = current;
        current = next;
    }
    previous
}

/// Overflow-aware variant, `None` once F(n) leaves u128 (n > 186).
pub fn fib_checked(n: u32) -> Option<u128> {
    let (mut previous, mut current) = (0u128, 1u128);
    for _ in 0..n {
        let next = previous.checked_add(current)?;
        previous = current;
        current = next;
    }
    Some(previous)
}

/// Endless Fibonacci iterator starting at F(0).
pub fn sequence() -> impl Iterator<Item = u128> {
    let mut pair = (0u128, 1u128);
    std::iter::from_fn(move || {
        let value = pair.0;
        pair = (pair.1, pair.0.checked_add(pair.1)?);
        Some(value)
    })
}

/// Print sample input and output.
pub fn demo() {
    let first: Vec<u128> = sequence().take(12).collect();
    println!("first twelve: {:?}", first);
    println!("fib(90)  = {}", fib(90));
    println!("fib(186) = {:?}", fib_checked(186));
    println!("fib(187) = {:?}", fib_checked(187));
}
