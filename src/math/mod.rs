//! 数论与位运算题目
//!
//! 整数域的经典练习：手工实现四则运算、素数、快速幂、
//! 位技巧。统一用u64/i64，溢出风险点都显式用checked或
//! u128中间量兜住，不指望release模式的回绕侥幸通过。

pub mod add_bitwise;
pub mod collatz;
pub mod divide_no_operator;
pub mod fast_power;
pub mod gcd_lcm;
pub mod happy_number;
pub mod newton_sqrt;
pub mod parity;
pub mod prime_factors;
pub mod prime_sieve;
pub mod reverse_bits;

pub use add_bitwise::AddBitwise;
pub use collatz::Collatz;
pub use divide_no_operator::{DivideError, DivideNoOperator};
pub use fast_power::FastPower;
pub use gcd_lcm::GcdLcm;
pub use happy_number::HappyNumber;
pub use newton_sqrt::NewtonSqrt;
pub use parity::Parity;
pub use prime_factors::PrimeFactors;
pub use prime_sieve::PrimeSieve;
pub use reverse_bits::ReverseBits;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "math/add-bitwise",
            Category::Math,
            "Addition and subtraction from xor and carries",
            add_bitwise::demo,
        ),
        Demo::new(
            "math/divide-no-operator",
            Category::Math,
            "Truncating division by doubling, explicit error cases",
            divide_no_operator::demo,
        ),
        Demo::new(
            "math/gcd-lcm",
            Category::Math,
            "Euclidean, binary and extended gcd plus lcm",
            gcd_lcm::demo,
        ),
        Demo::new(
            "math/prime-sieve",
            Category::Math,
            "Sieve of Eratosthenes, trial division, nth prime",
            prime_sieve::demo,
        ),
        Demo::new(
            "math/fast-power",
            Category::Math,
            "Binary exponentiation, checked and modular",
            fast_power::demo,
        ),
        Demo::new(
            "math/newton-sqrt",
            Category::Math,
            "Integer and floating square roots by Newton iteration",
            newton_sqrt::demo,
        ),
        Demo::new(
            "math/parity",
            Category::Math,
            "Popcount tricks and xor-folded parity",
            parity::demo,
        ),
        Demo::new(
            "math/reverse-bits",
            Category::Math,
            "Bit reversal by shifting and by mask swaps",
            reverse_bits::demo,
        ),
        Demo::new(
            "math/prime-factors",
            Category::Math,
            "Trial-division factorization and divisor counting",
            prime_factors::demo,
        ),
        Demo::new(
            "math/collatz",
            Category::Math,
            "Hailstone sequences and the longest chain below a limit",
            collatz::demo,
        ),
        Demo::new(
            "math/happy-number",
            Category::Math,
            "Digit-square iteration with two cycle detectors",
            happy_number::demo,
        ),
    ]
}
