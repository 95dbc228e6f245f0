//! 质因数分解（Project Euler 3，Rosetta Code）
//!
//! 试除分解：抽干因子2后只试奇数，试除上界是√剩余值，
//! 循环结束后剩余值大于1则它本身是最后一个（也是最大的）
//! 质因子。0和1没有质因数分解，返回空。
//!
//! 衍生操作：带重数的因子表、最大质因子、以及由分解直接
//! 得到的因子个数（各重数加一连乘）。

use std::collections::BTreeMap;

/// 质因数分解
pub struct PrimeFactors;

impl PrimeFactors {
    /// 升序返回全部质因子，带重复
    pub fn factorize(n: u64) -> Vec<u64> {
        let mut factors = Vec::new();
        let mut remaining = n;
        while remaining % 2 == 0 && remaining != 0 {
            factors.push(2);
            remaining /= 2;
        }
        let mut candidate = 3u64;
        while candidate <= remaining / candidate {
            while remaining % candidate == 0 {
                factors.push(candidate);
                remaining /= candidate;
            }
            candidate += 2;
        }
        if remaining > 1 {
            factors.push(remaining);
        }
        factors
    }

    /// 因子到重数的映射，键有序方便打印
    pub fn factor_counts(n: u64) -> BTreeMap<u64, u32> {
        let mut counts = BTreeMap::new();
        for factor in Self::factorize(n) {
            *counts.entry(factor).or_insert(0) += 1;
        }
        counts
    }

    /// 最大质因子，n < 2时None
    pub fn largest(n: u64) -> Option<u64> {
        Self::factorize(n).last().copied()
    }

    /// 正因子个数：各重数加一连乘
    pub fn divisor_count(n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        Self::factor_counts(n)
            .values()
            .map(|&count| count as u64 + 1)
            .product()
    }
}

/// 打印示例输入输出
pub fn demo() {
    for n in [12u64, 97, 360, 600_851_475_143] {
        println!("{} = {:?}", n, PrimeFactors::factorize(n));
    }
    println!("largest factor of 600851475143: {:?}", PrimeFactors::largest(600_851_475_143));
    println!("divisors of 360: {}", PrimeFactors::divisor_count(360));
}
