//! 素数筛（埃拉托斯特尼，Rosetta Code / Project Euler 7,10）
//!
//! - 试除判素：只试到√n，且2之后只试奇数；
//! - 埃氏筛：布尔数组从p²开始划掉倍数，O(n log log n)，
//!   从p²起步是因为更小的合数倍数早被更小的素数划过了；
//! - 筛上数第n个素数、区间内素数求和这些常见衍生问。

/// 素数工具
pub struct PrimeSieve;

impl PrimeSieve {
    /// 试除判素，O(√n)
    pub fn is_prime(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n < 4 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }
        let mut candidate = 3u64;
        // 用除法写上界，candidate²在大n附近不会溢出
        while candidate <= n / candidate {
            if n % candidate == 0 {
                return false;
            }
            candidate += 2;
        }
        true
    }

    /// 埃氏筛出不超过limit的全部素数
    pub fn primes_up_to(limit: usize) -> Vec<u64> {
        if limit < 2 {
            return Vec::new();
        }
        let mut composite = vec![false; limit + 1];
        let mut primes = Vec::new();
        for n in 2..=limit {
            if composite[n] {
                continue;
            }
            primes.push(n as u64);
            let mut multiple = n * n;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += n;
            }
        }
        primes
    }

    /// 第n个素数（1-based），筛的上界按素数定理估计后翻倍兜底
    pub fn nth_prime(n: usize) -> Option<u64> {
        if n == 0 {
            return None;
        }
        // p_n < n(ln n + ln ln n)对n≥6成立，小n直接给个小上界
        let mut limit = if n < 6 {
            15
        } else {
            let nf = n as f64;
            (nf * (nf.ln() + nf.ln().ln())).ceil() as usize
        };
        loop {
            let primes = Self::primes_up_to(limit);
            if primes.len() >= n {
                return Some(primes[n - 1]);
            }
            limit *= 2;
        }
    }

    /// 区间[low, high]内的素数和
    pub fn sum_in_range(low: u64, high: u64) -> u64 {
        if high < low {
            return 0;
        }
        Self::primes_up_to(high as usize)
            .into_iter()
            .filter(|&p| p >= low)
            .sum()
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("primes up to 50: {:?}", PrimeSieve::primes_up_to(50));
    println!("is_prime(97): {}", PrimeSieve::is_prime(97));
    println!("is_prime(91): {}", PrimeSieve::is_prime(91));
    println!("10001st prime: {:?}", PrimeSieve::nth_prime(10_001));
    println!("sum of primes below 2000000: {}", PrimeSieve::sum_in_range(2, 1_999_999));
}
