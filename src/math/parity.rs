//! 位计数与奇偶性（EPI 4.1，CCI 5.x）
//!
//! 数一个字里置位的个数，以及置位个数的奇偶（parity）。
//! - 逐位右移是基线；
//! - Kernighan技巧`n & (n - 1)`每次抹掉最低的1，循环次数
//!   只和置位数有关；
//! - 奇偶性不用数满：把字对折异或，64位6次折完，答案在
//!   最低位。校验位硬件里就是这么算的。

/// 位计数练习
pub struct Parity;

impl Parity {
    /// 逐位检查
    pub fn count_ones_naive(value: u64) -> u32 {
        let mut remaining = value;
        let mut count = 0;
        while remaining != 0 {
            count += (remaining & 1) as u32;
            remaining >>= 1;
        }
        count
    }

    /// Kernighan抹1法，循环数等于置位数
    pub fn count_ones_kernighan(value: u64) -> u32 {
        let mut remaining = value;
        let mut count = 0;
        while remaining != 0 {
            remaining &= remaining - 1;
            count += 1;
        }
        count
    }

    /// 置位数为奇数时返回true，对折异或版
    pub fn odd_parity_fold(value: u64) -> bool {
        let mut folded = value;
        folded ^= folded >> 32;
        folded ^= folded >> 16;
        folded ^= folded >> 8;
        folded ^= folded >> 4;
        folded ^= folded >> 2;
        folded ^= folded >> 1;
        folded & 1 == 1
    }

    /// 抹1计数版奇偶
    pub fn odd_parity_by_counting(value: u64) -> bool {
        Self::count_ones_kernighan(value) % 2 == 1
    }

    /// 2的幂恰好只有一个置位，0除外
    pub fn is_power_of_two(value: u64) -> bool {
        value != 0 && value & (value - 1) == 0
    }
}

/// 打印示例输入输出
pub fn demo() {
    for value in [0u64, 1, 7, 0b1011_0010, u64::MAX] {
        println!(
            "{:#b}: ones = {}, odd parity = {}",
            value,
            Parity::count_ones_kernighan(value),
            Parity::odd_parity_fold(value)
        );
    }
    println!("is_power_of_two(64) = {}", Parity::is_power_of_two(64));
    println!("is_power_of_two(65) = {}", Parity::is_power_of_two(65));
}
