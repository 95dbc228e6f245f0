//! 快速幂（LeetCode 50，EPI 4.7）
//!
//! 二分求幂：指数按二进制位拆开，底数逐位平方，置位时
//! 乘进结果，O(log exp)次乘法。
//!
//! - 迭代版用`checked_mul`，溢出返回None而不是静默回绕；
//! - 递归版按"偶数拆半方，奇数多乘一次"写，形状贴数学定义；
//! - 模幂版走u128中间量，模数在u64内乘法不会溢出，
//!   这是RSA、哈希这些场合真正在用的那一个。

/// 二分求幂
pub struct FastPower;

impl FastPower {
    /// 迭代平方乘，溢出返回None
    pub fn power(base: u64, exp: u32) -> Option<u64> {
        let mut result = 1u64;
        let mut square = base;
        let mut remaining = exp;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(square)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.checked_mul(square)?;
            }
        }
        Some(result)
    }

    /// 递归版
    pub fn power_recursive(base: u64, exp: u32) -> Option<u64> {
        match exp {
            0 => Some(1),
            _ if exp % 2 == 0 => {
                let half = Self::power_recursive(base, exp / 2)?;
                half.checked_mul(half)
            }
            _ => {
                let rest = Self::power_recursive(base, exp - 1)?;
                rest.checked_mul(base)
            }
        }
    }

    /// 模幂，modulus为0时没有定义返回None
    pub fn mod_power(base: u64, exp: u64, modulus: u64) -> Option<u64> {
        if modulus == 0 {
            return None;
        }
        if modulus == 1 {
            return Some(0);
        }
        let modulus = modulus as u128;
        let mut result = 1u128;
        let mut square = base as u128 % modulus;
        let mut remaining = exp;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * square % modulus;
            }
            square = square * square % modulus;
            remaining >>= 1;
        }
        Some(result as u64)
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("2^10 = {:?}", FastPower::power(2, 10));
    println!("3^0 = {:?}", FastPower::power(3, 0));
    println!("0^0 = {:?} (convention)", FastPower::power(0, 0));
    println!("2^64 overflows: {:?}", FastPower::power(2, 64));
    println!("7^560 mod 561 = {:?} (Carmichael)", FastPower::mod_power(7, 560, 561));
    println!("2^90 mod 1e9+7 = {:?}", FastPower::mod_power(2, 90, 1_000_000_007));
}
