//! 最大公约数与最小公倍数（欧几里得，Rosetta Code）
//!
//! - 辗转相除的递归与迭代两种写法；
//! - Stein二进制GCD：只用移位和减法，公共因子2先提出来，
//!   剩下的奇偶讨论，古老但在没有快速取模的硬件上真有用；
//! - LCM通过a / gcd * b计算，先除后乘躲开一次溢出机会，
//!   gcd(0, 0)约定为0，此时lcm也为0。

/// 公约数公倍数
pub struct GcdLcm;

impl GcdLcm {
    /// 递归辗转相除
    pub fn gcd_recursive(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            Self::gcd_recursive(b, a % b)
        }
    }

    /// 迭代辗转相除
    pub fn gcd(a: u64, b: u64) -> u64 {
        let (mut a, mut b) = (a, b);
        while b != 0 {
            let rest = a % b;
            a = b;
            b = rest;
        }
        a
    }

    /// Stein二进制GCD，只用移位减法
    pub fn gcd_binary(a: u64, b: u64) -> u64 {
        if a == 0 {
            return b;
        }
        if b == 0 {
            return a;
        }
        let shift = (a | b).trailing_zeros();
        let mut a = a >> a.trailing_zeros();
        let mut b = b >> b.trailing_zeros();
        while a != b {
            if a < b {
                std::mem::swap(&mut a, &mut b);
            }
            a -= b;
            a >>= a.trailing_zeros();
        }
        a << shift
    }

    /// 最小公倍数，gcd(0,0)=0时约定返回0
    pub fn lcm(a: u64, b: u64) -> u64 {
        let divisor = Self::gcd(a, b);
        if divisor == 0 {
            0
        } else {
            a / divisor * b
        }
    }

    /// 扩展欧几里得：返回(g, x, y)满足ax + by = g
    pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
        if b == 0 {
            (a, 1, 0)
        } else {
            let (g, x, y) = Self::extended_gcd(b, a % b);
            (g, y, x - (a / b) * y)
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("gcd(48, 36) = {}", GcdLcm::gcd(48, 36));
    println!("gcd_binary(48, 36) = {}", GcdLcm::gcd_binary(48, 36));
    println!("lcm(4, 6) = {}", GcdLcm::lcm(4, 6));
    let (g, x, y) = GcdLcm::extended_gcd(240, 46);
    println!("extended_gcd(240, 46): g={}, x={}, y={}", g, x, y);
    println!("check: 240*{} + 46*{} = {}", x, y, 240 * x + 46 * y);
}
