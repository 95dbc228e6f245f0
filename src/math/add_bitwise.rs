//! 位运算加法（CCI 17.1，EPI 4.x）
//!
//! 不用加号实现加法：异或给出不带进位的和，与运算左移一位
//! 给出进位，循环到进位耗尽。补码表示下同一套位运算对负数
//! 同样成立，减法则是加上相反数（按位取反再加一）。
//!
//! 实现上先把i64转成u64做位运算再转回来，移位和回绕都是
//! 定义良好的行为，不会在溢出检查上挨panic。
//!
//! 驱动部分对一张固定参数表逐项核对与内建运算符的一致性，
//! 这是本题传统的自检方式。

/// 位运算算术
pub struct AddBitwise;

impl AddBitwise {
    /// 迭代进位循环
    pub fn add(a: i64, b: i64) -> i64 {
        let mut sum = a as u64;
        let mut carry = b as u64;
        while carry != 0 {
            let without_carry = sum ^ carry;
            carry = (sum & carry) << 1;
            sum = without_carry;
        }
        sum as i64
    }

    /// 递归版，进位作为新的加数
    pub fn add_recursive(a: i64, b: i64) -> i64 {
        Self::add_bits(a as u64, b as u64) as i64
    }

    fn add_bits(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            Self::add_bits(a ^ b, (a & b) << 1)
        }
    }

    /// 减法：加上补码意义下的相反数
    pub fn subtract(a: i64, b: i64) -> i64 {
        Self::add(a, Self::negate(b))
    }

    /// 取相反数：按位取反加一
    pub fn negate(value: i64) -> i64 {
        Self::add(!value, 1)
    }

    /// 固定参数表上的一致性核对，全对返回true
    pub fn check_against_builtin(pairs: &[(i64, i64)]) -> bool {
        pairs.iter().all(|&(a, b)| {
            Self::add(a, b) == a.wrapping_add(b)
                && Self::subtract(a, b) == a.wrapping_sub(b)
        })
    }
}

/// 打印示例输入输出
pub fn demo() {
    let table: [(i64, i64); 6] = [(3, 5), (0, 0), (-4, 9), (123, -456), (-7, -8), (1 << 40, 1 << 40)];
    for (a, b) in table {
        println!("{} + {} = {}", a, b, AddBitwise::add(a, b));
    }
    println!("10 - 17 = {}", AddBitwise::subtract(10, 17));
    println!("all match builtin: {}", AddBitwise::check_against_builtin(&table));
}
