//! 不用除号的除法（LeetCode 29，EPI 4.6）
//!
//! 只靠减法和移位实现整数除法，向零截断，语义对齐Rust的
//! `/`和`%`。符号位单独算，数值部分全程走`u64`，
//! `i64::MIN`取绝对值也装得下。
//!
//! - 逐次减除数的朴素版，O(商)，商大时慢得没法用；
//! - 倍增版：每轮把除数翻倍到不超过被除数的最大倍数再减，
//!   O(log²)；
//! 除零和`i64::MIN / -1`这两个没有合法答案的输入走错误枚举。

use thiserror::Error;

/// 除法的失败情形
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivideError {
    #[error("除数为零")]
    DivideByZero,
    #[error("商超出i64表示范围")]
    Overflow,
}

/// 手工除法
pub struct DivideNoOperator;

impl DivideNoOperator {
    /// 倍增长除法，O(log²)
    pub fn divide(dividend: i64, divisor: i64) -> Result<i64, DivideError> {
        let (quotient, _) = Self::divide_with_remainder(dividend, divisor)?;
        Ok(quotient)
    }

    /// 商与余数一起给出，余数符号跟随被除数
    pub fn divide_with_remainder(
        dividend: i64,
        divisor: i64,
    ) -> Result<(i64, i64), DivideError> {
        if divisor == 0 {
            return Err(DivideError::DivideByZero);
        }
        let negative = (dividend < 0) != (divisor < 0);
        let (magnitude, rest) =
            Self::divide_magnitudes(dividend.unsigned_abs(), divisor.unsigned_abs());

        let quotient = if negative {
            if magnitude > (i64::MAX as u64) + 1 {
                return Err(DivideError::Overflow);
            }
            (magnitude as i64).wrapping_neg()
        } else {
            if magnitude > i64::MAX as u64 {
                return Err(DivideError::Overflow);
            }
            magnitude as i64
        };
        let remainder = if dividend < 0 {
            (rest as i64).wrapping_neg()
        } else {
            rest as i64
        };
        Ok((quotient, remainder))
    }

    /// 逐次减法版，只适合小商
    pub fn divide_by_subtraction(dividend: i64, divisor: i64) -> Result<i64, DivideError> {
        if divisor == 0 {
            return Err(DivideError::DivideByZero);
        }
        let negative = (dividend < 0) != (divisor < 0);
        let mut remaining = dividend.unsigned_abs();
        let step = divisor.unsigned_abs();
        let mut count = 0u64;
        while remaining >= step {
            remaining -= step;
            count += 1;
        }
        if negative {
            if count > (i64::MAX as u64) + 1 {
                return Err(DivideError::Overflow);
            }
            Ok((count as i64).wrapping_neg())
        } else {
            if count > i64::MAX as u64 {
                return Err(DivideError::Overflow);
            }
            Ok(count as i64)
        }
    }

    /// 数值部分的倍增长除，返回(商, 余数)
    fn divide_magnitudes(mut dividend: u64, divisor: u64) -> (u64, u64) {
        let mut quotient = 0u64;
        while dividend >= divisor {
            let mut chunk = divisor;
            let mut multiple = 1u64;
            // chunk不超过dividend的一半才翻倍，移位不会溢出
            while chunk <= dividend >> 1 {
                chunk <<= 1;
                multiple <<= 1;
            }
            dividend -= chunk;
            quotient += multiple;
        }
        (quotient, dividend)
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("10 / 3 = {:?}", DivideNoOperator::divide(10, 3));
    println!("7 / -2 = {:?}", DivideNoOperator::divide(7, -2));
    println!("-7 / 2 = {:?}", DivideNoOperator::divide(-7, 2));
    println!("-7 %  2 -> {:?}", DivideNoOperator::divide_with_remainder(-7, 2));
    println!("5 / 0 = {:?}", DivideNoOperator::divide(5, 0));
    println!(
        "i64::MIN / -1 = {:?}",
        DivideNoOperator::divide(i64::MIN, -1)
    );
}
