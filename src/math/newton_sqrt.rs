//! 牛顿法开方（LeetCode 69，Rosetta Code）
//!
//! 求x的平方根：
//! - 整数版求⌊√x⌋，牛顿迭代x_{k+1} = (x_k + n/x_k) / 2，
//!   整数序列单调下降到答案附近，迭代到不再减小即停，
//!   u64全域安全，不经过浮点所以2^52以上也不丢精度；
//! - 二分版在[1, n]上找最大的m满足m ≤ n/m；
//! - 浮点版按相对误差收敛，展示同一公式在连续域的样子。

/// 平方根计算
pub struct NewtonSqrt;

impl NewtonSqrt {
    /// 整数牛顿迭代，返回⌊√n⌋
    pub fn isqrt(n: u64) -> u64 {
        if n < 2 {
            return n;
        }
        // 初值取比√n大的2的幂，保证单调下降
        let mut estimate = 1u64 << (n.ilog2() / 2 + 1);
        loop {
            let next = (estimate + n / estimate) / 2;
            if next >= estimate {
                return estimate;
            }
            estimate = next;
        }
    }

    /// 二分查找版
    pub fn isqrt_binary(n: u64) -> u64 {
        if n < 2 {
            return n;
        }
        let mut low = 1u64;
        let mut high = n;
        while low < high {
            let mid = low + (high - low + 1) / 2;
            // mid² ≤ n 写成除法避免溢出
            if mid <= n / mid {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        low
    }

    /// 浮点牛顿迭代，负数返回None
    pub fn sqrt_f64(value: f64, tolerance: f64) -> Option<f64> {
        if value < 0.0 || !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(0.0);
        }
        let mut estimate = if value >= 1.0 { value / 2.0 } else { 1.0 };
        loop {
            let next = 0.5 * (estimate + value / estimate);
            if (next - estimate).abs() <= tolerance * next {
                return Some(next);
            }
            estimate = next;
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    for n in [0u64, 1, 8, 9, 10, 99, 100, 2_147_395_600] {
        println!("isqrt({}) = {}", n, NewtonSqrt::isqrt(n));
    }
    if let Some(root) = NewtonSqrt::sqrt_f64(2.0, 1e-12) {
        println!("sqrt(2.0) ~= {:.12}", root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares() {
        for root in 0..200u64 {
            assert_eq!(NewtonSqrt::isqrt(root * root), root);
        }
    }

    #[test]
    fn test_floor_behaviour() {
        assert_eq!(NewtonSqrt::isqrt(8), 2);
        assert_eq!(NewtonSqrt::isqrt(10), 3);
        assert_eq!(NewtonSqrt::isqrt(15), 3);
        assert_eq!(NewtonSqrt::isqrt(16), 4);
        assert_eq!(NewtonSqrt::isqrt(24), 4);
        assert_eq!(NewtonSqrt::isqrt(99), 9);
    }

    #[test]
    fn test_binary_agrees_with_newton() {
        for n in 0..3000u64 {
            assert_eq!(NewtonSqrt::isqrt(n), NewtonSqrt::isqrt_binary(n), "n = {n}");
        }
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(NewtonSqrt::isqrt(u64::MAX), (1u64 << 32) - 1);
        let big_root = (1u64 << 32) - 1;
        assert_eq!(NewtonSqrt::isqrt(big_root * big_root), big_root);
        assert_eq!(NewtonSqrt::isqrt_binary(u64::MAX), (1u64 << 32) - 1);
    }

    #[test]
    fn test_result_brackets_input() {
        for n in (0..100_000u64).step_by(977) {
            let root = NewtonSqrt::isqrt(n);
            assert!(root * root <= n);
            assert!((root + 1) * (root + 1) > n);
        }
    }

    #[test]
    fn test_float_version() {
        let root = NewtonSqrt::sqrt_f64(2.0, 1e-12).expect("positive input in test");
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);

        let root = NewtonSqrt::sqrt_f64(0.25, 1e-12).expect("positive input in test");
        assert!((root - 0.5).abs() < 1e-9);

        assert_eq!(NewtonSqrt::sqrt_f64(0.0, 1e-12), Some(0.0));
        assert_eq!(NewtonSqrt::sqrt_f64(-1.0, 1e-12), None);
        assert_eq!(NewtonSqrt::sqrt_f64(f64::INFINITY, 1e-12), None);
    }
}
