//! 三步上楼梯
//!
//! CCI 8.1：一次可以跨1、2或3级台阶，n级楼梯有多少种走法。
//! 递推是三项和 f(n) = f(n-1) + f(n-2) + f(n-3)。
//!
//! 记忆化版和滚动数组版对比；再加一个通用版，步长集合
//! 任意给，楼梯问题换皮时不用重写。

use std::collections::HashMap;

/// 三步上楼梯练习结构体
pub struct TripleStep;

impl TripleStep {
    /// 记忆化递归
    pub fn count_ways(steps: u32) -> u64 {
        let mut memo: HashMap<u32, u64> = HashMap::new();
        Self::count(steps, &mut memo)
    }

    fn count(steps: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        match steps {
            0 => 1,
            1 => 1,
            2 => 2,
            _ => {
                if let Some(&value) = memo.get(&steps) {
                    return value;
                }
                let value = Self::count(steps - 1, memo)
                    + Self::count(steps - 2, memo)
                    + Self::count(steps - 3, memo);
                memo.insert(steps, value);
                value
            }
        }
    }

    /// 滚动数组，常数空间
    pub fn count_ways_iterative(steps: u32) -> u64 {
        if steps < 2 {
            return 1;
        }
        // window = (f(n-3), f(n-2), f(n-1))，从n=3前夜起步
        let mut window = (1u64, 1u64, 2u64);
        for _ in 3..=steps {
            window = (window.1, window.2, window.0 + window.1 + window.2);
        }
        window.2
    }

    /// 任意步长集合的推广
    ///
    /// allowed为空或全是0时只剩"原地不动"一种可能，除0级外都是0种。
    pub fn count_ways_custom(steps: u32, allowed: &[u32]) -> u64 {
        let mut ways = vec![0u64; steps as usize + 1];
        ways[0] = 1;
        for stair in 1..=steps as usize {
            for &step in allowed {
                let step = step as usize;
                if step > 0 && step <= stair {
                    ways[stair] += ways[stair - step];
                }
            }
        }
        ways[steps as usize]
    }
}

/// 打印示例输入输出
pub fn demo() {
    for steps in [3, 5, 10] {
        println!(
            "{} stairs, hops of 1/2/3: {} ways",
            steps,
            TripleStep::count_ways(steps)
        );
    }
    println!(
        "20 stairs iterative: {} ways",
        TripleStep::count_ways_iterative(20)
    );
    println!(
        "10 stairs, hops of 2/5 only: {} ways",
        TripleStep::count_ways_custom(10, &[2, 5])
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_staircases() {
        assert_eq!(TripleStep::count_ways(0), 1);
        assert_eq!(TripleStep::count_ways(1), 1);
        assert_eq!(TripleStep::count_ways(2), 2);
        assert_eq!(TripleStep::count_ways(3), 4);
        assert_eq!(TripleStep::count_ways(4), 7);
    }

    #[test]
    fn test_versions_agree() {
        for steps in 0..=30 {
            assert_eq!(
                TripleStep::count_ways(steps),
                TripleStep::count_ways_iterative(steps),
                "diverged at {}",
                steps
            );
            assert_eq!(
                TripleStep::count_ways(steps),
                TripleStep::count_ways_custom(steps, &[1, 2, 3]),
                "custom diverged at {}",
                steps
            );
        }
    }

    #[test]
    fn test_custom_step_sets() {
        // 只能跨2级时，奇数楼梯无解
        assert_eq!(TripleStep::count_ways_custom(7, &[2]), 0);
        assert_eq!(TripleStep::count_ways_custom(8, &[2]), 1);
        // 经典爬楼梯（1/2）就是斐波那契
        assert_eq!(TripleStep::count_ways_custom(10, &[1, 2]), 89);
    }

    #[test]
    fn test_degenerate_step_sets() {
        assert_eq!(TripleStep::count_ways_custom(5, &[]), 0);
        assert_eq!(TripleStep::count_ways_custom(0, &[]), 1);
        assert_eq!(TripleStep::count_ways_custom(5, &[0]), 0);
    }
}
