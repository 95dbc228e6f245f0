//! 最大子数组和
//!
//! Kadane算法（LeetCode 53）：连续子数组的最大和。
//! 核心一句话：前缀和为负就丢掉重来。
//!
//! - Kadane O(n)；
//! - 分治 O(n log n)，跨中点的情况单独算，归并排序的
//!   思路迁移过来，面试常被追问；
//! - 带下标版返回 (和, 起点, 终点闭区间)，打印用。
//!
//! 全负数组约定取最大的那个元素，不允许取空段。

/// 最大子数组练习结构体
pub struct MaxSubarray;

impl MaxSubarray {
    /// Kadane算法
    ///
    /// 空数组返回None。
    pub fn kadane(values: &[i64]) -> Option<i64> {
        let first = *values.first()?;
        let mut best = first;
        let mut running = first;
        for &value in &values[1..] {
            running = value.max(running + value);
            best = best.max(running);
        }
        Some(best)
    }

    /// 分治版
    pub fn divide_and_conquer(values: &[i64]) -> Option<i64> {
        if values.is_empty() {
            return None;
        }
        Some(Self::solve(values))
    }

    fn solve(values: &[i64]) -> i64 {
        if values.len() == 1 {
            return values[0];
        }
        let mid = values.len() / 2;
        let left = Self::solve(&values[..mid]);
        let right = Self::solve(&values[mid..]);

        // 跨中点：左半段的最大后缀 + 右半段的最大前缀
        let mut suffix = i64::MIN;
        let mut running = 0i64;
        for &value in values[..mid].iter().rev() {
            running += value;
            suffix = suffix.max(running);
        }
        let mut prefix = i64::MIN;
        running = 0;
        for &value in &values[mid..] {
            running += value;
            prefix = prefix.max(running);
        }

        left.max(right).max(suffix + prefix)
    }

    /// 带位置的Kadane，返回 (和, start, end)，end为闭区间
    pub fn kadane_with_range(values: &[i64]) -> Option<(i64, usize, usize)> {
        if values.is_empty() {
            return None;
        }
        let mut best = values[0];
        let mut best_range = (0usize, 0usize);
        let mut running = values[0];
        let mut running_start = 0usize;

        for (index, &value) in values.iter().enumerate().skip(1) {
            if running + value < value {
                running = value;
                running_start = index;
            } else {
                running += value;
            }
            if running > best {
                best = running;
                best_range = (running_start, index);
            }
        }
        Some((best, best_range.0, best_range.1))
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    println!("input: {:?}", values);
    println!("kadane:             {:?}", MaxSubarray::kadane(&values));
    println!(
        "divide and conquer: {:?}",
        MaxSubarray::divide_and_conquer(&values)
    );
    if let Some((sum, start, end)) = MaxSubarray::kadane_with_range(&values) {
        println!(
            "best slice [{}..={}] = {:?} sums to {}",
            start,
            end,
            &values[start..=end],
            sum
        );
    }

    let gloomy = [-8, -3, -6, -2, -5, -4];
    println!("all negative {:?}: {:?}", gloomy, MaxSubarray::kadane(&gloomy));
}
