//! 两数之和（LeetCode 1）
//!
//! 在数组里找两个数使其和为target，返回下标对。三种做法：
//! - 双重循环，O(n²)，不需要额外空间；
//! - 一遍哈希，边走边查"差值是否已出现过"，O(n)；
//! - 排序后双指针，O(n log n)，但排序打乱下标，只能返回值对，
//!   这正是这道题下标版和值版的区别所在。
//!
//! 同一个元素不能用两次，哈希版"先查后插"天然保证了这一点。

use std::collections::HashMap;

/// 两数之和的几种做法
pub struct TwoSum;

impl TwoSum {
    /// 暴力枚举所有下标对，O(n²)
    pub fn brute_force(values: &[i64], target: i64) -> Option<(usize, usize)> {
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] + values[j] == target {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// 一遍哈希，O(n)
    pub fn with_map(values: &[i64], target: i64) -> Option<(usize, usize)> {
        let mut seen: HashMap<i64, usize> = HashMap::new();
        for (index, &value) in values.iter().enumerate() {
            if let Some(&partner) = seen.get(&(target - value)) {
                return Some((partner, index));
            }
            seen.insert(value, index);
        }
        None
    }

    /// 排序双指针，返回的是一对值而非下标
    pub fn values_sorted(values: &[i64], target: i64) -> Option<(i64, i64)> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let mut low = 0;
        let mut high = sorted.len().checked_sub(1)?;
        while low < high {
            let sum = sorted[low] + sorted[high];
            match sum.cmp(&target) {
                std::cmp::Ordering::Equal => return Some((sorted[low], sorted[high])),
                std::cmp::Ordering::Less => low += 1,
                std::cmp::Ordering::Greater => high -= 1,
            }
        }
        None
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [2, 7, 11, 15];
    println!("values: {:?}, target 9", values);
    println!("indices: {:?}", TwoSum::with_map(&values, 9));

    let values = [3, 2, 4];
    println!("values: {:?}, target 6 -> {:?}", values, TwoSum::with_map(&values, 6));
    println!("value pair: {:?}", TwoSum::values_sorted(&values, 6));
    println!("no answer for 100: {:?}", TwoSum::with_map(&values, 100));
}
