//! 多数元素（LeetCode 169，EPI摩尔投票）
//!
//! 找出现次数超过⌊n/2⌋的元素。三种做法：
//! - 哈希计数，O(n)时间O(n)空间，最直接；
//! - 排序取中位：多数元素必然跨过中点，O(n log n)；
//! - Boyer-Moore投票：候选相同加票不同减票，归零换候选，
//!   O(n)时间O(1)空间。投票只保证"如果多数存在就是它"，
//!   所以最后必须复核一遍票数，这步最容易被省掉出错。

use std::collections::HashMap;

/// 多数元素问题
pub struct MajorityElement;

impl MajorityElement {
    /// 哈希计数
    pub fn find_by_counting(values: &[i64]) -> Option<i64> {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for &value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .find(|&(_, count)| count * 2 > values.len())
            .map(|(value, _)| value)
    }

    /// 排序取中点
    pub fn find_by_sorting(values: &[i64]) -> Option<i64> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let candidate = sorted[sorted.len() / 2];
        let count = sorted.iter().filter(|&&v| v == candidate).count();
        (count * 2 > values.len()).then_some(candidate)
    }

    /// Boyer-Moore投票加复核
    pub fn find_by_voting(values: &[i64]) -> Option<i64> {
        let mut candidate = None;
        let mut votes = 0usize;
        for &value in values {
            if votes == 0 {
                candidate = Some(value);
                votes = 1;
            } else if candidate == Some(value) {
                votes += 1;
            } else {
                votes -= 1;
            }
        }
        // 投票结果必须复核，否则无多数时会返回残留候选
        let candidate = candidate?;
        let count = values.iter().filter(|&&v| v == candidate).count();
        (count * 2 > values.len()).then_some(candidate)
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [2, 2, 1, 1, 1, 2, 2];
    println!("values: {:?}", values);
    println!("majority: {:?}", MajorityElement::find_by_voting(&values));

    let no_majority = [1, 2, 3, 4];
    println!(
        "no majority in {:?}: {:?}",
        no_majority,
        MajorityElement::find_by_voting(&no_majority)
    );
}
