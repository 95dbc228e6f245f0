//! 合并区间（LeetCode 56 / 57）
//!
//! 区间集合按起点排序后一遍扫描：当前区间与累积区间相接
//! （起点不超过累积终点）就并进去，否则开新段。
//! 闭区间语义，[1,4]和[4,5]算相接。
//!
//! 附带两个常见变体：
//! - 往已排好的不重叠区间里插入一个新区间（LeetCode 57），
//!   三段式：左边照抄、中间吞并、右边照抄；
//! - 合并后的总覆盖长度。

/// 区间合并
pub struct MergeIntervals;

impl MergeIntervals {
    /// 排序后线性合并，O(n log n)
    pub fn merge(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
        let mut sorted = intervals.to_vec();
        sorted.sort_unstable();
        let mut merged: Vec<(i64, i64)> = Vec::with_capacity(sorted.len());
        for (start, end) in sorted {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    /// 插入新区间并保持不重叠（输入已排序不重叠）
    pub fn insert(intervals: &[(i64, i64)], new: (i64, i64)) -> Vec<(i64, i64)> {
        let mut result = Vec::with_capacity(intervals.len() + 1);
        let (mut start, mut end) = new;
        let mut placed = false;
        for &(s, e) in intervals {
            if e < start {
                // 完全在新区间左侧
                result.push((s, e));
            } else if s > end {
                if !placed {
                    result.push((start, end));
                    placed = true;
                }
                result.push((s, e));
            } else {
                // 有接触，吞并
                start = start.min(s);
                end = end.max(e);
            }
        }
        if !placed {
            result.push((start, end));
        }
        result
    }

    /// 合并后的总覆盖长度
    pub fn covered_length(intervals: &[(i64, i64)]) -> i64 {
        Self::merge(intervals)
            .iter()
            .map(|(start, end)| end - start)
            .sum()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let intervals = [(1, 3), (2, 6), (8, 10), (15, 18)];
    println!("intervals: {:?}", intervals);
    println!("merged: {:?}", MergeIntervals::merge(&intervals));
    println!("covered length: {}", MergeIntervals::covered_length(&intervals));

    let sorted = [(1, 3), (6, 9)];
    println!(
        "insert (2,5) into {:?}: {:?}",
        sorted,
        MergeIntervals::insert(&sorted, (2, 5))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        let intervals = [(1, 3), (2, 6), (8, 10), (15, 18)];
        assert_eq!(
            MergeIntervals::merge(&intervals),
            vec![(1, 6), (8, 10), (15, 18)]
        );
    }

    #[test]
    fn test_touching_endpoints_merge() {
        assert_eq!(MergeIntervals::merge(&[(1, 4), (4, 5)]), vec![(1, 5)]);
    }

    #[test]
    fn test_unsorted_input() {
        let intervals = [(8, 10), (1, 3), (15, 18), (2, 6)];
        assert_eq!(
            MergeIntervals::merge(&intervals),
            vec![(1, 6), (8, 10), (15, 18)]
        );
    }

    #[test]
    fn test_contained_interval() {
        assert_eq!(MergeIntervals::merge(&[(1, 10), (2, 3), (4, 5)]), vec![(1, 10)]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(MergeIntervals::merge(&[]).is_empty());
        assert_eq!(MergeIntervals::merge(&[(5, 7)]), vec![(5, 7)]);
    }

    #[test]
    fn test_insert_middle() {
        let sorted = [(1, 3), (6, 9)];
        assert_eq!(
            MergeIntervals::insert(&sorted, (2, 5)),
            vec![(1, 5), (6, 9)]
        );
    }

    #[test]
    fn test_insert_swallows_several() {
        let sorted = [(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)];
        assert_eq!(
            MergeIntervals::insert(&sorted, (4, 8)),
            vec![(1, 2), (3, 10), (12, 16)]
        );
    }

    #[test]
    fn test_insert_at_ends() {
        let sorted = [(3, 5)];
        assert_eq!(MergeIntervals::insert(&sorted, (1, 2)), vec![(1, 2), (3, 5)]);
        assert_eq!(MergeIntervals::insert(&sorted, (6, 8)), vec![(3, 5), (6, 8)]);
        assert_eq!(MergeIntervals::insert(&[], (1, 2)), vec![(1, 2)]);
    }

    #[test]
    fn test_insert_agrees_with_merge() {
        let sorted = [(0, 2), (5, 7), (10, 12)];
        let candidates = [(3, 4), (1, 6), (-2, 20), (8, 9), (12, 13)];
        for new in candidates {
            let mut with_new: Vec<(i64, i64)> = sorted.to_vec();
            with_new.push(new);
            assert_eq!(
                MergeIntervals::insert(&sorted, new),
                MergeIntervals::merge(&with_new),
                "inserting {new:?}"
            );
        }
    }

    #[test]
    fn test_covered_length() {
        assert_eq!(MergeIntervals::covered_length(&[(1, 3), (2, 6)]), 5);
        assert_eq!(MergeIntervals::covered_length(&[(0, 1), (5, 6)]), 2);
        assert_eq!(MergeIntervals::covered_length(&[]), 0);
    }
}
