//! 最长递增子序列
//!
//! LIS（LeetCode 300）：严格递增的最长子序列长度。
//! - 二次DP：lis[i]看所有j<i且a[j]<a[i]，O(n^2)，好懂；
//! - 耐心排序：tails[k]记录长度k+1的递增序列的最小结尾，
//!   tails天然有序，二分替换，O(n log n)。注意tails本身
//!   不是一条合法子序列，只有长度可信；
//! - 回溯版在二次DP上记前驱，把序列本身挖出来。

/// 最长递增子序列练习结构体
pub struct LongestIncreasingSubsequence;

impl LongestIncreasingSubsequence {
    /// 二次DP
    pub fn length_quadratic(values: &[i64]) -> usize {
        if values.is_empty() {
            return 0;
        }
        let mut lis = vec![1usize; values.len()];
        for i in 1..values.len() {
            for j in 0..i {
                if values[j] < values[i] {
                    lis[i] = lis[i].max(lis[j] + 1);
                }
            }
        }
        lis.into_iter().max().unwrap_or(0)
    }

    /// 耐心排序 + 二分
    pub fn length_patience(values: &[i64]) -> usize {
        let mut tails: Vec<i64> = Vec::new();
        for &value in values {
            match tails.binary_search(&value) {
                // 已存在等值结尾，严格递增不能接，原地不动
                Ok(_) => {}
                Err(position) => {
                    if position == tails.len() {
                        tails.push(value);
                    } else {
                        tails[position] = value;
                    }
                }
            }
        }
        tails.len()
    }

    /// 一条LIS本身，二次DP记前驱
    pub fn subsequence(values: &[i64]) -> Vec<i64> {
        if values.is_empty() {
            return Vec::new();
        }
        let mut lis = vec![1usize; values.len()];
        let mut predecessor = vec![usize::MAX; values.len()];
        let mut best_end = 0usize;

        for i in 1..values.len() {
            for j in 0..i {
                if values[j] < values[i] && lis[j] + 1 > lis[i] {
                    lis[i] = lis[j] + 1;
                    predecessor[i] = j;
                }
            }
            if lis[i] > lis[best_end] {
                best_end = i;
            }
        }

        let mut sequence = Vec::with_capacity(lis[best_end]);
        let mut cursor = best_end;
        loop {
            sequence.push(values[cursor]);
            if predecessor[cursor] == usize::MAX {
                break;
            }
            cursor = predecessor[cursor];
        }
        sequence.reverse();
        sequence
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [10, 9, 2, 5, 3, 7, 101, 18];
    println!("input: {:?}", values);
    println!(
        "length (quadratic): {}",
        LongestIncreasingSubsequence::length_quadratic(&values)
    );
    println!(
        "length (patience):  {}",
        LongestIncreasingSubsequence::length_patience(&values)
    );
    println!(
        "one lis: {:?}",
        LongestIncreasingSubsequence::subsequence(&values)
    );
}
