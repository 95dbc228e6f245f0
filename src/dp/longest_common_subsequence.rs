//! 最长公共子序列
//!
//! LCS（LeetCode 1143）：两个序列删去若干元素后能得到的
//! 最长相同序列。diff工具的核心。
//!
//! - 全表版 O(n*m) 时间空间，还能回溯出子序列本身；
//! - 双行滚动版只要长度时把空间压到 O(min(n,m))。
//!
//! 按字符处理，输入先collect成Vec<char>，多字节文本也对。

/// 最长公共子序列练习结构体
pub struct LongestCommonSubsequence;

impl LongestCommonSubsequence {
    /// LCS长度，全表
    pub fn length(first: &str, second: &str) -> usize {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        Self::table(&a, &b)[a.len()][b.len()]
    }

    /// LCS长度，双行滚动
    pub fn length_two_rows(first: &str, second: &str) -> usize {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        // 让短的做列
        let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

        let mut previous = vec![0usize; short.len() + 1];
        let mut current = vec![0usize; short.len() + 1];
        for row_char in long.iter() {
            for (col, col_char) in short.iter().enumerate() {
                current[col + 1] = if row_char == col_char {
                    previous[col] + 1
                } else {
                    previous[col + 1].max(current[col])
                };
            }
            std::mem::swap(&mut previous, &mut current);
        }
        previous[short.len()]
    }

    /// 子序列本身，从表的右下角回溯
    pub fn subsequence(first: &str, second: &str) -> String {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        let table = Self::table(&a, &b);

        let mut result: Vec<char> = Vec::new();
        let (mut row, mut col) = (a.len(), b.len());
        while row > 0 && col > 0 {
            if a[row - 1] == b[col - 1] {
                result.push(a[row - 1]);
                row -= 1;
                col -= 1;
            } else if table[row - 1][col] >= table[row][col - 1] {
                row -= 1;
            } else {
                col -= 1;
            }
        }
        result.reverse();
        result.into_iter().collect()
    }

    fn table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for row in 1..=a.len() {
            for col in 1..=b.len() {
                table[row][col] = if a[row - 1] == b[col - 1] {
                    table[row - 1][col - 1] + 1
                } else {
                    table[row - 1][col].max(table[row][col - 1])
                };
            }
        }
        table
    }
}

/// 打印示例输入输出
pub fn demo() {
    let pairs = [("abcde", "ace"), ("banana", "atana"), ("abc", "xyz")];
    for (first, second) in pairs {
        println!(
            "lcs({:?}, {:?}) = {} ({:?})",
            first,
            second,
            LongestCommonSubsequence::length(first, second),
            LongestCommonSubsequence::subsequence(first, second)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lengths() {
        assert_eq!(LongestCommonSubsequence::length("abcde", "ace"), 3);
        assert_eq!(LongestCommonSubsequence::length("abc", "abc"), 3);
        assert_eq!(LongestCommonSubsequence::length("abc", "xyz"), 0);
    }

    #[test]
    fn test_two_rows_agrees_with_table() {
        let cases = [
            ("abcde", "ace"),
            ("banana", "atana"),
            ("", "abc"),
            ("same", "same"),
            ("longerfirst", "lf"),
        ];
        for (first, second) in cases {
            assert_eq!(
                LongestCommonSubsequence::length(first, second),
                LongestCommonSubsequence::length_two_rows(first, second),
                "diverged on {:?}/{:?}",
                first,
                second
            );
        }
    }

    fn is_subsequence_of(needle: &str, haystack: &str) -> bool {
        let mut chars = haystack.chars();
        needle.chars().all(|c| chars.by_ref().any(|h| h == c))
    }

    #[test]
    fn test_reconstructed_subsequence_is_common() {
        let first = "XMJYAUZ";
        let second = "MZJAWXU";
        let lcs = LongestCommonSubsequence::subsequence(first, second);
        assert_eq!(lcs.chars().count(), 4);
        assert!(is_subsequence_of(&lcs, first));
        assert!(is_subsequence_of(&lcs, second));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(LongestCommonSubsequence::length("", ""), 0);
        assert_eq!(LongestCommonSubsequence::subsequence("", "abc"), "");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(LongestCommonSubsequence::length("算法笔记", "刷算法题记"), 3);
    }
}
