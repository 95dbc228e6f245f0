//! 编辑距离
//!
//! Levenshtein距离（LeetCode 72）：把一个串改成另一个串
//! 最少需要多少次插入、删除、替换。
//!
//! 全表版能回溯出具体操作序列；滚动单行版只算距离，
//! 空间 O(min(n,m))。距离<=1的快速判定单独放在strings
//! 分类的one_away里，这里只管通用情形。

/// 编辑距离练习结构体
pub struct EditDistance;

/// 回溯出的单个编辑操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Delete(char),
    Replace(char, char),
}

impl EditDistance {
    /// 完整DP表
    pub fn distance(source: &str, target: &str) -> usize {
        let s: Vec<char> = source.chars().collect();
        let t: Vec<char> = target.chars().collect();
        Self::table(&s, &t)[s.len()][t.len()]
    }

    /// 单行滚动
    pub fn distance_one_row(source: &str, target: &str) -> usize {
        let s: Vec<char> = source.chars().collect();
        let t: Vec<char> = target.chars().collect();
        let (long, short) = if s.len() >= t.len() { (&s, &t) } else { (&t, &s) };

        let mut row: Vec<usize> = (0..=short.len()).collect();
        for (i, long_char) in long.iter().enumerate() {
            // diagonal保存左上角的旧值
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, short_char) in short.iter().enumerate() {
                let next = if long_char == short_char {
                    diagonal
                } else {
                    diagonal.min(row[j]).min(row[j + 1]) + 1
                };
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }
        row[short.len()]
    }

    /// 最少操作序列，从表回溯
    pub fn edits(source: &str, target: &str) -> Vec<Edit> {
        let s: Vec<char> = source.chars().collect();
        let t: Vec<char> = target.chars().collect();
        let table = Self::table(&s, &t);

        let mut operations = Vec::new();
        let (mut row, mut col) = (s.len(), t.len());
        while row > 0 || col > 0 {
            if row > 0 && col > 0 && s[row - 1] == t[col - 1] {
                row -= 1;
                col -= 1;
            } else if row > 0 && col > 0 && table[row][col] == table[row - 1][col - 1] + 1 {
                operations.push(Edit::Replace(s[row - 1], t[col - 1]));
                row -= 1;
                col -= 1;
            } else if row > 0 && table[row][col] == table[row - 1][col] + 1 {
                operations.push(Edit::Delete(s[row - 1]));
                row -= 1;
            } else {
                operations.push(Edit::Insert(t[col - 1]));
                col -= 1;
            }
        }
        operations.reverse();
        operations
    }

    fn table(s: &[char], t: &[char]) -> Vec<Vec<usize>> {
        let mut table = vec![vec![0usize; t.len() + 1]; s.len() + 1];
        for row in 0..=s.len() {
            table[row][0] = row;
        }
        for col in 0..=t.len() {
            table[0][col] = col;
        }
        for row in 1..=s.len() {
            for col in 1..=t.len() {
                table[row][col] = if s[row - 1] == t[col - 1] {
                    table[row - 1][col - 1]
                } else {
                    table[row - 1][col - 1]
                        .min(table[row - 1][col])
                        .min(table[row][col - 1])
                        + 1
                };
            }
        }
        table
    }
}

/// 打印示例输入输出
pub fn demo() {
    let pairs = [("horse", "ros"), ("intention", "execution"), ("same", "same")];
    for (source, target) in pairs {
        println!(
            "distance({:?}, {:?}) = {}",
            source,
            target,
            EditDistance::distance(source, target)
        );
    }
    println!("edits horse -> ros: {:?}", EditDistance::edits("horse", "ros"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(EditDistance::distance("horse", "ros"), 3);
        assert_eq!(EditDistance::distance("intention", "execution"), 5);
        assert_eq!(EditDistance::distance("", "abc"), 3);
        assert_eq!(EditDistance::distance("same", "same"), 0);
    }

    #[test]
    fn test_one_row_agrees_with_table() {
        let cases = [
            ("horse", "ros"),
            ("intention", "execution"),
            ("", ""),
            ("a", "b"),
            ("kitten", "sitting"),
        ];
        for (source, target) in cases {
            assert_eq!(
                EditDistance::distance(source, target),
                EditDistance::distance_one_row(source, target),
                "diverged on {:?}/{:?}",
                source,
                target
            );
        }
    }

    #[test]
    fn test_edit_sequence_length_matches_distance() {
        let cases = [("horse", "ros"), ("kitten", "sitting"), ("", "ab")];
        for (source, target) in cases {
            let edits = EditDistance::edits(source, target);
            assert_eq!(edits.len(), EditDistance::distance(source, target));
        }
    }

    #[test]
    fn test_single_edit_operations() {
        assert_eq!(EditDistance::edits("abc", "abc"), vec![]);
        assert_eq!(EditDistance::edits("a", "b"), vec![Edit::Replace('a', 'b')]);
        assert_eq!(EditDistance::edits("ab", "a"), vec![Edit::Delete('b')]);
        assert_eq!(EditDistance::edits("a", "ab"), vec![Edit::Insert('b')]);
    }

    #[test]
    fn test_symmetry() {
        let cases = [("horse", "ros"), ("a", ""), ("ab", "ba")];
        for (first, second) in cases {
            assert_eq!(
                EditDistance::distance(first, second),
                EditDistance::distance(second, first)
            );
        }
    }
}
