//! N皇后（CCI 8.12，LeetCode 51/52）
//!
//! 在N×N棋盘放N个皇后，互不攻击。解表示成长度N的数组，
//! 第r个元素是第r行皇后所在的列，行冲突因此天然不存在，
//! 只需检查列和两条对角线。
//!
//! - 逐格回溯版：每放一行，对前面所有行做冲突检查；
//! - 位掩码版：列、主对角、副对角各用一个u32的位集，
//!   放下一行时整体左右移一位，快一个数量级，
//!   思路与回溯版完全相同只是冲突检查O(1)。

/// N皇后求解
pub struct NQueens;

impl NQueens {
    /// 回溯收集全部解
    pub fn solve(n: usize) -> Vec<Vec<usize>> {
        let mut solutions = Vec::new();
        let mut columns = Vec::with_capacity(n);
        Self::place_row(n, &mut columns, &mut solutions);
        solutions
    }

    fn place_row(n: usize, columns: &mut Vec<usize>, solutions: &mut Vec<Vec<usize>>) {
        if columns.len() == n {
            solutions.push(columns.clone());
            return;
        }
        for candidate in 0..n {
            if Self::is_safe(columns, candidate) {
                columns.push(candidate);
                Self::place_row(n, columns, solutions);
                columns.pop();
            }
        }
    }

    fn is_safe(columns: &[usize], candidate: usize) -> bool {
        let row = columns.len();
        for (placed_row, &placed_col) in columns.iter().enumerate() {
            if placed_col == candidate {
                return false;
            }
            if row - placed_row == placed_col.abs_diff(candidate) {
                return false;
            }
        }
        true
    }

    /// 位掩码版只数解的个数，n ≤ 32
    pub fn count(n: usize) -> u64 {
        if n > 32 {
            return 0;
        }
        let full = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        Self::count_masked(full, 0, 0, 0)
    }

    fn count_masked(full: u32, columns: u32, left_diags: u32, right_diags: u32) -> u64 {
        if columns == full {
            return 1;
        }
        let mut open = full & !(columns | left_diags | right_diags);
        let mut total = 0;
        while open != 0 {
            let slot = open & open.wrapping_neg();
            open -= slot;
            total += Self::count_masked(
                full,
                columns | slot,
                (left_diags | slot) << 1,
                (right_diags | slot) >> 1,
            );
        }
        total
    }

    /// 一个解渲染成棋盘
    pub fn render(solution: &[usize]) -> String {
        let n = solution.len();
        let mut board = String::new();
        for &col in solution {
            for c in 0..n {
                board.push(if c == col { 'Q' } else { '.' });
            }
            board.push('\n');
        }
        board
    }
}

/// 打印示例输入输出
pub fn demo() {
    let solutions = NQueens::solve(6);
    println!("6-queens has {} solutions, first:", solutions.len());
    if let Some(first) = solutions.first() {
        print!("{}", NQueens::render(first));
    }
    for n in 1..=8 {
        println!("n = {}: {} solutions", n, NQueens::count(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution_counts() {
        let expected = [1u64, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &count) in expected.iter().enumerate() {
            assert_eq!(NQueens::solve(n).len() as u64, count, "solve n = {n}");
            assert_eq!(NQueens::count(n), count, "count n = {n}");
        }
    }

    #[test]
    fn test_solutions_are_valid() {
        for solution in NQueens::solve(6) {
            assert_eq!(solution.len(), 6);
            for r1 in 0..6 {
                for r2 in (r1 + 1)..6 {
                    assert_ne!(solution[r1], solution[r2], "column clash");
                    assert_ne!(
                        r2 - r1,
                        solution[r1].abs_diff(solution[r2]),
                        "diagonal clash"
                    );
                }
            }
        }
    }

    #[test]
    fn test_four_queens_exact_solutions() {
        let mut solutions = NQueens::solve(4);
        solutions.sort();
        assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_render() {
        let board = NQueens::render(&[1, 3, 0, 2]);
        assert_eq!(board, ".Q..\n...Q\nQ...\n..Q.\n");
    }

    #[test]
    fn test_larger_count() {
        assert_eq!(NQueens::count(10), 724);
    }
}
