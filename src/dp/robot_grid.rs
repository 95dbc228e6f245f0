//! 网格机器人
//!
//! CCI 8.2：机器人从r*c网格左上角出发，只能向右或向下，
//! 部分格子是障碍，找一条到右下角的路径。
//! 附带无障碍时的路径计数（LeetCode 62）。
//!
//! 计数有两种写法：填表DP和组合数 C(r+c-2, r-1)；
//! 找路径用自底向上的可达表，再从终点回溯。
//! true表示格子可走。

/// 网格机器人练习结构体
pub struct RobotGrid;

/// 一步移动，路径由它们串起来
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Right,
    Down,
}

impl RobotGrid {
    /// 无障碍网格的路径数，填表DP
    pub fn count_paths(rows: usize, cols: usize) -> u64 {
        if rows == 0 || cols == 0 {
            return 0;
        }
        let mut table = vec![vec![0u64; cols]; rows];
        for row in 0..rows {
            for col in 0..cols {
                if row == 0 || col == 0 {
                    table[row][col] = 1;
                } else {
                    table[row][col] = table[row - 1][col] + table[row][col - 1];
                }
            }
        }
        table[rows - 1][cols - 1]
    }

    /// 组合数版：总共走 r+c-2 步，选哪几步向下
    pub fn count_paths_combinatorial(rows: usize, cols: usize) -> u64 {
        if rows == 0 || cols == 0 {
            return 0;
        }
        let total = (rows + cols - 2) as u64;
        let pick = (rows - 1).min(cols - 1) as u64;
        // 逐项乘除避免阶乘溢出
        let mut result = 1u64;
        for i in 1..=pick {
            result = result * (total - pick + i) / i;
        }
        result
    }

    /// 带障碍找一条路径，返回移动序列；不可达返回None
    ///
    /// grid[row][col]为false表示障碍。要求终点格本身可走。
    pub fn find_path(grid: &[Vec<bool>]) -> Option<Vec<Move>> {
        let rows = grid.len();
        let cols = grid.first()?.len();
        if !grid[0][0] || !grid[rows - 1][cols - 1] {
            return None;
        }

        // reachable[r][c]：从(0,0)能否走到(r,c)
        let mut reachable = vec![vec![false; cols]; rows];
        reachable[0][0] = true;
        for row in 0..rows {
            for col in 0..cols {
                if !grid[row][col] || (row == 0 && col == 0) {
                    continue;
                }
                let from_above = row > 0 && reachable[row - 1][col];
                let from_left = col > 0 && reachable[row][col - 1];
                reachable[row][col] = from_above || from_left;
            }
        }
        if !reachable[rows - 1][cols - 1] {
            return None;
        }

        // 从终点回溯，优先归因于上方
        let mut moves = Vec::with_capacity(rows + cols - 2);
        let (mut row, mut col) = (rows - 1, cols - 1);
        while row > 0 || col > 0 {
            if row > 0 && reachable[row - 1][col] {
                moves.push(Move::Down);
                row -= 1;
            } else {
                moves.push(Move::Right);
                col -= 1;
            }
        }
        moves.reverse();
        Some(moves)
    }

    /// 带障碍的路径计数（LeetCode 63）
    pub fn count_paths_with_obstacles(grid: &[Vec<bool>]) -> u64 {
        let rows = grid.len();
        let Some(first) = grid.first() else {
            return 0;
        };
        let cols = first.len();
        if cols == 0 || !grid[0][0] {
            return 0;
        }

        let mut table = vec![vec![0u64; cols]; rows];
        table[0][0] = 1;
        for row in 0..rows {
            for col in 0..cols {
                if !grid[row][col] {
                    table[row][col] = 0;
                    continue;
                }
                if row > 0 {
                    table[row][col] += table[row - 1][col];
                }
                if col > 0 {
                    table[row][col] += table[row][col - 1];
                }
            }
        }
        table[rows - 1][cols - 1]
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("3x7 open grid paths: {}", RobotGrid::count_paths(3, 7));
    println!(
        "3x7 combinatorial:   {}",
        RobotGrid::count_paths_combinatorial(3, 7)
    );

    let grid = vec![
        vec![true, true, false],
        vec![true, true, true],
        vec![false, true, true],
    ];
    println!("grid (o open, x blocked):");
    for row in &grid {
        let line: String = row.iter().map(|&open| if open { 'o' } else { 'x' }).collect();
        println!("  {}", line);
    }
    println!("one path: {:?}", RobotGrid::find_path(&grid));
    println!(
        "path count: {}",
        RobotGrid::count_paths_with_obstacles(&grid)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_counts() {
        assert_eq!(RobotGrid::count_paths(1, 1), 1);
        assert_eq!(RobotGrid::count_paths(2, 2), 2);
        assert_eq!(RobotGrid::count_paths(3, 7), 28);
        assert_eq!(RobotGrid::count_paths(0, 5), 0);
    }

    #[test]
    fn test_dp_and_combinatorial_agree() {
        for rows in 1..=8 {
            for cols in 1..=8 {
                assert_eq!(
                    RobotGrid::count_paths(rows, cols),
                    RobotGrid::count_paths_combinatorial(rows, cols),
                    "diverged at {}x{}",
                    rows,
                    cols
                );
            }
        }
    }

    fn walk(grid: &[Vec<bool>], moves: &[Move]) -> (usize, usize) {
        let mut position = (0usize, 0usize);
        assert!(grid[0][0], "start must be open");
        for step in moves {
            match step {
                Move::Down => position.0 += 1,
                Move::Right => position.1 += 1,
            }
            assert!(grid[position.0][position.1], "path crossed an obstacle");
        }
        position
    }

    #[test]
    fn test_path_avoids_obstacles() {
        let grid = vec![
            vec![true, true, false],
            vec![true, true, true],
            vec![false, true, true],
        ];
        let moves = RobotGrid::find_path(&grid).expect("Path exists in test");
        assert_eq!(walk(&grid, &moves), (2, 2));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn test_blocked_grid_has_no_path() {
        let grid = vec![
            vec![true, false],
            vec![false, true],
        ];
        assert_eq!(RobotGrid::find_path(&grid), None);
        assert_eq!(RobotGrid::count_paths_with_obstacles(&grid), 0);
    }

    #[test]
    fn test_obstacle_count_matches_open_count_when_clear() {
        let open = vec![vec![true; 5]; 4];
        assert_eq!(
            RobotGrid::count_paths_with_obstacles(&open),
            RobotGrid::count_paths(4, 5)
        );
    }

    #[test]
    fn test_blocked_start_or_end() {
        let mut grid = vec![vec![true; 3]; 3];
        grid[0][0] = false;
        assert_eq!(RobotGrid::find_path(&grid), None);

        let mut grid = vec![vec![true; 3]; 3];
        grid[2][2] = false;
        assert_eq!(RobotGrid::find_path(&grid), None);
    }
}
