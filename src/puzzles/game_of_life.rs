//! 康威生命游戏（Rosetta Code，LeetCode 289）
//!
//! 规则：活细胞邻居少于2或多于3死亡，恰好2或3存活；
//! 死细胞恰好3个邻居复活。
//!
//! 棋盘用活细胞坐标集合表示，每代只统计活细胞周边的
//! 候选格，稀疏图案下远比逐格扫整张网格便宜，也天然
//! 支持无边界平面（滑翔机可以一直飞）。

use std::collections::{HashMap, HashSet};

/// 细胞坐标
pub type Cell = (i64, i64);

/// 生命游戏棋盘
#[derive(Clone, PartialEq, Eq)]
pub struct GameOfLife {
    live: HashSet<Cell>,
    generation: u64,
}

impl GameOfLife {
    pub fn new(cells: &[Cell]) -> Self {
        GameOfLife {
            live: cells.iter().copied().collect(),
            generation: 0,
        }
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_live(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// 推进一代
    pub fn step(&mut self) {
        let mut neighbor_counts: HashMap<Cell, u8> = HashMap::new();
        for &(x, y) in &self.live {
            for dx in -1..=1i64 {
                for dy in -1..=1i64 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    *neighbor_counts.entry((x + dx, y + dy)).or_insert(0) += 1;
                }
            }
        }
        let mut next = HashSet::new();
        for (cell, count) in neighbor_counts {
            let survives = count == 3 || (count == 2 && self.live.contains(&cell));
            if survives {
                next.insert(cell);
            }
        }
        self.live = next;
        self.generation += 1;
    }

    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// 活细胞的有序快照，断言用
    pub fn snapshot(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.live.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// 渲染一个窗口，'o'为活，y向上
    pub fn render(&self, x_range: (i64, i64), y_range: (i64, i64)) -> String {
        let mut output = String::new();
        for y in (y_range.0..=y_range.1).rev() {
            for x in x_range.0..=x_range.1 {
                output.push(if self.is_live((x, y)) { 'o' } else { '.' });
            }
            output.push('\n');
        }
        output
    }
}

/// 经典图案
pub mod patterns {
    use super::Cell;

    /// 2×2方块，静物
    pub const BLOCK: [Cell; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

    /// 横三连，周期2振荡
    pub const BLINKER: [Cell; 3] = [(-1, 0), (0, 0), (1, 0)];

    /// 滑翔机，每4代平移(1, -1)
    pub const GLIDER: [Cell; 5] = [(0, 0), (1, 0), (2, 0), (2, 1), (1, 2)];
}

/// 打印示例输入输出
pub fn demo() {
    let mut board = GameOfLife::new(&patterns::BLINKER);
    println!("blinker, generation 0:");
    print!("{}", board.render((-2, 2), (-2, 2)));
    board.step();
    println!("generation 1:");
    print!("{}", board.render((-2, 2), (-2, 2)));

    let mut glider = GameOfLife::new(&patterns::GLIDER);
    glider.run(12);
    println!("glider after 12 generations (moved 3 right, 3 down):");
    print!("{}", glider.render((0, 8), (-4, 3)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_is_still() {
        let mut board = GameOfLife::new(&patterns::BLOCK);
        let before = board.snapshot();
        board.run(10);
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.generation(), 10);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = GameOfLife::new(&patterns::BLINKER);
        board.step();
        // 横条变竖条
        assert_eq!(board.snapshot(), vec![(0, -1), (0, 0), (0, 1)]);
        board.step();
        assert_eq!(board.snapshot(), vec![(-1, 0), (0, 0), (1, 0)]);
    }

    #[test]
    fn test_glider_translates() {
        let mut board = GameOfLife::new(&patterns::GLIDER);
        board.run(4);
        let expected: Vec<Cell> = patterns::GLIDER
            .iter()
            .map(|&(x, y)| (x + 1, y - 1))
            .collect();
        let mut expected_sorted = expected;
        expected_sorted.sort_unstable();
        assert_eq!(board.snapshot(), expected_sorted);
    }

    #[test]
    fn test_underpopulation_dies_out() {
        let mut board = GameOfLife::new(&[(0, 0), (5, 5)]);
        board.step();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_birth_rule() {
        // L形三活格，下一代中间补出第四格成方块
        let mut board = GameOfLife::new(&[(0, 0), (1, 0), (0, 1)]);
        board.step();
        assert_eq!(board.snapshot(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let mut board = GameOfLife::new(&[]);
        board.step();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 1);
    }
}
