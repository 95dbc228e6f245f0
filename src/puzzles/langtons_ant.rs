//! 兰顿蚂蚁（Rosetta Code）
//!
//! 无限白格平面上一只蚂蚁：踩到白格右转、踩到黑格左转，
//! 翻转脚下格子颜色后前进一步。规则只有两条，轨迹却先
//! 混沌一万来步，然后突然开始铺一条周期104步的"高速公路"，
//! 是元胞自动机里著名的涌现例子。
//!
//! 棋盘用`HashSet<(i64, i64)>`只存黑格，天然无限大。
//! 驱动程序跑2000步后把包含轨迹的窗口渲染出来。

use std::collections::HashSet;

/// 蚂蚁朝向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn turned_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    fn turned_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// 兰顿蚂蚁模拟器
pub struct LangtonsAnt {
    black_cells: HashSet<(i64, i64)>,
    position: (i64, i64),
    facing: Direction,
    steps_taken: u64,
}

impl Default for LangtonsAnt {
    fn default() -> Self {
        Self::new()
    }
}

impl LangtonsAnt {
    /// 全白棋盘，蚂蚁在原点朝北
    pub fn new() -> Self {
        LangtonsAnt {
            black_cells: HashSet::new(),
            position: (0, 0),
            facing: Direction::North,
            steps_taken: 0,
        }
    }

    pub fn position(&self) -> (i64, i64) {
        self.position
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn black_count(&self) -> usize {
        self.black_cells.len()
    }

    pub fn is_black(&self, cell: (i64, i64)) -> bool {
        self.black_cells.contains(&cell)
    }

    /// 走一步：翻色、转向、前进
    pub fn step(&mut self) {
        if self.black_cells.remove(&self.position) {
            self.facing = self.facing.turned_left();
        } else {
            self.black_cells.insert(self.position);
            self.facing = self.facing.turned_right();
        }
        let (dx, dy) = self.facing.offset();
        self.position = (self.position.0 + dx, self.position.1 + dy);
        self.steps_taken += 1;
    }

    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// 渲染一个窗口，'#'黑'.'白'A'蚂蚁，y向上
    pub fn render(&self, x_range: (i64, i64), y_range: (i64, i64)) -> String {
        let mut output = String::new();
        for y in (y_range.0..=y_range.1).rev() {
            for x in x_range.0..=x_range.1 {
                if (x, y) == self.position {
                    output.push('A');
                } else if self.is_black((x, y)) {
                    output.push('#');
                } else {
                    output.push('.');
                }
            }
            output.push('\n');
        }
        output
    }

    /// 包住所有黑格的最小窗口，空盘时None
    pub fn bounding_box(&self) -> Option<((i64, i64), (i64, i64))> {
        let first = self.black_cells.iter().next()?;
        let mut x_range = (first.0, first.0);
        let mut y_range = (first.1, first.1);
        for &(x, y) in &self.black_cells {
            x_range = (x_range.0.min(x), x_range.1.max(x));
            y_range = (y_range.0.min(y), y_range.1.max(y));
        }
        Some((x_range, y_range))
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut ant = LangtonsAnt::new();
    ant.run(2000);
    println!(
        "after 2000 steps: {} black cells, ant at {:?}",
        ant.black_count(),
        ant.position()
    );
    if let Some((x_range, y_range)) = ant.bounding_box() {
        println!("{}", ant.render(x_range, y_range));
    }
}
