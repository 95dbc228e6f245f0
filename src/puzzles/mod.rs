//! 模拟与回溯题目
//!
//! Rosetta Code风味的小世界：元胞自动机、棋盘搜索、
//! 组合枚举。这些题的共同点是状态空间小而结构有趣，
//! 驱动程序打印出来的东西也最好看。

pub mod game_of_life;
pub mod generate_parens;
pub mod hundred_doors;
pub mod josephus;
pub mod langtons_ant;
pub mod n_queens;
pub mod permutations;
pub mod power_set;
pub mod towers_of_hanoi;

pub use game_of_life::GameOfLife;
pub use generate_parens::GenerateParens;
pub use hundred_doors::HundredDoors;
pub use josephus::Josephus;
pub use langtons_ant::LangtonsAnt;
pub use n_queens::NQueens;
pub use permutations::Permutations;
pub use power_set::PowerSet;
pub use towers_of_hanoi::{Move, TowersOfHanoi};

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "puzzles/langtons-ant",
            Category::Puzzles,
            "Two-rule cellular ant, grid printed after 2000 steps",
            langtons_ant::demo,
        ),
        Demo::new(
            "puzzles/game-of-life",
            Category::Puzzles,
            "Conway's life on a sparse unbounded board",
            game_of_life::demo,
        ),
        Demo::new(
            "puzzles/n-queens",
            Category::Puzzles,
            "Backtracking and bitmask queen placement",
            n_queens::demo,
        ),
        Demo::new(
            "puzzles/towers-of-hanoi",
            Category::Puzzles,
            "Recursive move plan checked by stack simulation",
            towers_of_hanoi::demo,
        ),
        Demo::new(
            "puzzles/permutations",
            Category::Puzzles,
            "Insertion builder, Heap's algorithm, duplicate handling",
            permutations::demo,
        ),
        Demo::new(
            "puzzles/power-set",
            Category::Puzzles,
            "All subsets by recursion and bitmask",
            power_set::demo,
        ),
        Demo::new(
            "puzzles/generate-parens",
            Category::Puzzles,
            "Balanced parentheses, Catalan-counted backtracking",
            generate_parens::demo,
        ),
        Demo::new(
            "puzzles/josephus",
            Category::Puzzles,
            "Elimination circle by queue simulation and recurrence",
            josephus::demo,
        ),
        Demo::new(
            "puzzles/hundred-doors",
            Category::Puzzles,
            "Door toggling versus the perfect-square shortcut",
            hundred_doors::demo,
        ),
    ]
}
