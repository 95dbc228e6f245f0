//! 动态规划与递归题目
//!
//! 从斐波那契到背包的一条学习路线。每个文件都放若干种
//! 写法对比：朴素递归、记忆化、自底向上、空间压缩。

pub mod coin_change;
pub mod edit_distance;
pub mod fibonacci;
pub mod house_robber;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod longest_increasing_subsequence;
pub mod magic_index;
pub mod max_subarray;
pub mod robot_grid;
pub mod triple_step;
pub mod word_break;

pub use coin_change::CoinChange;
pub use edit_distance::EditDistance;
pub use fibonacci::Fibonacci;
pub use house_robber::HouseRobber;
pub use knapsack::{Item, Knapsack};
pub use longest_common_subsequence::LongestCommonSubsequence;
pub use longest_increasing_subsequence::LongestIncreasingSubsequence;
pub use magic_index::MagicIndex;
pub use max_subarray::MaxSubarray;
pub use robot_grid::RobotGrid;
pub use triple_step::TripleStep;
pub use word_break::WordBreak;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "dp/fibonacci",
            Category::Dp,
            "Four Fibonacci strategies from naive to doubling",
            fibonacci::demo,
        ),
        Demo::new(
            "dp/triple-step",
            Category::Dp,
            "Staircase hop counting with custom step sets",
            triple_step::demo,
        ),
        Demo::new(
            "dp/magic-index",
            Category::Dp,
            "Find a[i] == i in a sorted array, duplicates included",
            magic_index::demo,
        ),
        Demo::new(
            "dp/robot-grid",
            Category::Dp,
            "Grid path finding and counting around obstacles",
            robot_grid::demo,
        ),
        Demo::new(
            "dp/coin-change",
            Category::Dp,
            "Fewest coins and combination counting",
            coin_change::demo,
        ),
        Demo::new(
            "dp/longest-common-subsequence",
            Category::Dp,
            "LCS length, rolling rows and reconstruction",
            longest_common_subsequence::demo,
        ),
        Demo::new(
            "dp/edit-distance",
            Category::Dp,
            "Levenshtein distance with edit script recovery",
            edit_distance::demo,
        ),
        Demo::new(
            "dp/knapsack",
            Category::Dp,
            "0/1 and unbounded knapsack with item recovery",
            knapsack::demo,
        ),
        Demo::new(
            "dp/max-subarray",
            Category::Dp,
            "Kadane versus divide and conquer",
            max_subarray::demo,
        ),
        Demo::new(
            "dp/longest-increasing-subsequence",
            Category::Dp,
            "LIS by quadratic DP and patience sorting",
            longest_increasing_subsequence::demo,
        ),
        Demo::new(
            "dp/house-robber",
            Category::Dp,
            "Non-adjacent takings on a line and on a ring",
            house_robber::demo,
        ),
        Demo::new(
            "dp/word-break",
            Category::Dp,
            "Dictionary segmentation, decision and enumeration",
            word_break::demo,
        ),
    ]
}
