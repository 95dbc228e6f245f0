//! 二刷题目
//!
//! 隔一段时间不看第一版重写的练习副本，和首版并存用来
//! 对照写法的变化。只收录确实重写过的题。

pub mod binary_search;
pub mod fibonacci;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "review/binary-search",
            Category::Review,
            "Second-pass binary search with std-style Result return",
            binary_search::demo,
        ),
        Demo::new(
            "review/fibonacci",
            Category::Review,
            "Second-pass Fibonacci, overflow-checked and iterator flavors",
            fibonacci::demo,
        ),
    ]
}
