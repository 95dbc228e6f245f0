//! 演示注册表
//!
//! 汇总各分类 `demos()` 返回的条目，提供按名称、分类和
//! 正则过滤的查找入口。

use regex::Regex;

use super::demo::{Category, Demo};
use crate::common::{LabError, LabResult};
use crate::{arrays, dp, graphs, math, puzzles, review, sorting, strings, structures};

/// 收集全部已登记的演示
pub fn registry() -> Vec<Demo> {
    let mut demos = Vec::new();
    demos.extend(graphs::demos());
    demos.extend(dp::demos());
    demos.extend(strings::demos());
    demos.extend(sorting::demos());
    demos.extend(structures::demos());
    demos.extend(arrays::demos());
    demos.extend(math::demos());
    demos.extend(puzzles::demos());
    demos.extend(review::demos());
    demos
}

/// 按完整名称查找演示
pub fn find(name: &str) -> LabResult<Demo> {
    registry()
        .into_iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| LabError::UnknownDemo(name.to_string()))
}

/// 返回指定分类下的所有演示
pub fn by_category(category: Category) -> Vec<Demo> {
    registry()
        .into_iter()
        .filter(|demo| demo.category == category)
        .collect()
}

/// 用正则表达式过滤演示，名称或说明命中即保留
pub fn filter(pattern: &str) -> LabResult<Vec<Demo>> {
    let re = Regex::new(pattern)?;
    Ok(registry()
        .into_iter()
        .filter(|demo| re.is_match(demo.name) || re.is_match(demo.summary))
        .collect())
}
