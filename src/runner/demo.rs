//! 演示条目定义
//!
//! 每个题目文件底部的 `demo()` 驱动函数在这里登记成一条可运行的条目，
//! 名称采用 `分类/题名` 的形式。

use serde::Serialize;
use std::fmt;

/// 题目分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Graphs,
    Dp,
    Strings,
    Sorting,
    Structures,
    Arrays,
    Math,
    Puzzles,
    Review,
}

impl Category {
    /// 全部分类，按展示顺序排列
    pub const ALL: [Category; 9] = [
        Category::Graphs,
        Category::Dp,
        Category::Strings,
        Category::Sorting,
        Category::Structures,
        Category::Arrays,
        Category::Math,
        Category::Puzzles,
        Category::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Graphs => "graphs",
            Category::Dp => "dp",
            Category::Strings => "strings",
            Category::Sorting => "sorting",
            Category::Structures => "structures",
            Category::Arrays => "arrays",
            Category::Math => "math",
            Category::Puzzles => "puzzles",
            Category::Review => "review",
        }
    }

    /// 按名称解析分类，大小写不敏感
    pub fn parse(name: &str) -> Option<Category> {
        let lowered = name.to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lowered)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 一条可运行的演示
#[derive(Clone)]
pub struct Demo {
    /// `分类/题名` 形式的唯一名称
    pub name: &'static str,
    pub category: Category,
    /// 一句话题目说明
    pub summary: &'static str,
    /// 题目文件底部的驱动函数
    pub run: fn(),
}

impl Demo {
    pub const fn new(
        name: &'static str,
        category: Category,
        summary: &'static str,
        run: fn(),
    ) -> Self {
        Self {
            name,
            category,
            summary,
            run,
        }
    }

    /// 名称中 `/` 之后的部分
    pub fn slug(&self) -> &'static str {
        match self.name.split_once('/') {
            Some((_, slug)) => slug,
            None => self.name,
        }
    }
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("summary", &self.summary)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() {}

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("graphs"), Some(Category::Graphs));
        assert_eq!(Category::parse("DP"), Some(Category::Dp));
        assert_eq!(Category::parse("Review"), Some(Category::Review));
        assert_eq!(Category::parse("nonsense"), None);
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_demo_slug() {
        let demo = Demo::new("graphs/dijkstra", Category::Graphs, "shortest path", noop);
        assert_eq!(demo.slug(), "dijkstra");

        let bare = Demo::new("dijkstra", Category::Graphs, "shortest path", noop);
        assert_eq!(bare.slug(), "dijkstra");
    }
}
