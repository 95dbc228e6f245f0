//! 共享的邻接表图辅助结构
//!
//! 绝大多数图题直接用 `HashMap<T, Vec<T>>` 保持文件自包含，只有
//! `connected_components` 和 `bipartite` 两道题复用这里的辅助结构。

use std::collections::HashMap;
use std::hash::Hash;

/// 邻接表表示的图，支持有向和无向两种模式
#[derive(Debug, Clone)]
pub struct Graph<T> {
    adjacency: HashMap<T, Vec<T>>,
    directed: bool,
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// 创建有向图
    pub fn directed() -> Self {
        Self {
            adjacency: HashMap::new(),
            directed: true,
        }
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self {
            adjacency: HashMap::new(),
            directed: false,
        }
    }

    /// 添加孤立节点，已存在时不做任何事
    pub fn add_node(&mut self, node: T) {
        self.adjacency.entry(node).or_default();
    }

    /// 添加一条边，无向图会同时插入反向边
    pub fn add_edge(&mut self, from: T, to: T) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(to.clone());
        if self.directed {
            self.adjacency.entry(to).or_default();
        } else {
            self.adjacency.entry(to).or_default().push(from);
        }
    }

    /// 节点的邻居迭代器，未知节点返回空迭代
    pub fn neighbors<'a>(&'a self, node: &T) -> impl Iterator<Item = &'a T> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// 所有节点的迭代器
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    pub fn contains(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 暴露底层邻接表，便于和裸 `HashMap` 风格的题解互通
    pub fn adjacency(&self) -> &HashMap<T, Vec<T>> {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_edges() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);

        let neighbors: Vec<&i32> = graph.neighbors(&1).collect();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(graph.neighbors(&2).count(), 0);
        assert!(graph.contains(&3));
    }

    #[test]
    fn test_undirected_edges() {
        let mut graph = Graph::undirected();
        graph.add_edge('a', 'b');

        assert_eq!(graph.neighbors(&'a').count(), 1);
        assert_eq!(graph.neighbors(&'b').count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph: Graph<i32> = Graph::directed();
        graph.add_node(1);
        graph.add_edge(1, 2);
        graph.add_node(1);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.neighbors(&1).count(), 1);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph: Graph<i32> = Graph::undirected();
        assert_eq!(graph.neighbors(&42).count(), 0);
        assert!(!graph.contains(&42));
    }
}
