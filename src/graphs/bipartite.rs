//! 二分图判定
//!
//! 节点能否染成两色使每条边两端异色（LeetCode 785）。
//! 等价问题：图里没有奇数长度的环。
//!
//! BFS逐层染色，遇到同色相邻即失败。图可能不连通，
//! 每个分量都要单独起一轮。用共享的Graph封装，
//! 无向边由它保证双向。

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::graph::Graph;

/// 二分图练习结构体
pub struct Bipartite;

/// 染色结果的两侧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl Bipartite {
    /// 判定是否二分图
    pub fn check<T: Clone + Eq + Hash>(graph: &Graph<T>) -> bool {
        Self::two_color(graph).is_some()
    }

    /// 给出一个合法染色，非二分图返回None
    pub fn two_color<T: Clone + Eq + Hash>(graph: &Graph<T>) -> Option<HashMap<T, Side>> {
        let mut colors: HashMap<T, Side> = HashMap::new();

        for start in graph.nodes() {
            if colors.contains_key(start) {
                continue;
            }
            colors.insert(start.clone(), Side::Left);
            let mut queue = VecDeque::new();
            queue.push_back(start.clone());

            while let Some(node) = queue.pop_front() {
                let side = colors[&node];
                for neighbor in graph.neighbors(&node) {
                    match colors.get(neighbor) {
                        Some(&existing) if existing == side => return None,
                        Some(_) => {}
                        None => {
                            colors.insert(neighbor.clone(), side.flip());
                            queue.push_back(neighbor.clone());
                        }
                    }
                }
            }
        }

        Some(colors)
    }

    /// 染色结果按两侧分组，节点顺序不保证
    pub fn partition<T: Clone + Eq + Hash>(graph: &Graph<T>) -> Option<(Vec<T>, Vec<T>)> {
        let colors = Self::two_color(graph)?;
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (node, side) in colors {
            match side {
                Side::Left => left.push(node),
                Side::Right => right.push(node),
            }
        }
        Some((left, right))
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut even_cycle: Graph<i32> = Graph::undirected();
    even_cycle.add_edge(1, 2);
    even_cycle.add_edge(2, 3);
    even_cycle.add_edge(3, 4);
    even_cycle.add_edge(4, 1);

    println!("square 1-2-3-4-1 is bipartite: {}", Bipartite::check(&even_cycle));
    if let Some((mut left, mut right)) = Bipartite::partition(&even_cycle) {
        left.sort();
        right.sort();
        println!("partition: {:?} / {:?}", left, right);
    }

    let mut odd_cycle: Graph<i32> = Graph::undirected();
    odd_cycle.add_edge(1, 2);
    odd_cycle.add_edge(2, 3);
    odd_cycle.add_edge(3, 1);
    println!("triangle 1-2-3-1 is bipartite: {}", Bipartite::check(&odd_cycle));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_cycle_is_bipartite() {
        let mut graph = Graph::undirected();
        graph.add_edge('a', 'b');
        graph.add_edge('b', 'c');
        graph.add_edge('c', 'd');
        graph.add_edge('d', 'a');
        assert!(Bipartite::check(&graph));
    }

    #[test]
    fn test_odd_cycle_is_not_bipartite() {
        let mut graph = Graph::undirected();
        graph.add_edge('a', 'b');
        graph.add_edge('b', 'c');
        graph.add_edge('c', 'a');
        assert!(!Bipartite::check(&graph));
        assert!(Bipartite::two_color(&graph).is_none());
    }

    #[test]
    fn test_coloring_separates_every_edge() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2);
        graph.add_edge(1, 4);
        graph.add_edge(3, 2);
        graph.add_edge(3, 4);

        let colors = Bipartite::two_color(&graph).expect("Graph is bipartite in test");
        for node in graph.nodes() {
            for neighbor in graph.neighbors(node) {
                assert_ne!(colors[node], colors[neighbor]);
            }
        }
    }

    #[test]
    fn test_disconnected_components_each_checked() {
        let mut graph = Graph::undirected();
        graph.add_edge(1, 2);
        // 单独一个三角形分量
        graph.add_edge(10, 11);
        graph.add_edge(11, 12);
        graph.add_edge(12, 10);
        assert!(!Bipartite::check(&graph));
    }

    #[test]
    fn test_isolated_nodes_are_bipartite() {
        let mut graph: Graph<i32> = Graph::undirected();
        graph.add_node(1);
        graph.add_node(2);
        assert!(Bipartite::check(&graph));
        let (left, right) = Bipartite::partition(&graph).expect("Trivially bipartite in test");
        assert_eq!(left.len() + right.len(), 2);
    }
}
