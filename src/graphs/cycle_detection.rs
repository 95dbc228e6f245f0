//! 环检测
//!
//! 有向图和无向图的判环逻辑并不一样，放在一个文件里对比：
//! - 有向图：三色DFS，访问中（灰色）的节点被重入即有环；
//! - 无向图DFS版：沿树边回到非父节点即有环，父节点要跳过
//!   （无向边本身就是来回两条）；
//! - 无向图并查集版：一条边的两端已同属一个集合即有环，
//!   适合输入是边列表的场合。
//!
//! 有向版还能把环本身找出来，打印依赖冲突时有用。

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// 环检测练习结构体
pub struct CycleDetection;

/// 三色DFS的节点状态
#[derive(Clone, Copy, PartialEq)]
enum Color {
    Gray,
    Black,
}

impl CycleDetection {
    /// 有向图判环：三色DFS
    pub fn directed_has_cycle<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>) -> bool {
        Self::find_directed_cycle(graph).is_some()
    }

    /// 有向图找环：返回环上节点（首尾相接，如 a b c a）
    pub fn find_directed_cycle<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>) -> Option<Vec<T>> {
        let mut colors: HashMap<T, Color> = HashMap::new();
        let mut trail: Vec<T> = Vec::new();

        for node in graph.keys() {
            if !colors.contains_key(node) {
                if let Some(cycle) = Self::probe(graph, node, &mut colors, &mut trail) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn probe<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        node: &T,
        colors: &mut HashMap<T, Color>,
        trail: &mut Vec<T>,
    ) -> Option<Vec<T>> {
        colors.insert(node.clone(), Color::Gray);
        trail.push(node.clone());

        if let Some(neighbors) = graph.get(node) {
            for neighbor in neighbors {
                match colors.get(neighbor) {
                    Some(Color::Gray) => {
                        // 环从trail里neighbor首次出现处开始
                        let start = trail.iter().position(|n| n == neighbor)?;
                        let mut cycle: Vec<T> = trail[start..].to_vec();
                        cycle.push(neighbor.clone());
                        return Some(cycle);
                    }
                    Some(Color::Black) => {}
                    None => {
                        if let Some(cycle) = Self::probe(graph, neighbor, colors, trail) {
                            return Some(cycle);
                        }
                    }
                }
            }
        }

        trail.pop();
        colors.insert(node.clone(), Color::Black);
        None
    }

    /// 无向图判环：DFS跳过父节点
    pub fn undirected_has_cycle<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>) -> bool {
        let mut visited: HashSet<T> = HashSet::new();
        for node in graph.keys() {
            if !visited.contains(node)
                && Self::undirected_probe(graph, node, None, &mut visited)
            {
                return true;
            }
        }
        false
    }

    fn undirected_probe<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        node: &T,
        parent: Option<&T>,
        visited: &mut HashSet<T>,
    ) -> bool {
        visited.insert(node.clone());
        if let Some(neighbors) = graph.get(node) {
            for neighbor in neighbors {
                if Some(neighbor) == parent {
                    continue;
                }
                if visited.contains(neighbor) {
                    return true;
                }
                if Self::undirected_probe(graph, neighbor, Some(node), visited) {
                    return true;
                }
            }
        }
        false
    }

    /// 无向边列表判环：并查集
    ///
    /// 每条无向边只出现一次（a,b 和 b,a 算重复）。
    pub fn edge_list_has_cycle<T: Clone + Eq + Hash>(edges: &[(T, T)]) -> bool {
        let mut parents: HashMap<T, T> = HashMap::new();
        for (a, b) in edges {
            let root_a = Self::find_root(&mut parents, a);
            let root_b = Self::find_root(&mut parents, b);
            if root_a == root_b {
                return true;
            }
            parents.insert(root_a, root_b);
        }
        false
    }

    fn find_root<T: Clone + Eq + Hash>(parents: &mut HashMap<T, T>, node: &T) -> T {
        let parent = match parents.get(node) {
            Some(parent) => parent.clone(),
            None => return node.clone(),
        };
        if parent == *node {
            return parent;
        }
        let root = Self::find_root(parents, &parent);
        // 路径压缩
        parents.insert(node.clone(), root.clone());
        root
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut directed: HashMap<&str, Vec<&str>> = HashMap::new();
    directed.insert("build", vec!["test"]);
    directed.insert("test", vec!["package"]);
    directed.insert("package", vec!["build"]);

    println!("directed: build -> test -> package -> build");
    println!(
        "cycle found: {:?}",
        CycleDetection::find_directed_cycle(&directed)
    );

    let mut undirected: HashMap<char, Vec<char>> = HashMap::new();
    undirected.insert('a', vec!['b']);
    undirected.insert('b', vec!['a', 'c']);
    undirected.insert('c', vec!['b']);
    println!("undirected chain a-b-c has cycle: {}",
        CycleDetection::undirected_has_cycle(&undirected));

    let edges = [('a', 'b'), ('b', 'c'), ('c', 'a')];
    println!(
        "edge list {:?} has cycle: {}",
        edges,
        CycleDetection::edge_list_has_cycle(&edges)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_dag_has_no_cycle() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b", "c"]);
        graph.insert("b", vec!["c"]);
        graph.insert("c", vec![]);
        assert!(!CycleDetection::directed_has_cycle(&graph));
    }

    #[test]
    fn test_directed_cycle_reported_in_order() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b"]);
        graph.insert("b", vec!["c"]);
        graph.insert("c", vec!["a"]);

        let cycle = CycleDetection::find_directed_cycle(&graph).expect("Cycle exists in test");
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.first(), cycle.last());
        // 相邻节点间必须真有边
        for pair in cycle.windows(2) {
            assert!(graph[pair[0]].contains(&pair[1]));
        }
    }

    #[test]
    fn test_directed_back_and_forth_is_cycle() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b"]);
        graph.insert("b", vec!["a"]);
        assert!(CycleDetection::directed_has_cycle(&graph));
    }

    #[test]
    fn test_undirected_tree_has_no_cycle() {
        let mut graph: HashMap<char, Vec<char>> = HashMap::new();
        graph.insert('a', vec!['b', 'c']);
        graph.insert('b', vec!['a']);
        graph.insert('c', vec!['a', 'd']);
        graph.insert('d', vec!['c']);
        assert!(!CycleDetection::undirected_has_cycle(&graph));
    }

    #[test]
    fn test_undirected_triangle_has_cycle() {
        let mut graph: HashMap<char, Vec<char>> = HashMap::new();
        graph.insert('a', vec!['b', 'c']);
        graph.insert('b', vec!['a', 'c']);
        graph.insert('c', vec!['a', 'b']);
        assert!(CycleDetection::undirected_has_cycle(&graph));
    }

    #[test]
    fn test_edge_list_union_find() {
        assert!(!CycleDetection::edge_list_has_cycle(&[
            ('a', 'b'),
            ('b', 'c'),
            ('c', 'd'),
        ]));
        assert!(CycleDetection::edge_list_has_cycle(&[
            ('a', 'b'),
            ('b', 'c'),
            ('c', 'a'),
        ]));
    }

    #[test]
    fn test_disconnected_components_checked_separately() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b"]);
        graph.insert("b", vec![]);
        graph.insert("x", vec!["y"]);
        graph.insert("y", vec!["x"]);
        assert!(CycleDetection::directed_has_cycle(&graph));
    }
}
