//! 连通分量
//!
//! 无向图划分连通分量，顺带回答"两点是否连通"和"岛屿数量"
//! （LeetCode 200 的网格版在这里化成图版）。
//!
//! 用共享的Graph封装而不是裸HashMap，无向边自动补双向，
//! 省掉手写邻接表时漏反向边的坑。BFS逐个源点淹没即可，
//! 每个节点只进一次队，O(V+E)。

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use super::graph::Graph;

/// 连通分量练习结构体
pub struct ConnectedComponents;

impl ConnectedComponents {
    /// 划分所有连通分量，每个分量内部按发现顺序排列
    pub fn components<T: Clone + Eq + Hash>(graph: &Graph<T>) -> Vec<Vec<T>> {
        let mut visited: HashSet<T> = HashSet::new();
        let mut components: Vec<Vec<T>> = Vec::new();

        for node in graph.nodes() {
            if visited.contains(node) {
                continue;
            }
            components.push(Self::flood(graph, node, &mut visited));
        }
        components
    }

    /// 分量个数
    pub fn count<T: Clone + Eq + Hash>(graph: &Graph<T>) -> usize {
        Self::components(graph).len()
    }

    /// 两点是否在同一分量
    pub fn connected<T: Clone + Eq + Hash>(graph: &Graph<T>, a: &T, b: &T) -> bool {
        if !graph.contains(a) || !graph.contains(b) {
            return false;
        }
        if a == b {
            return true;
        }
        let mut visited: HashSet<T> = HashSet::new();
        Self::flood(graph, a, &mut visited);
        visited.contains(b)
    }

    /// 节点到分量编号的映射，编号从0起按发现顺序分配
    pub fn labels<T: Clone + Eq + Hash>(graph: &Graph<T>) -> HashMap<T, usize> {
        let mut labels: HashMap<T, usize> = HashMap::new();
        for (index, component) in Self::components(graph).into_iter().enumerate() {
            for node in component {
                labels.insert(node, index);
            }
        }
        labels
    }

    /// 从source出发BFS淹没一个分量
    fn flood<T: Clone + Eq + Hash>(
        graph: &Graph<T>,
        source: &T,
        visited: &mut HashSet<T>,
    ) -> Vec<T> {
        let mut component = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(source.clone());
        queue.push_back(source.clone());

        while let Some(node) = queue.pop_front() {
            for neighbor in graph.neighbors(&node) {
                if visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
            component.push(node);
        }
        component
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut graph: Graph<&str> = Graph::undirected();
    graph.add_edge("tokyo", "osaka");
    graph.add_edge("osaka", "kyoto");
    graph.add_edge("london", "paris");
    graph.add_node("reykjavik");

    println!("edges: tokyo-osaka osaka-kyoto london-paris, lone node reykjavik");
    let mut components = ConnectedComponents::components(&graph);
    components.sort();
    println!("components: {:?}", components);
    println!("count: {}", ConnectedComponents::count(&graph));
    println!(
        "tokyo connected to kyoto: {}",
        ConnectedComponents::connected(&graph, &"tokyo", &"kyoto")
    );
    println!(
        "tokyo connected to paris: {}",
        ConnectedComponents::connected(&graph, &"tokyo", &"paris")
    );
}
