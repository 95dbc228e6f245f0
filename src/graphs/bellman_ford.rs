//! Bellman-Ford最短路径
//!
//! 允许负权边的单源最短路径。Dijkstra遇到负权会给出错误答案，
//! Bellman-Ford用 V-1 轮全边松弛换来正确性，复杂度 O(V*E)。
//! 第V轮仍能松弛就说明存在可达的负环，此时最短路径无定义。
//!
//! 两个实现对比：
//! - 教科书版固定跑满 V-1 轮；
//! - 早停版某一轮没有任何更新就提前结束，随机图上通常快得多。

use std::collections::HashMap;
use std::hash::Hash;

/// Bellman-Ford练习结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 教科书版：V-1轮松弛，第V轮检负环
    ///
    /// 检出可达负环时返回None。
    pub fn distances<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, i64)>>,
        start: &T,
    ) -> Option<HashMap<T, i64>> {
        let mut distances: HashMap<T, i64> = HashMap::new();
        distances.insert(start.clone(), 0);

        let node_count = Self::node_count(graph);
        for _ in 1..node_count {
            Self::relax_all(graph, &mut distances);
        }

        // 再能松弛就有负环
        if Self::relax_all(graph, &mut distances) {
            return None;
        }
        Some(distances)
    }

    /// 早停版：一轮无更新即收敛
    pub fn distances_early_exit<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, i64)>>,
        start: &T,
    ) -> Option<HashMap<T, i64>> {
        let mut distances: HashMap<T, i64> = HashMap::new();
        distances.insert(start.clone(), 0);

        let node_count = Self::node_count(graph);
        for round in 0..node_count {
            if !Self::relax_all(graph, &mut distances) {
                return Some(distances);
            }
            // 跑满V轮还在更新，必有负环
            if round + 1 == node_count {
                return None;
            }
        }
        Some(distances)
    }

    /// 从start出发是否能遇到负环
    pub fn has_negative_cycle<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, i64)>>,
        start: &T,
    ) -> bool {
        Self::distances(graph, start).is_none()
    }

    /// 一轮全边松弛，返回是否有任何更新
    fn relax_all<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, i64)>>,
        distances: &mut HashMap<T, i64>,
    ) -> bool {
        let mut updated = false;
        for (node, neighbors) in graph {
            let Some(&base) = distances.get(node) else {
                continue;
            };
            for (neighbor, weight) in neighbors {
                let candidate = base + weight;
                let known = distances.get(neighbor).copied().unwrap_or(i64::MAX);
                if candidate < known {
                    distances.insert(neighbor.clone(), candidate);
                    updated = true;
                }
            }
        }
        updated
    }

    fn node_count<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<(T, i64)>>) -> usize {
        let mut seen: Vec<&T> = graph.keys().collect();
        for neighbors in graph.values() {
            for (neighbor, _) in neighbors {
                if !seen.contains(&neighbor) {
                    seen.push(neighbor);
                }
            }
        }
        seen.len()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut graph: HashMap<&str, Vec<(&str, i64)>> = HashMap::new();
    graph.insert("s", vec![("a", 4), ("b", 5)]);
    graph.insert("a", vec![("c", -3)]);
    graph.insert("b", vec![("c", 4)]);
    graph.insert("c", vec![("t", 2)]);
    graph.insert("t", vec![]);

    println!("graph: s-4->a s-5->b a-(-3)->c b-4->c c-2->t");
    let mut distances: Vec<_> = BellmanFord::distances(&graph, &"s")
        .map(|d| d.into_iter().collect())
        .unwrap_or_default();
    distances.sort();
    println!("distances from s: {:?}", distances);

    let mut cyclic: HashMap<&str, Vec<(&str, i64)>> = HashMap::new();
    cyclic.insert("x", vec![("y", 1)]);
    cyclic.insert("y", vec![("x", -2)]);
    println!("graph: x-1->y y-(-2)->x");
    println!(
        "negative cycle reachable from x: {}",
        BellmanFord::has_negative_cycle(&cyclic, &"x")
    );
}
