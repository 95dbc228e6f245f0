//! Dijkstra最短路径
//!
//! 带权图单源最短路径（LeetCode 743 "Network Delay Time" 同款）。
//! 两个实现对比复杂度取舍：
//! - 二叉堆版 O((V+E) log V)，稀疏图的标准写法；
//! - 稠密扫描版 O(V^2)，每轮线性挑最近的未定节点，图很小或很稠时
//!   常数更低、代码更短。
//! 权重限定非负，负权请改用 bellman_ford。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Dijkstra练习结构体
pub struct Dijkstra;

/// 优先队列元素：按距离取最小
#[derive(Debug, Clone, Eq, PartialEq)]
struct QueueEntry<T> {
    node: T,
    distance: u64,
}

impl<T: Eq> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap是大顶堆，反转比较得到小顶行为
        other.distance.cmp(&self.distance)
    }
}

impl<T: Eq> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 二叉堆版：起点到所有可达节点的最短距离
    pub fn distances_heap<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, u64)>>,
        start: &T,
    ) -> HashMap<T, u64> {
        let mut distances: HashMap<T, u64> = HashMap::new();
        let mut settled: HashSet<T> = HashSet::new();
        let mut heap: BinaryHeap<QueueEntry<T>> = BinaryHeap::new();

        distances.insert(start.clone(), 0);
        heap.push(QueueEntry {
            node: start.clone(),
            distance: 0,
        });

        while let Some(QueueEntry { node, distance }) = heap.pop() {
            if !settled.insert(node.clone()) {
                continue;
            }

            if let Some(neighbors) = graph.get(&node) {
                for (neighbor, weight) in neighbors {
                    let candidate = distance + weight;
                    let known = distances.get(neighbor).copied().unwrap_or(u64::MAX);
                    if candidate < known {
                        distances.insert(neighbor.clone(), candidate);
                        heap.push(QueueEntry {
                            node: neighbor.clone(),
                            distance: candidate,
                        });
                    }
                }
            }
        }

        distances
    }

    /// 稠密扫描版：每轮线性找最近的未定节点
    pub fn distances_dense<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, u64)>>,
        start: &T,
    ) -> HashMap<T, u64> {
        let mut distances: HashMap<T, u64> = HashMap::new();
        let mut settled: HashSet<T> = HashSet::new();
        distances.insert(start.clone(), 0);

        loop {
            // 找当前距离最小的未定节点
            let next = distances
                .iter()
                .filter(|(node, _)| !settled.contains(*node))
                .min_by_key(|(_, distance)| **distance)
                .map(|(node, distance)| (node.clone(), *distance));

            let Some((node, distance)) = next else {
                break;
            };
            settled.insert(node.clone());

            if let Some(neighbors) = graph.get(&node) {
                for (neighbor, weight) in neighbors {
                    let candidate = distance + weight;
                    let known = distances.get(neighbor).copied().unwrap_or(u64::MAX);
                    if candidate < known {
                        distances.insert(neighbor.clone(), candidate);
                    }
                }
            }
        }

        distances
    }

    /// 最短路径本身：堆版跑前驱表，再反向重建
    pub fn shortest_path<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, u64)>>,
        start: &T,
        target: &T,
    ) -> Option<(Vec<T>, u64)> {
        let mut distances: HashMap<T, u64> = HashMap::new();
        let mut predecessors: HashMap<T, T> = HashMap::new();
        let mut settled: HashSet<T> = HashSet::new();
        let mut heap: BinaryHeap<QueueEntry<T>> = BinaryHeap::new();

        distances.insert(start.clone(), 0);
        heap.push(QueueEntry {
            node: start.clone(),
            distance: 0,
        });

        while let Some(QueueEntry { node, distance }) = heap.pop() {
            if node == *target {
                let mut path = vec![target.clone()];
                let mut current = target;
                while let Some(previous) = predecessors.get(current) {
                    path.push(previous.clone());
                    current = previous;
                }
                path.reverse();
                return Some((path, distance));
            }

            if !settled.insert(node.clone()) {
                continue;
            }

            if let Some(neighbors) = graph.get(&node) {
                for (neighbor, weight) in neighbors {
                    let candidate = distance + weight;
                    let known = distances.get(neighbor).copied().unwrap_or(u64::MAX);
                    if candidate < known {
                        distances.insert(neighbor.clone(), candidate);
                        predecessors.insert(neighbor.clone(), node.clone());
                        heap.push(QueueEntry {
                            node: neighbor.clone(),
                            distance: candidate,
                        });
                    }
                }
            }
        }

        None
    }

    /// 网络延迟：信号从起点出发传遍全图要多久（LeetCode 743）
    ///
    /// 有节点不可达时返回None。
    pub fn network_delay<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<(T, u64)>>,
        start: &T,
    ) -> Option<u64> {
        let distances = Self::distances_heap(graph, start);
        if distances.len() < graph.len() {
            return None;
        }
        distances.values().max().copied()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut graph: HashMap<char, Vec<(char, u64)>> = HashMap::new();
    graph.insert('a', vec![('b', 4), ('c', 2)]);
    graph.insert('b', vec![('c', 5), ('d', 10)]);
    graph.insert('c', vec![('e', 3)]);
    graph.insert('d', vec![('f', 11)]);
    graph.insert('e', vec![('d', 4)]);
    graph.insert('f', vec![]);

    println!("graph: a-4->b a-2->c b-5->c b-10->d c-3->e d-11->f e-4->d");

    let mut heap_distances: Vec<_> = Dijkstra::distances_heap(&graph, &'a').into_iter().collect();
    heap_distances.sort();
    println!("distances via heap:  {:?}", heap_distances);

    let mut dense_distances: Vec<_> =
        Dijkstra::distances_dense(&graph, &'a').into_iter().collect();
    dense_distances.sort();
    println!("distances via scan:  {:?}", dense_distances);

    println!(
        "shortest path a -> f: {:?}",
        Dijkstra::shortest_path(&graph, &'a', &'f')
    );
    println!(
        "network delay from a: {:?}",
        Dijkstra::network_delay(&graph, &'a')
    );
}
