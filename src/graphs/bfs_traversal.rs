//! 宽度优先遍历
//!
//! 经典图遍历练习（CCI 第4章 / EPI 搜索一章）：在无权图上做层序
//! 遍历，求两点间的最短路径和起点到各点的跳数。两个实现对比：
//! 逐层记录完整路径（空间大、可直接回溯）与只记前驱（空间省、
//! 需要反向重建路径）。

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// BFS练习结构体
pub struct Bfs;

impl Bfs {
    /// 层序遍历，返回从起点可达的所有节点（入队顺序）
    pub fn traverse<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>, start: &T) -> Vec<T> {
        let mut visited: HashSet<T> = HashSet::new();
        let mut queue: VecDeque<T> = VecDeque::new();
        let mut order = Vec::new();

        queue.push_back(start.clone());
        visited.insert(start.clone());

        while let Some(current) = queue.pop_front() {
            order.push(current.clone());

            if let Some(neighbors) = graph.get(&current) {
                for neighbor in neighbors {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor.clone());
                    }
                }
            }
        }

        order
    }

    /// 最短路径，队列里携带完整路径
    ///
    /// 空间代价是每个队列元素一条路径，胜在代码直白。
    pub fn shortest_path_carrying<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
        target: &T,
    ) -> Option<Vec<T>> {
        if start == target {
            return Some(vec![start.clone()]);
        }

        let mut visited: HashSet<T> = HashSet::new();
        let mut queue: VecDeque<Vec<T>> = VecDeque::new();

        visited.insert(start.clone());
        queue.push_back(vec![start.clone()]);

        while let Some(path) = queue.pop_front() {
            let current = path.last().expect("queue paths are never empty");

            if let Some(neighbors) = graph.get(current) {
                for neighbor in neighbors {
                    if neighbor == target {
                        let mut found = path.clone();
                        found.push(neighbor.clone());
                        return Some(found);
                    }
                    if visited.insert(neighbor.clone()) {
                        let mut next = path.clone();
                        next.push(neighbor.clone());
                        queue.push_back(next);
                    }
                }
            }
        }

        None
    }

    /// 最短路径，只记录前驱再反向重建
    ///
    /// 每个节点只存一个前驱，空间 O(V)。
    pub fn shortest_path_predecessor<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
        target: &T,
    ) -> Option<Vec<T>> {
        if start == target {
            return Some(vec![start.clone()]);
        }

        let mut predecessors: HashMap<T, T> = HashMap::new();
        let mut queue: VecDeque<T> = VecDeque::new();
        queue.push_back(start.clone());

        'search: while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = graph.get(&current) {
                for neighbor in neighbors {
                    if neighbor == start || predecessors.contains_key(neighbor) {
                        continue;
                    }
                    predecessors.insert(neighbor.clone(), current.clone());
                    if neighbor == target {
                        break 'search;
                    }
                    queue.push_back(neighbor.clone());
                }
            }
        }

        if !predecessors.contains_key(target) {
            return None;
        }

        // 从目标反向走前驱链
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// 起点到每个可达节点的跳数
    pub fn hop_counts<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
    ) -> HashMap<T, usize> {
        let mut hops: HashMap<T, usize> = HashMap::new();
        let mut queue: VecDeque<(T, usize)> = VecDeque::new();

        hops.insert(start.clone(), 0);
        queue.push_back((start.clone(), 0));

        while let Some((current, distance)) = queue.pop_front() {
            if let Some(neighbors) = graph.get(&current) {
                for neighbor in neighbors {
                    if !hops.contains_key(neighbor) {
                        hops.insert(neighbor.clone(), distance + 1);
                        queue.push_back((neighbor.clone(), distance + 1));
                    }
                }
            }
        }

        hops
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    graph.insert("hub", vec!["a", "b"]);
    graph.insert("a", vec!["c"]);
    graph.insert("b", vec!["c", "d"]);
    graph.insert("c", vec!["e"]);
    graph.insert("d", vec!["e"]);
    graph.insert("e", vec![]);

    println!("graph: hub->[a b], a->[c], b->[c d], c->[e], d->[e]");
    println!("traverse from hub: {:?}", Bfs::traverse(&graph, &"hub"));
    println!(
        "shortest hub->e (carrying paths): {:?}",
        Bfs::shortest_path_carrying(&graph, &"hub", &"e")
    );
    println!(
        "shortest hub->e (predecessors):   {:?}",
        Bfs::shortest_path_predecessor(&graph, &"hub", &"e")
    );

    let mut hops: Vec<_> = Bfs::hop_counts(&graph, &"hub").into_iter().collect();
    hops.sort();
    println!("hop counts from hub: {:?}", hops);
}
