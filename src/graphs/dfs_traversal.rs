//! 深度优先遍历
//!
//! 图遍历基本功（CCI 4.1 "Route Between Nodes" 的底层）：递归版、
//! 显式栈迭代版各写一遍，再加可达性判断和枚举两点间全部简单路径。
//! 迭代版的意义在于大图上不吃调用栈。

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// DFS练习结构体
pub struct Dfs;

impl Dfs {
    /// 递归遍历，返回访问顺序
    pub fn traverse_recursive<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
    ) -> Vec<T> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        Self::visit(graph, start, &mut visited, &mut order);
        order
    }

    fn visit<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        current: &T,
        visited: &mut HashSet<T>,
        order: &mut Vec<T>,
    ) {
        if !visited.insert(current.clone()) {
            return;
        }
        order.push(current.clone());

        if let Some(neighbors) = graph.get(current) {
            for neighbor in neighbors {
                Self::visit(graph, neighbor, visited, order);
            }
        }
    }

    /// 显式栈的迭代遍历
    ///
    /// 邻居逆序入栈，访问顺序和递归版保持一致。
    pub fn traverse_iterative<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
    ) -> Vec<T> {
        let mut visited: HashSet<T> = HashSet::new();
        let mut stack = vec![start.clone()];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            order.push(current.clone());

            if let Some(neighbors) = graph.get(&current) {
                for neighbor in neighbors.iter().rev() {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor.clone());
                    }
                }
            }
        }

        order
    }

    /// 两点之间是否存在路径（CCI 4.1）
    pub fn has_route<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
        target: &T,
    ) -> bool {
        if start == target {
            return true;
        }
        Self::traverse_iterative(graph, start).contains(target)
    }

    /// 枚举两点间的全部简单路径，带深度上限防止组合爆炸
    pub fn all_simple_paths<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        start: &T,
        target: &T,
        max_depth: usize,
    ) -> Vec<Vec<T>> {
        let mut paths = Vec::new();
        let mut current_path = Vec::new();
        let mut on_path = HashSet::new();
        Self::collect_paths(
            graph,
            start,
            target,
            max_depth,
            &mut current_path,
            &mut on_path,
            &mut paths,
        );
        paths
    }

    fn collect_paths<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        current: &T,
        target: &T,
        max_depth: usize,
        current_path: &mut Vec<T>,
        on_path: &mut HashSet<T>,
        paths: &mut Vec<Vec<T>>,
    ) {
        if current_path.len() >= max_depth {
            return;
        }

        current_path.push(current.clone());
        on_path.insert(current.clone());

        if current == target {
            paths.push(current_path.clone());
        } else if let Some(neighbors) = graph.get(current) {
            for neighbor in neighbors {
                if !on_path.contains(neighbor) {
                    Self::collect_paths(
                        graph,
                        neighbor,
                        target,
                        max_depth,
                        current_path,
                        on_path,
                        paths,
                    );
                }
            }
        }

        current_path.pop();
        on_path.remove(current);
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut graph: HashMap<i32, Vec<i32>> = HashMap::new();
    graph.insert(0, vec![1, 2]);
    graph.insert(1, vec![3]);
    graph.insert(2, vec![3]);
    graph.insert(3, vec![4]);
    graph.insert(4, vec![]);

    println!("graph: 0->[1 2], 1->[3], 2->[3], 3->[4]");
    println!("recursive order: {:?}", Dfs::traverse_recursive(&graph, &0));
    println!("iterative order: {:?}", Dfs::traverse_iterative(&graph, &0));
    println!("route 0 -> 4 exists: {}", Dfs::has_route(&graph, &0, &4));
    println!("route 4 -> 0 exists: {}", Dfs::has_route(&graph, &4, &0));
    println!(
        "all simple paths 0 -> 4: {:?}",
        Dfs::all_simple_paths(&graph, &0, &4, 10)
    );
}
