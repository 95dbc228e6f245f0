//! 拓扑排序
//!
//! 有向无环图的线性化，经典应用是课程表问题（LeetCode 207/210）：
//! 课程有先修关系，找一个可行的修课顺序。
//!
//! 两个实现对比：
//! - Kahn算法：不断摘除入度为0的节点，队列驱动，天然检环
//!   （剩下摘不掉的节点就是环上的）；
//! - DFS后序：逆后序即拓扑序，递归栈上重入灰色节点说明有环。
//!
//! 图里有环时两个版本都返回Err，顺序无定义。

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// 拓扑排序练习结构体
pub struct TopologicalSort;

impl TopologicalSort {
    /// Kahn算法：按入度摘除
    pub fn kahn<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>) -> Result<Vec<T>, String> {
        let mut in_degree: HashMap<T, usize> = HashMap::new();
        for node in graph.keys() {
            in_degree.entry(node.clone()).or_insert(0);
        }
        for neighbors in graph.values() {
            for neighbor in neighbors {
                *in_degree.entry(neighbor.clone()).or_insert(0) += 1;
            }
        }

        let mut queue: VecDeque<T> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| node.clone())
            .collect();

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(node) = queue.pop_front() {
            if let Some(neighbors) = graph.get(&node) {
                for neighbor in neighbors {
                    if let Some(degree) = in_degree.get_mut(neighbor) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(neighbor.clone());
                        }
                    }
                }
            }
            order.push(node);
        }

        if order.len() != in_degree.len() {
            return Err("图中存在环，无法拓扑排序".to_string());
        }
        Ok(order)
    }

    /// DFS版：逆后序，灰色重入检环
    pub fn dfs<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>) -> Result<Vec<T>, String> {
        let mut finished: HashSet<T> = HashSet::new();
        let mut in_progress: HashSet<T> = HashSet::new();
        let mut postorder: Vec<T> = Vec::new();

        for node in graph.keys() {
            if !finished.contains(node) {
                Self::visit(graph, node, &mut in_progress, &mut finished, &mut postorder)?;
            }
        }

        postorder.reverse();
        Ok(postorder)
    }

    fn visit<T: Clone + Eq + Hash>(
        graph: &HashMap<T, Vec<T>>,
        node: &T,
        in_progress: &mut HashSet<T>,
        finished: &mut HashSet<T>,
        postorder: &mut Vec<T>,
    ) -> Result<(), String> {
        if !in_progress.insert(node.clone()) {
            return Err("图中存在环，无法拓扑排序".to_string());
        }

        if let Some(neighbors) = graph.get(node) {
            for neighbor in neighbors {
                if !finished.contains(neighbor) {
                    Self::visit(graph, neighbor, in_progress, finished, postorder)?;
                }
            }
        }

        in_progress.remove(node);
        finished.insert(node.clone());
        postorder.push(node.clone());
        Ok(())
    }

    /// 课程表判定：给定先修约束能否修完全部课程
    pub fn can_finish<T: Clone + Eq + Hash>(prerequisites: &HashMap<T, Vec<T>>) -> bool {
        Self::kahn(prerequisites).is_ok()
    }
}

/// 验证一个序列是不是给定图的合法拓扑序
pub fn is_valid_order<T: Clone + Eq + Hash>(graph: &HashMap<T, Vec<T>>, order: &[T]) -> bool {
    let positions: HashMap<&T, usize> = order.iter().enumerate().map(|(i, n)| (n, i)).collect();
    for (node, neighbors) in graph {
        let Some(&from) = positions.get(node) else {
            return false;
        };
        for neighbor in neighbors {
            match positions.get(neighbor) {
                Some(&to) if from < to => {}
                _ => return false,
            }
        }
    }
    true
}

/// 打印示例输入输出
pub fn demo() {
    let mut courses: HashMap<&str, Vec<&str>> = HashMap::new();
    courses.insert("intro", vec!["data-structures", "discrete-math"]);
    courses.insert("discrete-math", vec!["algorithms"]);
    courses.insert("data-structures", vec!["algorithms"]);
    courses.insert("algorithms", vec!["compilers"]);
    courses.insert("compilers", vec![]);

    println!("prerequisites: intro -> {{data-structures, discrete-math}} -> algorithms -> compilers");
    match TopologicalSort::kahn(&courses) {
        Ok(order) => println!("kahn order: {:?}", order),
        Err(message) => println!("kahn error: {}", message),
    }
    match TopologicalSort::dfs(&courses) {
        Ok(order) => println!("dfs order:  {:?}", order),
        Err(message) => println!("dfs error:  {}", message),
    }

    let mut cyclic: HashMap<&str, Vec<&str>> = HashMap::new();
    cyclic.insert("chicken", vec!["egg"]);
    cyclic.insert("egg", vec!["chicken"]);
    println!("cyclic input: chicken <-> egg");
    println!("can finish: {}", TopologicalSort::can_finish(&cyclic));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_graph() -> HashMap<&'static str, Vec<&'static str>> {
        let mut graph = HashMap::new();
        graph.insert("a", vec!["b", "c"]);
        graph.insert("b", vec!["d"]);
        graph.insert("c", vec!["d"]);
        graph.insert("d", vec![]);
        graph
    }

    #[test]
    fn test_kahn_produces_valid_order() {
        let graph = course_graph();
        let order = TopologicalSort::kahn(&graph).expect("DAG should sort in test");
        assert_eq!(order.len(), 4);
        assert!(is_valid_order(&graph, &order));
    }

    #[test]
    fn test_dfs_produces_valid_order() {
        let graph = course_graph();
        let order = TopologicalSort::dfs(&graph).expect("DAG should sort in test");
        assert_eq!(order.len(), 4);
        assert!(is_valid_order(&graph, &order));
    }

    #[test]
    fn test_cycle_rejected_by_both() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b"]);
        graph.insert("b", vec!["c"]);
        graph.insert("c", vec!["a"]);

        assert!(TopologicalSort::kahn(&graph).is_err());
        assert!(TopologicalSort::dfs(&graph).is_err());
        assert!(!TopologicalSort::can_finish(&graph));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["a"]);
        assert!(TopologicalSort::kahn(&graph).is_err());
        assert!(TopologicalSort::dfs(&graph).is_err());
    }

    #[test]
    fn test_disconnected_nodes_all_appear() {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
        graph.insert("a", vec!["b"]);
        graph.insert("b", vec![]);
        graph.insert("lonely", vec![]);

        let order = TopologicalSort::kahn(&graph).expect("DAG should sort in test");
        assert_eq!(order.len(), 3);
        assert!(order.contains(&"lonely"));
    }

    #[test]
    fn test_order_validator_rejects_wrong_order() {
        let graph = course_graph();
        assert!(!is_valid_order(&graph, &["d", "b", "c", "a"]));
        assert!(!is_valid_order(&graph, &["a", "b", "c"]));
    }
}
