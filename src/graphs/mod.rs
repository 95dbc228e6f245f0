//! 图论题目
//!
//! 遍历、最短路径、拓扑排序等经典图问题。大多数题目直接
//! 以`HashMap<T, Vec<T>>`邻接表作为输入，少数共用graph模块
//! 里的Graph封装。

pub mod bellman_ford;
pub mod bfs_traversal;
pub mod bipartite;
pub mod connected_components;
pub mod cycle_detection;
pub mod dfs_traversal;
pub mod dijkstra;
pub mod graph;
pub mod topological_sort;
pub mod word_ladder;

pub use bellman_ford::BellmanFord;
pub use bfs_traversal::Bfs;
pub use bipartite::Bipartite;
pub use connected_components::ConnectedComponents;
pub use cycle_detection::CycleDetection;
pub use dfs_traversal::Dfs;
pub use dijkstra::Dijkstra;
pub use graph::Graph;
pub use topological_sort::TopologicalSort;
pub use word_ladder::WordLadder;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "graphs/bfs-traversal",
            Category::Graphs,
            "Breadth-first traversal and unweighted shortest paths",
            bfs_traversal::demo,
        ),
        Demo::new(
            "graphs/dfs-traversal",
            Category::Graphs,
            "Depth-first traversal, route existence, simple path listing",
            dfs_traversal::demo,
        ),
        Demo::new(
            "graphs/dijkstra",
            Category::Graphs,
            "Single-source shortest paths with non-negative weights",
            dijkstra::demo,
        ),
        Demo::new(
            "graphs/bellman-ford",
            Category::Graphs,
            "Shortest paths with negative edges and cycle detection",
            bellman_ford::demo,
        ),
        Demo::new(
            "graphs/topological-sort",
            Category::Graphs,
            "Course scheduling via Kahn and DFS postorder",
            topological_sort::demo,
        ),
        Demo::new(
            "graphs/cycle-detection",
            Category::Graphs,
            "Cycle checks for directed and undirected graphs",
            cycle_detection::demo,
        ),
        Demo::new(
            "graphs/connected-components",
            Category::Graphs,
            "Flood-fill partition of an undirected graph",
            connected_components::demo,
        ),
        Demo::new(
            "graphs/bipartite",
            Category::Graphs,
            "Two-coloring test and partition extraction",
            bipartite::demo,
        ),
        Demo::new(
            "graphs/word-ladder",
            Category::Graphs,
            "Shortest word transformation over an implicit graph",
            word_ladder::demo,
        ),
    ]
}
