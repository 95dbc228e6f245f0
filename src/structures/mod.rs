//! 手写数据结构
//!
//! 链表、栈、堆、哈希表这些标准库里都有现成的，自己再写
//! 一遍是为了把内部机制过一手：所有权下的链式结构、
//! 均摊分析、负载因子和扩容搬迁。每个文件一个结构，
//! 对外接口尽量贴着标准库的叫法。

pub mod binary_heap;
pub mod binary_search_tree;
pub mod hash_table;
pub mod linked_list;
pub mod lru_cache;
pub mod min_stack;
pub mod queue_two_stacks;
pub mod ring_buffer;
pub mod stack;
pub mod trie;

pub use binary_heap::MinHeap;
pub use binary_search_tree::BinarySearchTree;
pub use hash_table::HashTable;
pub use linked_list::LinkedList;
pub use lru_cache::LruCache;
pub use min_stack::MinStack;
pub use queue_two_stacks::QueueTwoStacks;
pub use ring_buffer::RingBuffer;
pub use stack::{SetOfStacks, Stack};
pub use trie::Trie;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "structures/linked-list",
            Category::Structures,
            "Singly linked list with dedup, kth-from-last, reverse",
            linked_list::demo,
        ),
        Demo::new(
            "structures/stack",
            Category::Structures,
            "Vec-backed stack and the stack-of-plates variant",
            stack::demo,
        ),
        Demo::new(
            "structures/queue-two-stacks",
            Category::Structures,
            "FIFO queue built from two LIFO stacks",
            queue_two_stacks::demo,
        ),
        Demo::new(
            "structures/min-stack",
            Category::Structures,
            "Stack with O(1) minimum lookup",
            min_stack::demo,
        ),
        Demo::new(
            "structures/trie",
            Category::Structures,
            "Prefix tree with completion and multi-pattern text search",
            trie::demo,
        ),
        Demo::new(
            "structures/binary-search-tree",
            Category::Structures,
            "Unbalanced BST with removal and validity check",
            binary_search_tree::demo,
        ),
        Demo::new(
            "structures/binary-heap",
            Category::Structures,
            "Array-backed min-heap with O(n) heapify",
            binary_heap::demo,
        ),
        Demo::new(
            "structures/hash-table",
            Category::Structures,
            "Separate-chaining hash table with doubling growth",
            hash_table::demo,
        ),
        Demo::new(
            "structures/lru-cache",
            Category::Structures,
            "Fixed-capacity cache evicting the least recent key",
            lru_cache::demo,
        ),
        Demo::new(
            "structures/ring-buffer",
            Category::Structures,
            "Circular queue with reject and overwrite policies",
            ring_buffer::demo,
        ),
    ]
}
