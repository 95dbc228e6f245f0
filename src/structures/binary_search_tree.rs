//! 二叉搜索树
//!
//! 不带自平衡的裸BST，重点练三件事：
//! - 插入与查找的游标循环在借用检查下怎么写；
//! - 删除的三种情况（叶子、单子、双子取右子树最小值顶替），
//!   这里用"整棵子树take出来重建"的所有权写法绕开游标删除的借用难题；
//! - 中序遍历即有序，以及用上下界递归验证BST性质
//!   （只和父节点比较的"局部检查"是经典的错误答案）。
//!
//! 退化成链表的最坏情况在测试里用顺序插入直接演示。

use std::cmp::Ordering;

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// 练习用二叉搜索树，重复值忽略
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    size: usize,
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 插入，已存在时返回false
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *cursor = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.size += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = &self.root;
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// 最左节点
    pub fn min(&self) -> Option<&T> {
        let mut cursor = self.root.as_ref()?;
        while let Some(left) = cursor.left.as_ref() {
            cursor = left;
        }
        Some(&cursor.value)
    }

    /// 最右节点
    pub fn max(&self) -> Option<&T> {
        let mut cursor = self.root.as_ref()?;
        while let Some(right) = cursor.right.as_ref() {
            cursor = right;
        }
        Some(&cursor.value)
    }

    /// 删除，存在则返回true
    pub fn remove(&mut self, value: &T) -> bool {
        let mut removed = false;
        self.root = Self::remove_node(self.root.take(), value, &mut removed);
        if removed {
            self.size -= 1;
        }
        removed
    }

    fn remove_node(
        node: Option<Box<Node<T>>>,
        value: &T,
        removed: &mut bool,
    ) -> Option<Box<Node<T>>> {
        let mut node = node?;
        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), value, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), value, removed),
            Ordering::Equal => {
                *removed = true;
                return match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(only), None) | (None, Some(only)) => Some(only),
                    (Some(left), Some(right)) => {
                        // 右子树最小值顶替被删节点
                        let (successor, rest) = Self::detach_min(right);
                        node.value = successor;
                        node.left = Some(left);
                        node.right = rest;
                        Some(node)
                    }
                };
            }
        }
        Some(node)
    }

    /// 摘下子树最小值，返回(最小值, 剩余子树)
    fn detach_min(mut node: Box<Node<T>>) -> (T, Option<Box<Node<T>>>) {
        match node.left.take() {
            None => {
                let right = node.right.take();
                (node.value, right)
            }
            Some(left) => {
                let (min_value, rest) = Self::detach_min(left);
                node.left = rest;
                (min_value, Some(node))
            }
        }
    }

    /// 中序遍历，结果必然有序
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        Self::walk_in_order(&self.root, &mut values);
        values
    }

    fn walk_in_order<'a>(node: &'a Option<Box<Node<T>>>, values: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::walk_in_order(&node.left, values);
            values.push(&node.value);
            Self::walk_in_order(&node.right, values);
        }
    }

    /// 树高，空树为0
    pub fn height(&self) -> usize {
        Self::node_height(&self.root)
    }

    fn node_height(node: &Option<Box<Node<T>>>) -> usize {
        match node {
            None => 0,
            Some(node) => 1 + Self::node_height(&node.left).max(Self::node_height(&node.right)),
        }
    }

    /// 带上下界的BST性质验证（CCI 4.5）
    pub fn is_valid(&self) -> bool {
        Self::check_bounds(&self.root, None, None)
    }

    fn check_bounds(node: &Option<Box<Node<T>>>, low: Option<&T>, high: Option<&T>) -> bool {
        match node {
            None => true,
            Some(node) => {
                if low.is_some_and(|bound| node.value <= *bound) {
                    return false;
                }
                if high.is_some_and(|bound| node.value >= *bound) {
                    return false;
                }
                Self::check_bounds(&node.left, low, Some(&node.value))
                    && Self::check_bounds(&node.right, Some(&node.value), high)
            }
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut tree = BinarySearchTree::new();
    for value in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(value);
    }
    println!("in-order: {:?}", tree.in_order());
    println!("min: {:?}, max: {:?}", tree.min(), tree.max());
    println!("height: {}", tree.height());
    println!("contains 40: {}", tree.contains(&40));

    tree.remove(&30);
    println!("after remove 30: {:?}", tree.in_order());
    println!("still valid: {}", tree.is_valid());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn test_insert_and_contains() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 7);
        assert!(tree.contains(&50));
        assert!(tree.contains(&20));
        assert!(!tree.contains(&55));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut tree = sample_tree();
        assert!(!tree.insert(50));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = sample_tree();
        assert_eq!(tree.in_order(), vec![&20, &30, &40, &50, &60, &70, &80]);
    }

    #[test]
    fn test_min_max() {
        let tree = sample_tree();
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.min(), None);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = sample_tree();
        assert!(tree.remove(&20));
        assert!(!tree.contains(&20));
        assert_eq!(tree.len(), 6);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = BinarySearchTree::new();
        for value in [5, 3, 2] {
            tree.insert(value);
        }
        assert!(tree.remove(&3));
        assert_eq!(tree.in_order(), vec![&2, &5]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = sample_tree();
        assert!(tree.remove(&30));
        assert_eq!(tree.in_order(), vec![&20, &40, &50, &60, &70, &80]);
        assert!(tree.is_valid());
        // 根节点也走同一条路径
        assert!(tree.remove(&50));
        assert_eq!(tree.in_order(), vec![&20, &40, &60, &70, &80]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = sample_tree();
        assert!(!tree.remove(&99));
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_degenerate_height() {
        let mut tree = BinarySearchTree::new();
        for value in 1..=6 {
            tree.insert(value);
        }
        // 顺序插入退化成链表
        assert_eq!(tree.height(), 6);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_drain_everything() {
        let mut tree = sample_tree();
        for value in [50, 30, 70, 20, 40, 60, 80] {
            assert!(tree.remove(&value));
            assert!(tree.is_valid());
        }
        assert!(tree.is_empty());
        assert!(tree.in_order().is_empty());
    }
}
