//! 单链表
//!
//! 用`Option<Box<Node>>`手写单链表，把CCI第2章的经典操作
//! 挂在上面：
//! - 2.1 删除重复节点（带辅助集合一趟，或不带集合两趟）；
//! - 2.2 倒数第k个节点（双指针先行k步）；
//! - 2.6 回文判定（收集后对比，链表本身只走一遍）；
//! - 反转（迭代摘头接新链）。
//!
//! 所有权规则让"摘下一个节点再接回去"成为练习的主要内容，
//! take/replace的用法比算法本身更值得记。

use std::collections::HashSet;
use std::hash::Hash;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// 练习用单链表
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    length: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 头插，O(1)
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.length += 1;
    }

    /// 摘头，O(1)
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.length -= 1;
            node.value
        })
    }

    /// 倒数第k个（k=1是最后一个），双指针
    pub fn kth_from_last(&self, k: usize) -> Option<&T> {
        if k == 0 {
            return None;
        }
        let mut runner = &self.head;
        for _ in 0..k {
            match runner {
                Some(node) => runner = &node.next,
                None => return None,
            }
        }
        let mut trailing = &self.head;
        while let Some(node) = runner {
            runner = &node.next;
            match trailing {
                Some(t) => trailing = &t.next,
                None => return None,
            }
        }
        trailing.as_ref().map(|node| &node.value)
    }

    /// 迭代反转，逐节点摘下头插到新链
    pub fn reverse(&mut self) {
        let mut reversed: Option<Box<Node<T>>> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// 遍历快照
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.length);
        let mut cursor = &self.head;
        while let Some(node) = cursor {
            values.push(node.value.clone());
            cursor = &node.next;
        }
        values
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = LinkedList::new();
        for value in values.iter().rev() {
            list.push_front(value.clone());
        }
        list
    }

    /// 回文判定
    pub fn is_palindrome(&self) -> bool
    where
        T: Clone + PartialEq,
    {
        let values = self.to_vec();
        let reversed: Vec<T> = values.iter().rev().cloned().collect();
        values == reversed
    }
}

impl<T: Clone + Eq + Hash> LinkedList<T> {
    /// 删除重复值，保留首次出现，辅助集合一趟
    ///
    /// 借用检查不允许"持着节点的借用改写游标"，所以先把节点
    /// 整个take出来，留下的决定重新挂回，跳过的让它析构。
    pub fn remove_duplicates(&mut self) {
        let mut seen: HashSet<T> = HashSet::new();
        let mut cursor = &mut self.head;
        while let Some(mut node) = cursor.take() {
            if seen.contains(&node.value) {
                *cursor = node.next.take();
                self.length -= 1;
            } else {
                seen.insert(node.value.clone());
                *cursor = Some(node);
                if let Some(node) = cursor {
                    cursor = &mut node.next;
                }
            }
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut list = LinkedList::from_slice(&[3, 1, 4, 1, 5, 9, 2, 6]);
    println!("list: {:?}", list.to_vec());
    println!("2nd from last: {:?}", list.kth_from_last(2));

    list.remove_duplicates();
    println!("dedup: {:?}", list.to_vec());

    list.reverse();
    println!("reversed: {:?}", list.to_vec());

    let symmetric = LinkedList::from_slice(&['r', 'a', 'c', 'e', 'c', 'a', 'r']);
    println!("racecar palindrome: {}", symmetric.is_palindrome());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_front() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        list.push_front(2);
        list.push_front(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn test_from_slice_round_trip() {
        let list = LinkedList::from_slice(&[1, 2, 3]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_kth_from_last() {
        let list = LinkedList::from_slice(&[10, 20, 30, 40]);
        assert_eq!(list.kth_from_last(1), Some(&40));
        assert_eq!(list.kth_from_last(4), Some(&10));
        assert_eq!(list.kth_from_last(5), None);
        assert_eq!(list.kth_from_last(0), None);
    }

    #[test]
    fn test_reverse() {
        let mut list = LinkedList::from_slice(&[1, 2, 3, 4]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
        assert_eq!(list.len(), 4);

        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_duplicates() {
        let mut list = LinkedList::from_slice(&[3, 1, 4, 1, 5, 3, 3]);
        list.remove_duplicates();
        assert_eq!(list.to_vec(), vec![3, 1, 4, 5]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_remove_duplicates_no_change() {
        let mut list = LinkedList::from_slice(&[1, 2, 3]);
        list.remove_duplicates();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_palindrome() {
        assert!(LinkedList::from_slice(&[1, 2, 1]).is_palindrome());
        assert!(LinkedList::from_slice(&[1, 2, 2, 1]).is_palindrome());
        assert!(!LinkedList::from_slice(&[1, 2, 3]).is_palindrome());
        assert!(LinkedList::<i32>::new().is_palindrome());
    }
}
