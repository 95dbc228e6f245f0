//! 二叉堆
//!
//! 手写最小堆，标准库的`BinaryHeap`是最大堆，平时用
//! `Reverse`包一层就行，这里为了看清楚siftUp/siftDown
//! 自己铺一遍数组实现：
//! - 下标i的子节点是2i+1和2i+2，父节点是(i-1)/2；
//! - push尾插后上浮，pop用尾元素顶到根再下沉；
//! - 整批建堆从最后一个内部节点倒着下沉，O(n)而不是逐个push的O(n log n)。

/// 数组实现的最小堆
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { items: Vec::new() }
    }

    /// O(n)建堆
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = MinHeap { items };
        if heap.items.len() > 1 {
            let last_parent = (heap.items.len() - 2) / 2;
            for index in (0..=last_parent).rev() {
                heap.sift_down(index);
            }
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let value = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        value
    }

    /// 弹空成有序序列，即堆排序
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|index| self.items[(index - 1) / 2] <= self.items[index])
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut heap = MinHeap::new();
    for value in [5, 1, 8, 3, 9, 2] {
        heap.push(value);
    }
    println!("peek: {:?}", heap.peek());
    println!("pop: {:?}, pop: {:?}", heap.pop(), heap.pop());

    let heap = MinHeap::from_vec(vec![9, 4, 7, 1, 2, 6, 5, 3, 8]);
    println!("heapify then drain: {:?}", heap.into_sorted_vec());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut heap = MinHeap::new();
        for value in [5, 1, 8, 3, 9, 2] {
            heap.push(value);
            assert!(heap.is_heap());
        }
        let mut drained = Vec::new();
        while let Some(value) = heap.pop() {
            drained.push(value);
            assert!(heap.is_heap());
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_empty() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_from_vec_builds_heap() {
        let heap = MinHeap::from_vec(vec![9, 4, 7, 1, 2, 6, 5, 3, 8]);
        assert!(heap.is_heap());
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = MinHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(heap.into_sorted_vec(), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinHeap::new();
        for value in [7, 7, 7] {
            heap.push(value);
        }
        assert_eq!(heap.into_sorted_vec(), vec![7, 7, 7]);
    }

    #[test]
    fn test_matches_std_heap() {
        use std::cmp::Reverse;
        use std::collections::BinaryHeap;

        let values = [42, 17, 93, 8, 56, 23, 71, 8];
        let mut ours = MinHeap::new();
        let mut std_heap = BinaryHeap::new();
        for &value in &values {
            ours.push(value);
            std_heap.push(Reverse(value));
        }
        for _ in 0..values.len() {
            assert_eq!(ours.pop(), std_heap.pop().map(|Reverse(v)| v));
        }
    }
}
