//! 最小栈（CCI 3.2，LeetCode 155）
//!
//! push、pop、取最小值都要O(1)。两种经典做法：
//! - 每个元素旁边记一份"到此为止的最小值"，空间2n但逻辑最直白；
//! - 辅助栈只在新值不大于当前最小时入栈，重复最小值也要入，
//!   否则pop掉一个副本后最小值就错了。
//!
//! 第二种的重复判断用`<=`而不是`<`，是这道题最常见的翻车点。

/// 成对记录版：每项带着当时的最小值
pub struct MinStack {
    items: Vec<(i64, i64)>,
}

impl Default for MinStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MinStack {
    pub fn new() -> Self {
        MinStack { items: Vec::new() }
    }

    pub fn push(&mut self, value: i64) {
        let min = match self.items.last() {
            Some(&(_, current)) => current.min(value),
            None => value,
        };
        self.items.push((value, min));
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.items.pop().map(|(value, _)| value)
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.last().map(|&(value, _)| value)
    }

    pub fn min(&self) -> Option<i64> {
        self.items.last().map(|&(_, min)| min)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 辅助栈版：最小值序列单独存，通常短得多
pub struct MinStackAux {
    items: Vec<i64>,
    minimums: Vec<i64>,
}

impl Default for MinStackAux {
    fn default() -> Self {
        Self::new()
    }
}

impl MinStackAux {
    pub fn new() -> Self {
        MinStackAux {
            items: Vec::new(),
            minimums: Vec::new(),
        }
    }

    pub fn push(&mut self, value: i64) {
        // 等于当前最小也要压入，配平pop
        if self.minimums.last().map_or(true, |&min| value <= min) {
            self.minimums.push(value);
        }
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<i64> {
        let value = self.items.pop()?;
        if self.minimums.last() == Some(&value) {
            self.minimums.pop();
        }
        Some(value)
    }

    pub fn min(&self) -> Option<i64> {
        self.minimums.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut stack = MinStack::new();
    for value in [5, 2, 7, 2, 9] {
        stack.push(value);
        println!("push {} -> min {:?}", value, stack.min());
    }
    stack.pop();
    stack.pop();
    println!("after two pops -> min {:?}", stack.min());

    let mut aux = MinStackAux::new();
    for value in [3, 1, 4, 1, 5] {
        aux.push(value);
    }
    println!("aux version min: {:?}", aux.min());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_tracks_pushes() {
        let mut stack = MinStack::new();
        assert_eq!(stack.min(), None);
        stack.push(3);
        assert_eq!(stack.min(), Some(3));
        stack.push(5);
        assert_eq!(stack.min(), Some(3));
        stack.push(1);
        assert_eq!(stack.min(), Some(1));
    }

    #[test]
    fn test_min_restores_after_pop() {
        let mut stack = MinStack::new();
        stack.push(4);
        stack.push(2);
        stack.push(8);
        assert_eq!(stack.min(), Some(2));
        assert_eq!(stack.pop(), Some(8));
        assert_eq!(stack.min(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.min(), Some(4));
    }

    #[test]
    fn test_duplicate_minimum() {
        let mut stack = MinStackAux::new();
        stack.push(1);
        stack.push(1);
        assert_eq!(stack.pop(), Some(1));
        // 还剩一个1，最小值不能丢
        assert_eq!(stack.min(), Some(1));
    }

    #[test]
    fn test_both_versions_agree() {
        let operations = [5i64, 3, 8, 3, -2, 7, -2];
        let mut paired = MinStack::new();
        let mut aux = MinStackAux::new();
        for &value in &operations {
            paired.push(value);
            aux.push(value);
            assert_eq!(paired.min(), aux.min());
        }
        for _ in 0..operations.len() {
            assert_eq!(paired.pop(), aux.pop());
            assert_eq!(paired.min(), aux.min());
        }
        assert!(paired.is_empty() && aux.is_empty());
    }

    #[test]
    fn test_peek() {
        let mut stack = MinStack::new();
        stack.push(9);
        stack.push(4);
        assert_eq!(stack.peek(), Some(4));
        assert_eq!(stack.len(), 2);
    }
}
