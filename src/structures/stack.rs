//! 栈
//!
//! `Vec`本身就是一个栈，这里包一层只为统一接口叫法，
//! 真正的练习是CCI 3.3"盘子堆"：单个栈有容量上限，
//! 满了就开新栈，pop时空了就回收，对外仍表现为一个栈。
//!
//! pop对空栈返回`None`，调用方自己决定是错误还是循环终点。

/// Vec包装的基础栈
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 盘子堆（CCI 3.3）
///
/// 每个内部栈最多`capacity`个元素，推满开新栈。
pub struct SetOfStacks<T> {
    stacks: Vec<Vec<T>>,
    capacity: usize,
}

impl<T> SetOfStacks<T> {
    /// capacity为0时按1处理，否则第一个盘子都放不下
    pub fn new(capacity: usize) -> Self {
        SetOfStacks {
            stacks: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, value: T) {
        match self.stacks.last_mut() {
            Some(top) if top.len() < self.capacity => top.push(value),
            _ => self.stacks.push(vec![value]),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.stacks.last_mut()?.pop();
        if self.stacks.last().is_some_and(|top| top.is_empty()) {
            self.stacks.pop();
        }
        value
    }

    /// 从指定内部栈pop（CCI的popAt扩展）
    ///
    /// 不做"下层补位"，后面的栈允许欠容量，这也是书里讨论的
    /// 两种取舍之一。
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        let value = self.stacks.get_mut(index)?.pop();
        if self.stacks.get(index).is_some_and(|s| s.is_empty()) {
            self.stacks.remove(index);
        }
        value
    }

    pub fn len(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// 当前内部栈个数
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut stack = Stack::new();
    for value in [1, 2, 3] {
        stack.push(value);
    }
    let peeked = stack.peek().copied();
    println!("peek: {:?}, pop: {:?}", peeked, stack.pop());

    let mut plates = SetOfStacks::new(3);
    for value in 1..=7 {
        plates.push(value);
    }
    println!(
        "7 plates, capacity 3 -> {} stacks, {} plates",
        plates.stack_count(),
        plates.len()
    );
    println!("pop: {:?}", plates.pop());
    println!("pop_at(0): {:?}", plates.pop_at(0));
    println!("after pops -> {} stacks, {} plates", plates.stack_count(), plates.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_basic() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_set_of_stacks_rolls_over() {
        let mut plates = SetOfStacks::new(2);
        for value in 1..=5 {
            plates.push(value);
        }
        assert_eq!(plates.stack_count(), 3);
        assert_eq!(plates.len(), 5);
        assert_eq!(plates.pop(), Some(5));
        // 第三个栈只剩的那一个被取走后整个栈回收
        assert_eq!(plates.stack_count(), 2);
    }

    #[test]
    fn test_set_of_stacks_behaves_like_one_stack() {
        let mut plates = SetOfStacks::new(3);
        let mut reference = Vec::new();
        for value in 0..10 {
            plates.push(value);
            reference.push(value);
        }
        while let Some(expected) = reference.pop() {
            assert_eq!(plates.pop(), Some(expected));
        }
        assert_eq!(plates.pop(), None);
        assert!(plates.is_empty());
    }

    #[test]
    fn test_pop_at() {
        let mut plates = SetOfStacks::new(2);
        for value in 1..=6 {
            plates.push(value);
        }
        // 栈内容: [1,2] [3,4] [5,6]
        assert_eq!(plates.pop_at(1), Some(4));
        assert_eq!(plates.pop_at(1), Some(3));
        assert_eq!(plates.stack_count(), 2);
        assert_eq!(plates.pop_at(5), None);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut plates = SetOfStacks::new(0);
        plates.push('a');
        plates.push('b');
        assert_eq!(plates.stack_count(), 2);
        assert_eq!(plates.pop(), Some('b'));
    }
}
