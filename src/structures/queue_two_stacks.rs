//! 两个栈模拟队列（CCI 3.4）
//!
//! 入队栈只管push，出队栈只管pop，出队栈空了才把入队栈
//! 整个倒过来。每个元素一生最多被搬一次，均摊O(1)。
//!
//! 对比实现是"入队时就倒"的版本：enqueue O(n)、dequeue O(1)，
//! 写起来更短，但把成本放错了方向，面试时值得说清楚区别。

/// 均摊O(1)的双栈队列
pub struct QueueTwoStacks<T> {
    inbox: Vec<T>,
    outbox: Vec<T>,
}

impl<T> Default for QueueTwoStacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueTwoStacks<T> {
    pub fn new() -> Self {
        QueueTwoStacks {
            inbox: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbox.push(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.shift();
        self.outbox.pop()
    }

    pub fn front(&mut self) -> Option<&T> {
        self.shift();
        self.outbox.last()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// 出队栈空了才搬运，这是均摊分析成立的关键
    fn shift(&mut self) {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
    }
}

/// 入队即倒的急切版本，enqueue O(n)
pub struct EagerQueue<T> {
    items: Vec<T>,
}

impl<T> Default for EagerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EagerQueue<T> {
    pub fn new() -> Self {
        EagerQueue { items: Vec::new() }
    }

    /// 借第二个栈把新元素垫到底部
    pub fn enqueue(&mut self, value: T) {
        let mut spare = Vec::with_capacity(self.items.len() + 1);
        while let Some(item) = self.items.pop() {
            spare.push(item);
        }
        self.items.push(value);
        while let Some(item) = spare.pop() {
            self.items.push(item);
        }
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut queue = QueueTwoStacks::new();
    for value in [1, 2, 3] {
        queue.enqueue(value);
    }
    println!("dequeue: {:?}", queue.dequeue());
    queue.enqueue(4);
    println!("front: {:?}", queue.front());
    let mut drained = Vec::new();
    while let Some(value) = queue.dequeue() {
        drained.push(value);
    }
    println!("drain rest: {:?}", drained);

    let mut eager = EagerQueue::new();
    for word in ["a", "b", "c"] {
        eager.enqueue(word);
    }
    println!("eager dequeue: {:?}", eager.dequeue());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = QueueTwoStacks::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_interleaved_operations() {
        let mut queue = QueueTwoStacks::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        // 2还在出队栈里，3在入队栈里，顺序必须仍是2先出
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_front_does_not_consume() {
        let mut queue = QueueTwoStacks::new();
        queue.enqueue("x");
        queue.enqueue("y");
        assert_eq!(queue.front(), Some(&"x"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some("x"));
    }

    #[test]
    fn test_eager_matches_lazy() {
        let mut lazy = QueueTwoStacks::new();
        let mut eager = EagerQueue::new();
        for value in 0..20 {
            lazy.enqueue(value);
            eager.enqueue(value);
        }
        for _ in 0..20 {
            assert_eq!(lazy.dequeue(), eager.dequeue());
        }
        assert!(lazy.is_empty() && eager.is_empty());
    }
}
