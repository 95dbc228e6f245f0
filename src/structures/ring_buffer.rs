//! 环形缓冲区
//!
//! 定长数组配头指针和计数，下标统一`mod capacity`回绕。
//! 存储用`Vec<Option<T>>`，取走的槽位放回`None`，不要求
//! `T: Default`也不碰未初始化内存。
//!
//! 写满后的两种策略各给一个入口：
//! - `try_push`拒绝并把值原样还给调用方；
//! - `push_overwrite`挤掉最旧的并把它返回。
//! 嵌入式里日志环、采样窗口都是后者。

/// 定容环形队列
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    length: usize,
}

impl<T> RingBuffer<T> {
    /// capacity为0时按1处理
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        RingBuffer {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            length: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_full(&self) -> bool {
        self.length == self.slots.len()
    }

    /// 满时拒绝，把值还给调用方
    pub fn try_push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.length) % self.slots.len();
        self.slots[tail] = Some(value);
        self.length += 1;
        Ok(())
    }

    /// 满时挤掉最旧的元素并返回它
    pub fn push_overwrite(&mut self, value: T) -> Option<T> {
        match self.try_push(value) {
            Ok(()) => None,
            Err(value) => {
                // 旧head被顶替后head前移，新值所在槽恰好成为队尾
                let displaced = self.slots[self.head].replace(value);
                self.head = (self.head + 1) % self.slots.len();
                displaced
            }
        }
    }

    /// 取走最旧的元素
    pub fn pop(&mut self) -> Option<T> {
        if self.length == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.length -= 1;
        value
    }

    /// 看一眼最旧的元素
    pub fn front(&self) -> Option<&T> {
        if self.length == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// 从旧到新的遍历快照
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.length)
            .filter_map(|offset| {
                let index = (self.head + offset) % self.slots.len();
                self.slots[index].clone()
            })
            .collect()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut buffer = RingBuffer::new(3);
    for value in [1, 2, 3] {
        let _ = buffer.try_push(value);
    }
    println!("full: {}, contents: {:?}", buffer.is_full(), buffer.to_vec());
    println!("try_push 4 rejected: {:?}", buffer.try_push(4));
    println!("overwrite with 4 displaces: {:?}", buffer.push_overwrite(4));
    println!("contents: {:?}", buffer.to_vec());
    println!("pop: {:?}, pop: {:?}", buffer.pop(), buffer.pop());
    println!("len after pops: {}", buffer.len());
}
