//! 约瑟夫问题（Rosetta Code）
//!
//! n个人围成一圈，从0号开始报数，每数到第k个就出局，
//! 求最后的幸存者。两种解法：
//!
//! - 队列模拟：`VecDeque`转圈弹出，顺便记录完整的出局
//!   顺序，O(nk)；
//! - 递推：f(1) = 0，f(n) = (f(n-1) + k) mod n，只要幸存者
//!   编号时O(n)就够了，空间O(1)。

use std::collections::VecDeque;

/// 约瑟夫圈
pub struct Josephus;

impl Josephus {
    /// 队列模拟，返回出局顺序，最后一个元素是幸存者
    ///
    /// `count`或`step`为0时返回空序列。
    pub fn elimination_order(count: usize, step: usize) -> Vec<usize> {
        if count == 0 || step == 0 {
            return Vec::new();
        }
        let mut circle: VecDeque<usize> = (0..count).collect();
        let mut order = Vec::with_capacity(count);
        while let Some(&front) = circle.front() {
            if circle.len() == 1 {
                order.push(front);
                break;
            }
            // 报数就是把前step-1个人转到队尾
            for _ in 0..step - 1 {
                if let Some(passed) = circle.pop_front() {
                    circle.push_back(passed);
                }
            }
            if let Some(eliminated) = circle.pop_front() {
                order.push(eliminated);
            }
        }
        order
    }

    /// 递推版，只算幸存者编号
    pub fn survivor(count: usize, step: usize) -> Option<usize> {
        if count == 0 || step == 0 {
            return None;
        }
        let mut position = 0usize;
        for ring in 2..=count {
            position = (position + step) % ring;
        }
        Some(position)
    }
}

/// 打印示例输入输出
pub fn demo() {
    let order = Josephus::elimination_order(7, 3);
    println!("7 people, every 3rd eliminated: {:?}", order);
    println!("survivor: {:?}", order.last());
    // 历史上的41人每3个一杀
    println!("Josephus himself (n=41, k=3) stood at {:?}", Josephus::survivor(41, 3));
    for (n, k) in [(5usize, 2usize), (10, 1), (100, 7)] {
        println!("n={:<4} k={:<2} survivor={:?}", n, k, Josephus::survivor(n, k));
    }
}
