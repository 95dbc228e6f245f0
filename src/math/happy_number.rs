//! 快乐数（LeetCode 202）
//!
//! 反复把数替换成各位数字的平方和，到1则"快乐"，否则
//! 陷入一个不含1的循环（事实上总会落进4→16→37→58→89→
//! 145→42→20→4这个圈）。
//!
//! 判环两种写法：
//! - HashSet记录见过的值，撞到重复即不快乐；
//! - Floyd快慢指针，O(1)空间，和链表判环同一个套路。

use std::collections::HashSet;

/// 快乐数判定
pub struct HappyNumber;

impl HappyNumber {
    /// 各位数字平方和
    pub fn digit_square_sum(n: u64) -> u64 {
        let mut remaining = n;
        let mut sum = 0;
        while remaining > 0 {
            let digit = remaining % 10;
            sum += digit * digit;
            remaining /= 10;
        }
        sum
    }

    /// HashSet判环
    pub fn is_happy_with_set(n: u64) -> bool {
        let mut seen = HashSet::new();
        let mut current = n;
        while current != 1 && seen.insert(current) {
            current = Self::digit_square_sum(current);
        }
        current == 1
    }

    /// Floyd快慢指针判环，O(1)空间
    pub fn is_happy_floyd(n: u64) -> bool {
        let mut slow = n;
        let mut fast = Self::digit_square_sum(n);
        while fast != 1 && slow != fast {
            slow = Self::digit_square_sum(slow);
            fast = Self::digit_square_sum(Self::digit_square_sum(fast));
        }
        fast == 1
    }

    /// limit以下（不含）的全部快乐数
    pub fn happy_below(limit: u64) -> Vec<u64> {
        (1..limit).filter(|&n| Self::is_happy_floyd(n)).collect()
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("19 is happy: {}", HappyNumber::is_happy_floyd(19));
    println!("2 is happy: {}", HappyNumber::is_happy_floyd(2));
    println!("happy numbers below 50: {:?}", HappyNumber::happy_below(50));
}
