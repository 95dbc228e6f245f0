//! 考拉兹序列（Rosetta Code，Project Euler 14）
//!
//! 从n出发，偶数减半、奇数变3n+1，猜想说总会落到1。
//! 序列长度按"含首尾的项数"计，13 → 40 → … → 1共10项。
//!
//! 找"limit以下谁的序列最长"有两档做法：
//! - 逐个裸算，链条有重复段全部白算一遍；
//! - 带HashMap备忘：链条一旦踩进算过的数就直接续上
//!   已知长度，再把整条新路径回填缓存。

use std::collections::HashMap;

/// 考拉兹问题
pub struct Collatz;

impl Collatz {
    /// 下一项
    pub fn step(n: u64) -> u64 {
        if n % 2 == 0 {
            n / 2
        } else {
            3 * n + 1
        }
    }

    /// 完整序列，含首尾；n为0时返回空
    pub fn sequence(n: u64) -> Vec<u64> {
        if n == 0 {
            return Vec::new();
        }
        let mut terms = vec![n];
        let mut current = n;
        while current != 1 {
            current = Self::step(current);
            terms.push(current);
        }
        terms
    }

    /// 序列项数，不物化整条序列
    pub fn sequence_length(n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let mut length = 1u64;
        let mut current = n;
        while current != 1 {
            current = Self::step(current);
            length += 1;
        }
        Some(length)
    }

    /// limit以下（不含）序列最长的起点，返回(起点, 项数)
    pub fn longest_below(limit: u64) -> Option<(u64, u64)> {
        let mut cache: HashMap<u64, u64> = HashMap::new();
        cache.insert(1, 1);
        let mut best: Option<(u64, u64)> = None;
        for start in 1..limit {
            let length = Self::cached_length(start, &mut cache);
            if best.map_or(true, |(_, b)| length > b) {
                best = Some((start, length));
            }
        }
        best
    }

    fn cached_length(n: u64, cache: &mut HashMap<u64, u64>) -> u64 {
        // 先顺着链走到第一个已知点，再倒着回填
        let mut path = Vec::new();
        let mut current = n;
        let mut known = loop {
            if let Some(&length) = cache.get(&current) {
                break length;
            }
            path.push(current);
            current = Self::step(current);
        };
        for &value in path.iter().rev() {
            known += 1;
            cache.insert(value, known);
        }
        known
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("sequence(13): {:?}", Collatz::sequence(13));
    println!("length(27): {:?}", Collatz::sequence_length(27));
    println!("longest below 10000: {:?}", Collatz::longest_below(10_000));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_of_thirteen() {
        assert_eq!(
            Collatz::sequence(13),
            vec![13, 40, 20, 10, 5, 16, 8, 4, 2, 1]
        );
    }

    #[test]
    fn test_trivial_starts() {
        assert_eq!(Collatz::sequence(1), vec![1]);
        assert_eq!(Collatz::sequence(2), vec![2, 1]);
        assert!(Collatz::sequence(0).is_empty());
        assert_eq!(Collatz::sequence_length(0), None);
        assert_eq!(Collatz::sequence_length(1), Some(1));
    }

    #[test]
    fn test_length_matches_sequence() {
        for n in 1..200u64 {
            assert_eq!(
                Collatz::sequence_length(n),
                Some(Collatz::sequence(n).len() as u64)
            );
        }
    }

    #[test]
    fn test_known_lengths() {
        assert_eq!(Collatz::sequence_length(13), Some(10));
        assert_eq!(Collatz::sequence_length(27), Some(112));
        assert_eq!(Collatz::sequence_length(97), Some(119));
    }

    #[test]
    fn test_longest_below() {
        assert_eq!(Collatz::longest_below(0), None);
        assert_eq!(Collatz::longest_below(2), Some((1, 1)));
        assert_eq!(Collatz::longest_below(30), Some((27, 112)));
        assert_eq!(Collatz::longest_below(100), Some((97, 119)));
    }

    #[test]
    fn test_cached_agrees_with_direct() {
        let mut cache = HashMap::new();
        cache.insert(1, 1);
        for n in 1..500u64 {
            assert_eq!(
                Collatz::cached_length(n, &mut cache),
                Collatz::sequence(n).len() as u64,
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_project_euler_fourteen_small() {
        // 10万以下的已知冠军
        assert_eq!(Collatz::longest_below(100_000), Some((77_031, 351)));
    }
}
