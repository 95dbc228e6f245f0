//! 单词接龙
//!
//! 每步只改一个字母，从起点词变换到终点词的最短步数
//! （LeetCode 127）。图是隐式的：节点是词表里的词，
//! 边连接相差一个字母的词对。
//!
//! 两个实现对比：
//! - 单向BFS：逐位枚举26个字母生成邻居，O(N * L * 26)；
//! - 双向BFS：从起点和终点同时扩展，每轮扩小的那侧，
//!   搜索空间按层数指数缩小，长链用例上快一个量级。
//!
//! 词表只含小写ASCII，长度不同的词永远不相邻。

use std::collections::{HashSet, VecDeque};

/// 单词接龙练习结构体
pub struct WordLadder;

impl WordLadder {
    /// 单向BFS：返回变换序列长度（含首尾），不可达返回0
    pub fn shortest_chain(begin: &str, end: &str, word_list: &[&str]) -> usize {
        let dictionary: HashSet<String> = word_list.iter().map(|w| w.to_string()).collect();
        if !dictionary.contains(end) {
            return 0;
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, usize)> = VecDeque::new();
        visited.insert(begin.to_string());
        queue.push_back((begin.to_string(), 1));

        while let Some((word, steps)) = queue.pop_front() {
            if word == end {
                return steps;
            }
            for next in Self::neighbors(&word, &dictionary) {
                if visited.insert(next.clone()) {
                    queue.push_back((next, steps + 1));
                }
            }
        }
        0
    }

    /// 双向BFS：两端交替扩展，相遇即得长度
    pub fn shortest_chain_bidirectional(begin: &str, end: &str, word_list: &[&str]) -> usize {
        let dictionary: HashSet<String> = word_list.iter().map(|w| w.to_string()).collect();
        if !dictionary.contains(end) {
            return 0;
        }
        if begin == end {
            return 1;
        }

        let mut frontier: HashSet<String> = HashSet::new();
        let mut other: HashSet<String> = HashSet::new();
        let mut visited: HashSet<String> = HashSet::new();
        frontier.insert(begin.to_string());
        other.insert(end.to_string());
        visited.insert(begin.to_string());
        visited.insert(end.to_string());

        let mut steps = 1;
        while !frontier.is_empty() && !other.is_empty() {
            // 总是扩展小的那侧
            if frontier.len() > other.len() {
                std::mem::swap(&mut frontier, &mut other);
            }
            steps += 1;

            let mut next_frontier: HashSet<String> = HashSet::new();
            for word in &frontier {
                for candidate in Self::neighbors(word, &dictionary) {
                    if other.contains(&candidate) {
                        return steps;
                    }
                    if visited.insert(candidate.clone()) {
                        next_frontier.insert(candidate);
                    }
                }
            }
            frontier = next_frontier;
        }
        0
    }

    /// 一条最短变换序列本身，不可达返回None
    pub fn shortest_path(begin: &str, end: &str, word_list: &[&str]) -> Option<Vec<String>> {
        let dictionary: HashSet<String> = word_list.iter().map(|w| w.to_string()).collect();
        if !dictionary.contains(end) {
            return None;
        }

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        visited.insert(begin.to_string());
        queue.push_back(vec![begin.to_string()]);

        while let Some(path) = queue.pop_front() {
            let word = path.last()?;
            if word == end {
                return Some(path);
            }
            for next in Self::neighbors(word, &dictionary) {
                if visited.insert(next.clone()) {
                    let mut extended = path.clone();
                    extended.push(next);
                    queue.push_back(extended);
                }
            }
        }
        None
    }

    /// 词表内与word相差一个字母的所有词
    fn neighbors(word: &str, dictionary: &HashSet<String>) -> Vec<String> {
        let mut found = Vec::new();
        let bytes = word.as_bytes();
        let mut candidate = bytes.to_vec();

        for position in 0..bytes.len() {
            let original = candidate[position];
            for letter in b'a'..=b'z' {
                if letter == original {
                    continue;
                }
                candidate[position] = letter;
                if let Ok(text) = std::str::from_utf8(&candidate) {
                    if dictionary.contains(text) {
                        found.push(text.to_string());
                    }
                }
            }
            candidate[position] = original;
        }
        found
    }
}

/// 打印示例输入输出
pub fn demo() {
    let words = ["hot", "dot", "dog", "lot", "log", "cog"];
    println!("word list: {:?}", words);
    println!(
        "hit -> cog chain length (bfs):           {}",
        WordLadder::shortest_chain("hit", "cog", &words)
    );
    println!(
        "hit -> cog chain length (bidirectional): {}",
        WordLadder::shortest_chain_bidirectional("hit", "cog", &words)
    );
    println!(
        "one shortest chain: {:?}",
        WordLadder::shortest_path("hit", "cog", &words)
    );
    println!(
        "hit -> tax chain length: {}",
        WordLadder::shortest_chain("hit", "tax", &words)
    );
}
