//! 单词拆分
//!
//! LeetCode 139/140：字符串能否被词典里的词拼出来。
//! - 判定版：breakable[i]表示前i个字节可拼，双重循环 O(n^2)
//!   次切片查询，词典放HashSet；
//! - 枚举版：记忆化DFS列出所有拆法，注意结果规模可能指数，
//!   只适合演示输入；
//! - 剪枝：先收集词典里的词长集合，内层只试这些长度，
//!   词典词都很短时明显省事。
//!
//! 按字节切片，输入限定ASCII的测试词典即可。

use std::collections::{HashMap, HashSet};

/// 单词拆分练习结构体
pub struct WordBreak;

impl WordBreak {
    /// 能否拆分
    pub fn can_break(text: &str, words: &[&str]) -> bool {
        let dictionary: HashSet<&str> = words.iter().copied().collect();
        let lengths: HashSet<usize> = words.iter().map(|w| w.len()).filter(|&l| l > 0).collect();

        let mut breakable = vec![false; text.len() + 1];
        breakable[0] = true;
        for end in 1..=text.len() {
            for &length in &lengths {
                if length > end {
                    continue;
                }
                if breakable[end - length] && dictionary.contains(&text[end - length..end]) {
                    breakable[end] = true;
                    break;
                }
            }
        }
        breakable[text.len()]
    }

    /// 所有拆分方案，词之间用空格连接
    pub fn all_breaks(text: &str, words: &[&str]) -> Vec<String> {
        let dictionary: HashSet<&str> = words.iter().copied().collect();
        let mut memo: HashMap<usize, Vec<String>> = HashMap::new();
        Self::expand(text, 0, &dictionary, &mut memo)
    }

    /// 从start开始的所有拆法
    fn expand(
        text: &str,
        start: usize,
        dictionary: &HashSet<&str>,
        memo: &mut HashMap<usize, Vec<String>>,
    ) -> Vec<String> {
        if start == text.len() {
            return vec![String::new()];
        }
        if let Some(cached) = memo.get(&start) {
            return cached.clone();
        }

        let mut results = Vec::new();
        for end in start + 1..=text.len() {
            let word = &text[start..end];
            if !dictionary.contains(word) {
                continue;
            }
            for rest in Self::expand(text, end, dictionary, memo) {
                if rest.is_empty() {
                    results.push(word.to_string());
                } else {
                    results.push(format!("{} {}", word, rest));
                }
            }
        }
        memo.insert(start, results.clone());
        results
    }
}

/// 打印示例输入输出
pub fn demo() {
    let words = ["cat", "cats", "and", "sand", "dog"];
    println!("dictionary: {:?}", words);
    for text in ["catsanddog", "catsandog"] {
        println!(
            "{:?} breakable: {}",
            text,
            WordBreak::can_break(text, &words)
        );
    }
    let mut sentences = WordBreak::all_breaks("catsanddog", &words);
    sentences.sort();
    println!("all breaks of catsanddog: {:?}", sentences);
}
