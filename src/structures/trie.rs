//! 前缀树（Trie）
//!
//! 子节点用`HashMap<char, TrieNode>`而不是定长数组，换来对
//! 任意Unicode字符的支持，代价是每层一次哈希查找。
//!
//! 除了insert/contains/starts_with三件套，补了一个
//! `words_with_prefix`做补全：走到前缀末端后DFS收集，
//! 结果按字典序返回，方便断言。
//!
//! 真正的重头戏是`find_in`：把一批模式词插进树里后在一段
//! 文本里找出全部出现位置。做法是在文本的每个字符处锚定
//! 树根往后走，走到哪个词尾就报一处命中，所以重叠命中和
//! 互为前缀的模式都不会漏。单模式KMP在strings分类里，
//! 这里是它的多模式亲戚。

use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

/// 练习用前缀树
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// 插入一个词，重复插入不重复计数
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_end {
            node.is_end = true;
            self.word_count += 1;
        }
    }

    /// 是否存在完整的词
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.is_end)
    }

    /// 是否有词以此为前缀（含等于前缀的词）
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// 已插入的不同词数
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// 补全：所有以prefix开头的词，字典序
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.walk(prefix) {
            Self::collect(node, &mut prefix.to_string(), &mut words);
        }
        words.sort();
        words
    }

    /// 删除一个词，存在则返回true
    ///
    /// 只摘掉is_end标记，不回收空链。对学习集合来说够用，
    /// 回收版需要记录路径再自底向上剪。
    pub fn remove(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            match node.children.get_mut(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if node.is_end {
            node.is_end = false;
            self.word_count -= 1;
            true
        } else {
            false
        }
    }

    /// 多模式文本搜索：树里每个词在text中的全部出现
    ///
    /// 返回`(起始字符下标, 命中的词)`，按起始位置再按词长排序。
    /// 同一位置上互为前缀的词各报各的，重叠出现也逐一报告；
    /// 空串即使插入过也不参与匹配。
    pub fn find_in(&self, text: &str) -> Vec<(usize, String)> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        for start in 0..chars.len() {
            let mut node = &self.root;
            for (length, &ch) in chars[start..].iter().enumerate() {
                match node.children.get(&ch) {
                    Some(child) => node = child,
                    None => break,
                }
                if node.is_end {
                    let word: String = chars[start..=start + length].iter().collect();
                    matches.push((start, word));
                }
            }
        }
        matches
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn collect(node: &TrieNode, buffer: &mut String, words: &mut Vec<String>) {
        if node.is_end {
            words.push(buffer.clone());
        }
        for (&ch, child) in &node.children {
            buffer.push(ch);
            Self::collect(child, buffer, words);
            buffer.pop();
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut trie = Trie::new();
    for word in ["car", "card", "care", "cat", "dog"] {
        trie.insert(word);
    }
    println!("words: {}", trie.len());
    println!("contains \"car\": {}", trie.contains("car"));
    println!("contains \"ca\": {}", trie.contains("ca"));
    println!("starts_with \"ca\": {}", trie.starts_with("ca"));
    println!("complete \"car\": {:?}", trie.words_with_prefix("car"));
    trie.remove("card");
    println!("after remove: {:?}", trie.words_with_prefix("car"));

    let text = "the cat scattered the cards";
    println!("search {:?} in {:?}:", trie.words_with_prefix(""), text);
    for (position, word) in trie.find_in(text) {
        println!("  {:>2}: {}", position, word);
    }
}
