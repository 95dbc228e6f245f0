//! LRU缓存（LeetCode 146）
//!
//! 定容缓存，满了淘汰最久未用的键。两种实现：
//! - `LruCache`：HashMap存值 + VecDeque记访问顺序，
//!   front最旧back最新。touch一次要在队列里线性找位置，
//!   O(n)，但结构一眼能看懂；
//! - `TickLruCache`：每个条目带一个单调递增的时间戳，
//!   touch是O(1)改戳，淘汰时O(n)扫最小戳。
//!
//! 两种都不是面试满分答案，满分是哈希表挂双向链表全O(1)，
//! 安全Rust里那要么上`unsafe`要么用下标模拟指针，
//! 留给有精力的第二遍。

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// 访问队列版LRU
pub struct LruCache<K, V> {
    capacity: usize,
    cache: HashMap<K, V>,
    access_order: VecDeque<K>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// capacity为0时按1处理
    pub fn new(capacity: usize) -> Self {
        LruCache {
            capacity: capacity.max(1),
            cache: HashMap::new(),
            access_order: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// 读并touch
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.cache.contains_key(key) {
            self.move_to_back(key);
        }
        self.cache.get(key)
    }

    /// 只读不touch
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.cache.get(key)
    }

    pub fn put(&mut self, key: K, value: V) {
        if self.cache.contains_key(&key) {
            // 覆盖只更新值和位置，队列里不能出现重复键
            self.move_to_back(&key);
            self.cache.insert(key, value);
            return;
        }
        self.evict_if_needed();
        self.cache.insert(key.clone(), value);
        self.access_order.push_back(key);
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.cache.remove(key);
        if value.is_some() {
            self.access_order.retain(|k| k != key);
        }
        value
    }

    /// 下一个会被淘汰的键
    pub fn least_recent(&self) -> Option<&K> {
        self.access_order.front()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.access_order.clear();
    }

    fn move_to_back(&mut self, key: &K) {
        if let Some(position) = self.access_order.iter().position(|k| k == key) {
            if let Some(found) = self.access_order.remove(position) {
                self.access_order.push_back(found);
            }
        }
    }

    fn evict_if_needed(&mut self) {
        if self.cache.len() >= self.capacity {
            if let Some(oldest) = self.access_order.pop_front() {
                self.cache.remove(&oldest);
            }
        }
    }
}

/// 时间戳版LRU，touch O(1)，淘汰O(n)
pub struct TickLruCache<K, V> {
    capacity: usize,
    entries: HashMap<K, (V, u64)>,
    clock: u64,
}

impl<K, V> TickLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        TickLruCache {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            clock: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.clock += 1;
        let tick = self.clock;
        self.entries.get_mut(key).map(|entry| {
            entry.1 = tick;
            &entry.0
        })
    }

    pub fn put(&mut self, key: K, value: V) {
        self.clock += 1;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, (_, tick))| *tick)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, (value, self.clock));
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut cache = LruCache::new(2);
    cache.put("a", 1);
    cache.put("b", 2);
    println!("get a: {:?}", cache.get(&"a"));
    cache.put("c", 3);
    println!("after put c (evicts b): get b = {:?}", cache.get(&"b"));
    let got_a = cache.get(&"a").copied();
    let got_c = cache.get(&"c").copied();
    println!("get a: {:?}, get c: {:?}", got_a, got_c);
    println!("next to evict: {:?}", cache.least_recent());

    let mut ticked = TickLruCache::new(2);
    ticked.put(1, "one");
    ticked.put(2, "two");
    ticked.get(&1);
    ticked.put(3, "three");
    println!("tick version: 2 evicted -> {:?}", ticked.get(&2));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_least_recent() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        cache.put(3, "three");
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(&"two"));
        assert_eq!(cache.get(&3), Some(&"three"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_refreshes_order() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        cache.get(&1);
        cache.put(3, "three");
        // 2成了最旧的，被挤掉的是它
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&"one"));
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let mut cache = LruCache::new(2);
        cache.put("k", 1);
        cache.put("k", 2);
        cache.put("other", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"k"), Some(&2));
        // 覆盖算一次touch，之后put other，最旧仍是k
        assert_eq!(cache.least_recent(), Some(&"k"));
    }

    #[test]
    fn test_peek_does_not_touch() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        cache.put(2, "two");
        cache.peek(&1);
        cache.put(3, "three");
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_remove() {
        let mut cache = LruCache::new(2);
        cache.put(1, "one");
        assert_eq!(cache.remove(&1), Some("one"));
        assert_eq!(cache.remove(&1), None);
        assert!(cache.is_empty());
        assert_eq!(cache.least_recent(), None);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut cache = LruCache::new(0);
        cache.put(1, "one");
        assert_eq!(cache.get(&1), Some(&"one"));
        cache.put(2, "two");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_tick_version_agrees() {
        let mut deque_version = LruCache::new(3);
        let mut tick_version = TickLruCache::new(3);
        let operations: [(char, i32); 8] = [
            ('p', 1),
            ('p', 2),
            ('p', 3),
            ('g', 1),
            ('p', 4),
            ('g', 2),
            ('p', 5),
            ('g', 3),
        ];
        for (op, key) in operations {
            match op {
                'p' => {
                    deque_version.put(key, key * 10);
                    tick_version.put(key, key * 10);
                }
                _ => {
                    let a = deque_version.get(&key).copied();
                    let b = tick_version.get(&key).copied();
                    assert_eq!(a, b, "divergence at get({key})");
                }
            }
        }
        assert_eq!(deque_version.len(), tick_version.len());
    }
}
