//! 哈希表
//!
//! 链地址法：桶数组里每个桶是一个`Vec<(K, V)>`。冲突直接
//! 线性扫桶，负载因子超过0.75就把桶数翻倍重排。
//!
//! 哈希用标准库的`DefaultHasher`，不自己发明散列函数。
//! 生产代码当然用`HashMap`，这份实现是为了把"桶、冲突、
//! 扩容搬迁"三个词变成能手写的代码。

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const INITIAL_BUCKETS: usize = 8;
const MAX_LOAD_NUMERATOR: usize = 3;
const MAX_LOAD_DENOMINATOR: usize = 4;

/// 链地址哈希表
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    entries: usize,
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn new() -> Self {
        HashTable {
            buckets: (0..INITIAL_BUCKETS).map(|_| Vec::new()).collect(),
            entries: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// 插入或覆盖，覆盖时返回旧值
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if (self.entries + 1) * MAX_LOAD_DENOMINATOR > self.buckets.len() * MAX_LOAD_NUMERATOR {
            self.grow();
        }
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }
        bucket.push((key, value));
        self.entries += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| &entry.0 == key)
            .map(|entry| &entry.1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// 删除，返回被删的值
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|entry| &entry.0 == key)?;
        self.entries -= 1;
        Some(bucket.swap_remove(position).1)
    }

    /// 当前桶数，测试扩容用
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    /// 桶数翻倍，所有条目按新桶数重新落位
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_count).map(|_| Vec::new()).collect(),
        );
        for bucket in old_buckets {
            for (key, value) in bucket {
                let index = self.bucket_index(&key);
                self.buckets[index].push((key, value));
            }
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut table = HashTable::new();
    for (name, score) in [("alice", 90), ("bob", 82), ("carol", 95)] {
        table.insert(name, score);
    }
    println!("bob -> {:?}", table.get(&"bob"));
    println!("old alice: {:?}", table.insert("alice", 99));
    println!("alice -> {:?}", table.get(&"alice"));
    println!("remove carol: {:?}", table.remove(&"carol"));
    println!("entries: {}, buckets: {}", table.len(), table.bucket_count());
}
