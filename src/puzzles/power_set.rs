//! 幂集（CCI 8.4）
//!
//! 求一个集合的全部子集。两种写法：
//!
//! - 递归版：每个元素要么进要么不进，子集数按2^n翻倍生长；
//! - 位掩码版：0..2^n的每个整数就是一张子集成员表，
//!   第i位为1表示第i个元素入选，免递归，顺序也稳定。
//!
//! 元素个数限制在63以内，掩码用u64装得下。实际枚举到
//! 二十几个元素就已经是亿级子集，再大本来也跑不动。

/// 幂集枚举
pub struct PowerSet;

impl PowerSet {
    /// 递归版
    pub fn recursive<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        match items.split_first() {
            None => vec![Vec::new()],
            Some((first, rest)) => {
                let without = Self::recursive(rest);
                let mut subsets = without.clone();
                for subset in without {
                    let mut with = Vec::with_capacity(subset.len() + 1);
                    with.push(first.clone());
                    with.extend(subset);
                    subsets.push(with);
                }
                subsets
            }
        }
    }

    /// 位掩码版，子集按掩码值升序排列
    ///
    /// # Panics
    ///
    /// 超过63个元素时panic，掩码会溢出u64。
    pub fn bitmask<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        assert!(items.len() < 64, "bitmask power set is limited to 63 items");
        let total = 1u64 << items.len();
        let mut subsets = Vec::with_capacity(total as usize);
        for mask in 0..total {
            let subset: Vec<T> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| item.clone())
                .collect();
            subsets.push(subset);
        }
        subsets
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("subsets of {{a, b, c}}:");
    for subset in PowerSet::bitmask(&['a', 'b', 'c']) {
        let rendered: String = subset.iter().collect();
        println!("  {{{}}}", rendered);
    }
    let n = 10;
    let items: Vec<u32> = (0..n).collect();
    println!("a {}-element set has {} subsets", n, PowerSet::recursive(&items).len());
}
