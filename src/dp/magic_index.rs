//! 魔法索引
//!
//! CCI 8.3：已排序数组里找满足 a[i] == i 的下标。
//! - 线性扫描 O(n)，对照组；
//! - 元素互异时二分 O(log n)：a[mid] < mid 说明左半段
//!   全部"追不上"下标，只用看右半段，反之亦然；
//! - 允许重复时二分失效，改成两侧收缩递归：左半段最多
//!   搜到 min(mid-1, a[mid])，右半段从 max(mid+1, a[mid]) 起。
//!
//! 找不到返回None。数组用i64，下标比较前转换。

/// 魔法索引练习结构体
pub struct MagicIndex;

impl MagicIndex {
    /// 线性扫描
    pub fn find_linear(values: &[i64]) -> Option<usize> {
        values
            .iter()
            .enumerate()
            .find(|(index, &value)| value == *index as i64)
            .map(|(index, _)| index)
    }

    /// 元素互异的二分版
    pub fn find_distinct(values: &[i64]) -> Option<usize> {
        let mut low = 0i64;
        let mut high = values.len() as i64 - 1;
        while low <= high {
            let mid = (low + high) / 2;
            let value = values[mid as usize];
            if value == mid {
                return Some(mid as usize);
            }
            if value < mid {
                low = mid + 1;
            } else {
                high = mid - 1;
            }
        }
        None
    }

    /// 允许重复的递归版
    pub fn find_with_duplicates(values: &[i64]) -> Option<usize> {
        if values.is_empty() {
            return None;
        }
        Self::search_range(values, 0, values.len() as i64 - 1)
    }

    fn search_range(values: &[i64], low: i64, high: i64) -> Option<usize> {
        if low > high {
            return None;
        }
        let mid = (low + high) / 2;
        let value = values[mid as usize];
        if value == mid {
            return Some(mid as usize);
        }

        // 左侧上界被a[mid]夹住
        let left_high = high.min(mid - 1).min(value);
        if let Some(found) = Self::search_range(values, low, left_high) {
            return Some(found);
        }
        let right_low = low.max(mid + 1).max(value);
        Self::search_range(values, right_low, high)
    }
}

/// 打印示例输入输出
pub fn demo() {
    let distinct = [-40, -20, -1, 1, 2, 3, 5, 7, 9, 12, 13];
    println!("distinct sorted: {:?}", distinct);
    println!("linear:  {:?}", MagicIndex::find_linear(&distinct));
    println!("binary:  {:?}", MagicIndex::find_distinct(&distinct));

    let duplicates = [-10, -5, 2, 2, 2, 3, 4, 7, 9, 12, 13];
    println!("with duplicates: {:?}", duplicates);
    println!(
        "two-sided: {:?}",
        MagicIndex::find_with_duplicates(&duplicates)
    );

    let none = [1, 2, 3, 4];
    println!("{:?} -> {:?}", none, MagicIndex::find_distinct(&none));
}
