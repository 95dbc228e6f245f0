//! 二分查找，二刷
//!
//! 不看第一版重写一遍，这次用`Result<usize, usize>`承载
//! 未命中时的插入点，跟标准库`slice::binary_search`的签名
//! 对齐。写完才想起第一版是`Option`，两种返回各有道理，
//! 都留着。

/// 命中返回`Ok(下标)`，未命中返回`Err(插入点)`
pub fn search<T: Ord>(values: &[T], target: &T) -> Result<usize, usize> {
    let mut low = 0usize;
    let mut high = values.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Ok(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }
    Err(low)
}

/// 利用插入点实现的有序插入
pub fn insert_sorted<T: Ord>(values: &mut Vec<T>, item: T) {
    let position = match search(values, &item) {
        Ok(found) => found,
        Err(slot) => slot,
    };
    values.insert(position, item);
}

/// 打印示例输入输出
pub fn demo() {
    let values = [2, 5, 8, 13, 21];
    println!("sorted: {:?}", values);
    println!("search 13: {:?}", search(&values, &13));
    println!("search 6:  {:?}", search(&values, &6));

    let mut growing = vec![10, 30];
    for item in [20, 5, 40] {
        insert_sorted(&mut growing, item);
    }
    println!("after inserts: {:?}", growing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_std_binary_search() {
        let values = [1, 4, 9, 16, 25, 36];
        for target in 0..40 {
            assert_eq!(
                search(&values, &target),
                values.binary_search(&target),
                "target = {target}"
            );
        }
    }

    #[test]
    fn test_insertion_point_on_miss() {
        let values = [10, 20, 30];
        assert_eq!(search(&values, &5), Err(0));
        assert_eq!(search(&values, &25), Err(2));
        assert_eq!(search(&values, &35), Err(3));
    }

    #[test]
    fn test_insert_sorted_keeps_order() {
        let mut values = Vec::new();
        for item in [7, 3, 9, 1, 5, 5] {
            insert_sorted(&mut values, item);
        }
        assert_eq!(values, vec![1, 3, 5, 5, 7, 9]);
    }

    #[test]
    fn test_empty_slice() {
        let empty: [i32; 0] = [];
        assert_eq!(search(&empty, &7), Err(0));
    }
}
