//! 缺失的数字（LeetCode 268）
//!
//! 0..=n共n+1个数里拿走一个，给定剩下n个（无序、不重复），
//! 找出缺的那个。三种做法：
//! - 高斯求和：n(n+1)/2减去实际和，加法会不会溢出取决于
//!   数值域，这里用u64装得下；
//! - 异或：把0..=n和数组全部异或在一起，成对的抵消，
//!   剩下的就是缺失值，完全不怕溢出；
//! - 排序扫描：第一个"值不等于下标"的位置即答案。

/// 缺失数字问题
pub struct MissingNumber;

impl MissingNumber {
    /// 高斯求和
    pub fn find_by_sum(values: &[u64]) -> u64 {
        let n = values.len() as u64;
        let expected = n * (n + 1) / 2;
        let actual: u64 = values.iter().sum();
        expected - actual
    }

    /// 全员异或
    pub fn find_by_xor(values: &[u64]) -> u64 {
        let mut acc = 0u64;
        for (index, &value) in values.iter().enumerate() {
            acc ^= index as u64;
            acc ^= value;
        }
        acc ^ values.len() as u64
    }

    /// 排序后找第一个错位
    pub fn find_by_sorting(values: &[u64]) -> u64 {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        for (index, &value) in sorted.iter().enumerate() {
            if value != index as u64 {
                return index as u64;
            }
        }
        sorted.len() as u64
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [3, 0, 1];
    println!("values: {:?} -> missing {}", values, MissingNumber::find_by_xor(&values));

    let values = [9, 6, 4, 2, 3, 5, 7, 0, 1];
    println!("values: {:?} -> missing {}", values, MissingNumber::find_by_sum(&values));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_examples() {
        assert_eq!(MissingNumber::find_by_sum(&[3, 0, 1]), 2);
        assert_eq!(MissingNumber::find_by_xor(&[3, 0, 1]), 2);
        assert_eq!(MissingNumber::find_by_sorting(&[3, 0, 1]), 2);

        assert_eq!(MissingNumber::find_by_xor(&[9, 6, 4, 2, 3, 5, 7, 0, 1]), 8);
    }

    #[test]
    fn test_missing_zero() {
        assert_eq!(MissingNumber::find_by_sum(&[1, 2, 3]), 0);
        assert_eq!(MissingNumber::find_by_xor(&[1, 2, 3]), 0);
        assert_eq!(MissingNumber::find_by_sorting(&[1, 2, 3]), 0);
    }

    #[test]
    fn test_missing_last() {
        assert_eq!(MissingNumber::find_by_sum(&[0, 1, 2]), 3);
        assert_eq!(MissingNumber::find_by_xor(&[0, 1, 2]), 3);
        assert_eq!(MissingNumber::find_by_sorting(&[0, 1, 2]), 3);
    }

    #[test]
    fn test_empty_means_zero_missing() {
        // n=0：完整集合是{0}，缺的只能是0
        assert_eq!(MissingNumber::find_by_sum(&[]), 0);
        assert_eq!(MissingNumber::find_by_xor(&[]), 0);
        assert_eq!(MissingNumber::find_by_sorting(&[]), 0);
    }

    #[test]
    fn test_all_methods_agree_every_position() {
        let n = 12u64;
        for missing in 0..=n {
            let values: Vec<u64> = (0..=n).filter(|&v| v != missing).collect();
            assert_eq!(MissingNumber::find_by_sum(&values), missing);
            assert_eq!(MissingNumber::find_by_xor(&values), missing);
            assert_eq!(MissingNumber::find_by_sorting(&values), missing);
        }
    }
}
