//! 除自身以外的乘积（LeetCode 238）
//!
//! 输出数组第i位等于输入中除下标i外所有数的乘积，题目
//! 明确不许用除法。标准做法是前缀积×后缀积：
//! - 两个辅助数组版，思路直白；
//! - 单输出数组两趟版：第一趟从左写前缀积，第二趟从右
//!   用一个滚动变量乘后缀积，空间降到O(1)（不算输出）。
//!
//! 另附被题目禁止的除法版作对照：总乘积除以自身，
//! 零的个数要单独分类，正好说明除法版并不比正经做法简单。

/// 除自身乘积问题
pub struct ProductExceptSelf;

impl ProductExceptSelf {
    /// 前缀后缀双数组
    pub fn with_two_arrays(values: &[i64]) -> Vec<i64> {
        let n = values.len();
        let mut prefix = vec![1i64; n];
        let mut suffix = vec![1i64; n];
        for i in 1..n {
            prefix[i] = prefix[i - 1] * values[i - 1];
        }
        for i in (0..n.saturating_sub(1)).rev() {
            suffix[i] = suffix[i + 1] * values[i + 1];
        }
        (0..n).map(|i| prefix[i] * suffix[i]).collect()
    }

    /// 单输出数组两趟
    pub fn in_two_passes(values: &[i64]) -> Vec<i64> {
        let n = values.len();
        let mut result = vec![1i64; n];
        for i in 1..n {
            result[i] = result[i - 1] * values[i - 1];
        }
        let mut suffix = 1i64;
        for i in (0..n).rev() {
            result[i] *= suffix;
            suffix *= values[i];
        }
        result
    }

    /// 除法版对照，零要分三种情况
    pub fn with_division(values: &[i64]) -> Vec<i64> {
        let zeros = values.iter().filter(|&&v| v == 0).count();
        match zeros {
            0 => {
                let total: i64 = values.iter().product();
                values.iter().map(|&v| total / v).collect()
            }
            1 => {
                let total_without_zero: i64 =
                    values.iter().filter(|&&v| v != 0).product();
                values
                    .iter()
                    .map(|&v| if v == 0 { total_without_zero } else { 0 })
                    .collect()
            }
            _ => vec![0; values.len()],
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let values = [1, 2, 3, 4];
    println!("values: {:?}", values);
    println!("products: {:?}", ProductExceptSelf::in_two_passes(&values));

    let with_zero = [-1, 1, 0, -3, 3];
    println!(
        "with zero {:?}: {:?}",
        with_zero,
        ProductExceptSelf::in_two_passes(&with_zero)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        assert_eq!(
            ProductExceptSelf::in_two_passes(&[1, 2, 3, 4]),
            vec![24, 12, 8, 6]
        );
        assert_eq!(
            ProductExceptSelf::with_two_arrays(&[1, 2, 3, 4]),
            vec![24, 12, 8, 6]
        );
    }

    #[test]
    fn test_single_zero() {
        assert_eq!(
            ProductExceptSelf::in_two_passes(&[-1, 1, 0, -3, 3]),
            vec![0, 0, 9, 0, 0]
        );
    }

    #[test]
    fn test_two_zeros_all_zero() {
        assert_eq!(
            ProductExceptSelf::in_two_passes(&[0, 4, 0]),
            vec![0, 0, 0]
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(
            ProductExceptSelf::in_two_passes(&[-2, 3, -4]),
            vec![-12, 8, -6]
        );
    }

    #[test]
    fn test_tiny_inputs() {
        assert!(ProductExceptSelf::in_two_passes(&[]).is_empty());
        assert_eq!(ProductExceptSelf::in_two_passes(&[5]), vec![1]);
        assert_eq!(ProductExceptSelf::in_two_passes(&[2, 3]), vec![3, 2]);
    }

    #[test]
    fn test_all_methods_agree() {
        let runs: [&[i64]; 5] = [
            &[1, 2, 3, 4],
            &[-1, 1, 0, -3, 3],
            &[0, 0, 2],
            &[5, -5],
            &[7, 1, 1, 7],
        ];
        for values in runs {
            let two_arrays = ProductExceptSelf::with_two_arrays(values);
            let two_passes = ProductExceptSelf::in_two_passes(values);
            let division = ProductExceptSelf::with_division(values);
            assert_eq!(two_arrays, two_passes, "values {values:?}");
            assert_eq!(two_arrays, division, "values {values:?}");
        }
    }
}
