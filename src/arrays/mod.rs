//! 数组与矩阵题目
//!
//! 双指针、前缀和、原地标记这些数组套路的练习场。
//! 矩阵题统一用`Vec<Vec<i32>>`按行存储，区间题用
//! `(i64, i64)`闭区间元组。

pub mod ample_city;
pub mod boomerang_tuples;
pub mod majority_element;
pub mod max_profit;
pub mod merge_intervals;
pub mod missing_number;
pub mod product_except_self;
pub mod rotate_matrix;
pub mod spiral_order;
pub mod two_sum;
pub mod zero_matrix;

pub use ample_city::AmpleCity;
pub use boomerang_tuples::BoomerangTuples;
pub use majority_element::MajorityElement;
pub use max_profit::MaxProfit;
pub use merge_intervals::MergeIntervals;
pub use missing_number::MissingNumber;
pub use product_except_self::ProductExceptSelf;
pub use rotate_matrix::RotateMatrix;
pub use spiral_order::SpiralOrder;
pub use two_sum::TwoSum;
pub use zero_matrix::ZeroMatrix;

use crate::runner::{Category, Demo};

/// 本分类注册的全部题目
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "arrays/two-sum",
            Category::Arrays,
            "Index pair summing to target, brute force vs one-pass map",
            two_sum::demo,
        ),
        Demo::new(
            "arrays/ample-city",
            Category::Arrays,
            "Start of a completable circular fuel tour",
            ample_city::demo,
        ),
        Demo::new(
            "arrays/boomerang-tuples",
            Category::Arrays,
            "Ordered point triples with two equal distances",
            boomerang_tuples::demo,
        ),
        Demo::new(
            "arrays/rotate-matrix",
            Category::Arrays,
            "In-place 90-degree rotation of a square matrix",
            rotate_matrix::demo,
        ),
        Demo::new(
            "arrays/zero-matrix",
            Category::Arrays,
            "Zero out rows and columns containing a zero",
            zero_matrix::demo,
        ),
        Demo::new(
            "arrays/spiral-order",
            Category::Arrays,
            "Clockwise spiral read and spiral fill",
            spiral_order::demo,
        ),
        Demo::new(
            "arrays/max-profit",
            Category::Arrays,
            "Best stock trade, single and unlimited transactions",
            max_profit::demo,
        ),
        Demo::new(
            "arrays/merge-intervals",
            Category::Arrays,
            "Coalesce overlapping intervals, insert variant",
            merge_intervals::demo,
        ),
        Demo::new(
            "arrays/majority-element",
            Category::Arrays,
            "Element past half occurrences via Boyer-Moore voting",
            majority_element::demo,
        ),
        Demo::new(
            "arrays/missing-number",
            Category::Arrays,
            "Absent value of 0..=n by sum, xor and sorting",
            missing_number::demo,
        ),
        Demo::new(
            "arrays/product-except-self",
            Category::Arrays,
            "Prefix-suffix products without division",
            product_except_self::demo,
        ),
    ]
}
