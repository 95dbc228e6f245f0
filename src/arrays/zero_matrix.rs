//! 零矩阵（CCI 1.8，LeetCode 73）
//!
//! M×N矩阵里凡是出现0的位置，把它整行整列都置0。
//! 不能边扫边改，否则新写的0会传染出更多行列。
//!
//! - 标记集合版：第一遍收集所有含0的行号列号，第二遍统一清，
//!   额外空间O(m + n)；
//! - 原地版：借用第0行和第0列自己当标记位，额外空间O(1)，
//!   代价是要先记下首行首列本来有没有0，收尾单独处理。

use std::collections::HashSet;

/// 零矩阵问题
pub struct ZeroMatrix;

impl ZeroMatrix {
    /// 标记集合版，空间O(m + n)
    pub fn clear_with_sets(matrix: &mut [Vec<i32>]) {
        let mut zero_rows = HashSet::new();
        let mut zero_cols = HashSet::new();
        for (r, row) in matrix.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    zero_rows.insert(r);
                    zero_cols.insert(c);
                }
            }
        }
        for (r, row) in matrix.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                if zero_rows.contains(&r) || zero_cols.contains(&c) {
                    *value = 0;
                }
            }
        }
    }

    /// 首行首列做标记位，空间O(1)
    pub fn clear_in_place(matrix: &mut [Vec<i32>]) {
        let rows = matrix.len();
        if rows == 0 {
            return;
        }
        let cols = matrix[0].len();
        if cols == 0 {
            return;
        }

        let first_row_has_zero = matrix[0].iter().any(|&v| v == 0);
        let first_col_has_zero = matrix.iter().any(|row| row[0] == 0);

        // 内部的0投影到首行首列
        for r in 1..rows {
            for c in 1..cols {
                if matrix[r][c] == 0 {
                    matrix[r][0] = 0;
                    matrix[0][c] = 0;
                }
            }
        }

        // 按标记清内部
        for r in 1..rows {
            for c in 1..cols {
                if matrix[r][0] == 0 || matrix[0][c] == 0 {
                    matrix[r][c] = 0;
                }
            }
        }

        if first_row_has_zero {
            for value in matrix[0].iter_mut() {
                *value = 0;
            }
        }
        if first_col_has_zero {
            for row in matrix.iter_mut() {
                row[0] = 0;
            }
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut matrix = vec![
        vec![1, 1, 1],
        vec![1, 0, 1],
        vec![1, 1, 1],
    ];
    println!("before:");
    for row in &matrix {
        println!("  {:?}", row);
    }
    ZeroMatrix::clear_in_place(&mut matrix);
    println!("after:");
    for row in &matrix {
        println!("  {:?}", row);
    }
}
