//! 旋转矩阵（CCI 1.7，LeetCode 48）
//!
//! 把N×N矩阵原地顺时针转90度。两种原地做法：
//! - 逐层四向换：外圈往里一层层处理，每层里一组四个元素
//!   循环移位，一次暂存一个值；
//! - 先转置再翻转每行，两个动作各自一眼能看对，组合起来
//!   恰好是顺时针90度。逆时针则是转置后翻转每列。
//!
//! 非方阵转不回原形，入口直接assert掉。

/// N×N矩阵旋转
pub struct RotateMatrix;

impl RotateMatrix {
    /// 逐层四向换，原地顺时针90度
    ///
    /// # Panics
    ///
    /// 矩阵不是方阵时panic。
    pub fn rotate_layers(matrix: &mut [Vec<i32>]) {
        let n = matrix.len();
        assert!(
            matrix.iter().all(|row| row.len() == n),
            "rotate_layers requires a square matrix"
        );
        for layer in 0..n / 2 {
            let first = layer;
            let last = n - 1 - layer;
            for offset in 0..(last - first) {
                let top = matrix[first][first + offset];
                // 左列 -> 顶行
                matrix[first][first + offset] = matrix[last - offset][first];
                // 底行 -> 左列
                matrix[last - offset][first] = matrix[last][last - offset];
                // 右列 -> 底行
                matrix[last][last - offset] = matrix[first + offset][last];
                // 暂存的顶行 -> 右列
                matrix[first + offset][last] = top;
            }
        }
    }

    /// 转置加行翻转，原地顺时针90度
    ///
    /// # Panics
    ///
    /// 矩阵不是方阵时panic。
    pub fn rotate_transpose(matrix: &mut [Vec<i32>]) {
        let n = matrix.len();
        assert!(
            matrix.iter().all(|row| row.len() == n),
            "rotate_transpose requires a square matrix"
        );
        for row in 0..n {
            for col in (row + 1)..n {
                let tmp = matrix[row][col];
                matrix[row][col] = matrix[col][row];
                matrix[col][row] = tmp;
            }
        }
        for row in matrix.iter_mut() {
            row.reverse();
        }
    }

    /// 返回新矩阵的逆时针90度，输入不动
    pub fn rotated_counter_clockwise(matrix: &[Vec<i32>]) -> Vec<Vec<i32>> {
        let n = matrix.len();
        (0..n)
            .map(|row| (0..n).map(|col| matrix[col][n - 1 - row]).collect())
            .collect()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let mut matrix = vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9],
    ];
    println!("before:");
    for row in &matrix {
        println!("  {:?}", row);
    }
    RotateMatrix::rotate_layers(&mut matrix);
    println!("after clockwise 90:");
    for row in &matrix {
        println!("  {:?}", row);
    }
    let back = RotateMatrix::rotated_counter_clockwise(&matrix);
    println!("counter-clockwise restores: {}", back == vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9],
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<i32>> {
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
    }

    #[test]
    fn test_rotate_three_by_three() {
        let mut matrix = sample();
        RotateMatrix::rotate_layers(&mut matrix);
        assert_eq!(matrix, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_rotate_four_by_four() {
        let mut matrix = vec![
            vec![1, 2, 3, 4],
            vec![5, 6, 7, 8],
            vec![9, 10, 11, 12],
            vec![13, 14, 15, 16],
        ];
        RotateMatrix::rotate_layers(&mut matrix);
        assert_eq!(
            matrix,
            vec![
                vec![13, 9, 5, 1],
                vec![14, 10, 6, 2],
                vec![15, 11, 7, 3],
                vec![16, 12, 8, 4],
            ]
        );
    }

    #[test]
    fn test_both_methods_agree() {
        let mut layered = sample();
        let mut transposed = sample();
        RotateMatrix::rotate_layers(&mut layered);
        RotateMatrix::rotate_transpose(&mut transposed);
        assert_eq!(layered, transposed);
    }

    #[test]
    fn test_four_rotations_restore() {
        let mut matrix = sample();
        for _ in 0..4 {
            RotateMatrix::rotate_layers(&mut matrix);
        }
        assert_eq!(matrix, sample());
    }

    #[test]
    fn test_counter_clockwise_inverts_clockwise() {
        let mut matrix = sample();
        RotateMatrix::rotate_transpose(&mut matrix);
        assert_eq!(RotateMatrix::rotated_counter_clockwise(&matrix), sample());
    }

    #[test]
    fn test_trivial_sizes() {
        let mut empty: Vec<Vec<i32>> = vec![];
        RotateMatrix::rotate_layers(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![vec![42]];
        RotateMatrix::rotate_layers(&mut single);
        assert_eq!(single, vec![vec![42]]);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_rectangular_panics() {
        let mut matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
        RotateMatrix::rotate_layers(&mut matrix);
    }
}
