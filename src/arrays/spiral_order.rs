//! 螺旋矩阵（LeetCode 54 / 59）
//!
//! 按顺时针螺旋读出M×N矩阵，以及反过来把1..n²按螺旋填进
//! N×N矩阵。读和填共用同一套"四边界收缩"写法：
//! top/bottom/left/right四个边界，走完一条边收一格，
//! 单行单列剩余时靠两个中途break防止重复读取。

/// 螺旋读写
pub struct SpiralOrder;

impl SpiralOrder {
    /// 顺时针螺旋读出全部元素
    pub fn read(matrix: &[Vec<i32>]) -> Vec<i32> {
        let rows = matrix.len();
        if rows == 0 {
            return Vec::new();
        }
        let cols = matrix[0].len();
        if cols == 0 {
            return Vec::new();
        }

        let mut result = Vec::with_capacity(rows * cols);
        let (mut top, mut bottom) = (0usize, rows - 1);
        let (mut left, mut right) = (0usize, cols - 1);

        loop {
            for c in left..=right {
                result.push(matrix[top][c]);
            }
            if top == bottom {
                break;
            }
            top += 1;

            for r in top..=bottom {
                result.push(matrix[r][right]);
            }
            if left == right {
                break;
            }
            right -= 1;

            for c in (left..=right).rev() {
                result.push(matrix[bottom][c]);
            }
            if top == bottom {
                break;
            }
            bottom -= 1;

            for r in (top..=bottom).rev() {
                result.push(matrix[r][left]);
            }
            if left == right {
                break;
            }
            left += 1;
        }
        result
    }

    /// 把1..=n²按顺时针螺旋填进n×n矩阵
    pub fn generate(n: usize) -> Vec<Vec<i32>> {
        let mut matrix = vec![vec![0i32; n]; n];
        if n == 0 {
            return matrix;
        }
        let mut value = 1i32;
        let (mut top, mut bottom) = (0usize, n - 1);
        let (mut left, mut right) = (0usize, n - 1);

        loop {
            for c in left..=right {
                matrix[top][c] = value;
                value += 1;
            }
            if top == bottom {
                break;
            }
            top += 1;

            for r in top..=bottom {
                matrix[r][right] = value;
                value += 1;
            }
            if left == right {
                break;
            }
            right -= 1;

            for c in (left..=right).rev() {
                matrix[bottom][c] = value;
                value += 1;
            }
            if top == bottom {
                break;
            }
            bottom -= 1;

            for r in (top..=bottom).rev() {
                matrix[r][left] = value;
                value += 1;
            }
            if left == right {
                break;
            }
            left += 1;
        }
        matrix
    }
}

/// 打印示例输入输出
pub fn demo() {
    let matrix = vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9],
    ];
    println!("matrix 3x3 spiral: {:?}", SpiralOrder::read(&matrix));

    let generated = SpiralOrder::generate(4);
    println!("generated 4x4:");
    for row in &generated {
        println!("  {:?}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_by_three() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(
            SpiralOrder::read(&matrix),
            vec![1, 2, 3, 6, 9, 8, 7, 4, 5]
        );
    }

    #[test]
    fn test_rectangular() {
        let matrix = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
        assert_eq!(
            SpiralOrder::read(&matrix),
            vec![1, 2, 3, 4, 8, 12, 11, 10, 9, 5, 6, 7]
        );
    }

    #[test]
    fn test_single_row_and_column() {
        assert_eq!(SpiralOrder::read(&[vec![1, 2, 3]]), vec![1, 2, 3]);
        assert_eq!(
            SpiralOrder::read(&[vec![1], vec![2], vec![3]]),
            vec![1, 2, 3]
        );
        assert_eq!(SpiralOrder::read(&[vec![7]]), vec![7]);
    }

    #[test]
    fn test_empty() {
        assert!(SpiralOrder::read(&[]).is_empty());
        assert!(SpiralOrder::read(&[vec![]]).is_empty());
    }

    #[test]
    fn test_generate_three() {
        assert_eq!(
            SpiralOrder::generate(3),
            vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
        );
    }

    #[test]
    fn test_generate_then_read_is_sorted() {
        for n in 0..6 {
            let matrix = SpiralOrder::generate(n);
            let spiral = SpiralOrder::read(&matrix);
            let expected: Vec<i32> = (1..=(n * n) as i32).collect();
            assert_eq!(spiral, expected, "n = {n}");
        }
    }

    #[test]
    fn test_reads_every_element_once() {
        let matrix = vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8]];
        let mut spiral = SpiralOrder::read(&matrix);
        spiral.sort_unstable();
        assert_eq!(spiral, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
