//! 回旋镖三元组（LeetCode 447）
//!
//! 平面点集里的"回旋镖"(boomerang tuple)是有序三元组
//! (p, q, r)，满足|pq| = |pr|，即q和r到锚点p等距。
//! 同一组{q, r}因为有序算两个：(p,q,r)和(p,r,q)。
//!
//! 距离比较全程用平方距离，整数运算没有浮点相等的坑。
//! 做法：
//! - 三重循环数所有有序组合，O(n³)；
//! - 以每个点为锚，按平方距离分桶，桶里c个点贡献c*(c-1)
//!   个有序对，O(n²)。

use std::collections::HashMap;

/// 平面整点
pub type Point = (i64, i64);

/// 回旋镖计数
pub struct BoomerangTuples;

impl BoomerangTuples {
    /// 枚举全部有序三元组，O(n³)
    pub fn count_brute_force(points: &[Point]) -> u64 {
        let n = points.len();
        let mut count = 0;
        for p in 0..n {
            for q in 0..n {
                if q == p {
                    continue;
                }
                for r in 0..n {
                    if r == p || r == q {
                        continue;
                    }
                    if Self::squared_distance(points[p], points[q])
                        == Self::squared_distance(points[p], points[r])
                    {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// 按锚点分桶，O(n²)
    pub fn count(points: &[Point]) -> u64 {
        let mut total = 0u64;
        for &anchor in points {
            let mut buckets: HashMap<i64, u64> = HashMap::new();
            for &other in points {
                if other != anchor {
                    *buckets
                        .entry(Self::squared_distance(anchor, other))
                        .or_insert(0) += 1;
                }
            }
            for &size in buckets.values() {
                total += size * size.saturating_sub(1);
            }
        }
        total
    }

    fn squared_distance(a: Point, b: Point) -> i64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        dx * dx + dy * dy
    }
}

/// 打印示例输入输出
pub fn demo() {
    let points = [(0, 0), (1, 0), (2, 0)];
    println!("points: {:?}", points);
    println!("boomerangs: {}", BoomerangTuples::count(&points));

    let square = [(0, 0), (1, 0), (0, 1), (1, 1)];
    println!("unit square: {:?}", square);
    println!("boomerangs: {}", BoomerangTuples::count(&square));
}
