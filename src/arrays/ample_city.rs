//! 富余城市（EPI 18.6，LeetCode 134加油站）
//!
//! 环形公路上有n座城市，城市i可加油gas[i]，开到下一座
//! 要烧cost[i]。"富余城市"(ample city)指从它出发、油箱从零
//! 开始能绕整整一圈回到原地的城市。
//!
//! 总油量少于总油耗时显然无解；反之至少存在一座，而且
//! 油量净变化的前缀和取到最小值的那座城市的下一座就是答案，
//! 因为从那里出发相当于把最亏的一段挪到了旅程末尾。
//!
//! 三种做法：逐城模拟O(n²)、最小前缀O(n)、贪心重置O(n)。

/// 富余城市问题
pub struct AmpleCity;

impl AmpleCity {
    /// 从每座城市模拟一圈，O(n²)
    pub fn find_by_simulation(gas: &[i64], cost: &[i64]) -> Option<usize> {
        let n = gas.len();
        'starts: for start in 0..n {
            let mut tank = 0i64;
            for step in 0..n {
                let city = (start + step) % n;
                tank += gas[city] - cost[city];
                if tank < 0 {
                    continue 'starts;
                }
            }
            return Some(start);
        }
        None
    }

    /// 最小前缀法，O(n)
    ///
    /// 令net[i] = gas[i] - cost[i]。若Σnet < 0无解；否则设
    /// 前缀和在位置m处取最小，则m+1即富余城市。
    pub fn find_by_min_prefix(gas: &[i64], cost: &[i64]) -> Option<usize> {
        if gas.is_empty() || gas.len() != cost.len() {
            return None;
        }
        let mut prefix = 0i64;
        let mut min_prefix = i64::MAX;
        let mut min_at = 0;
        for (city, (&g, &c)) in gas.iter().zip(cost.iter()).enumerate() {
            prefix += g - c;
            if prefix < min_prefix {
                min_prefix = prefix;
                min_at = city;
            }
        }
        if prefix < 0 {
            None
        } else {
            Some((min_at + 1) % gas.len())
        }
    }

    /// 贪心重置法，O(n)
    ///
    /// 油箱见负就把起点改到下一座城。被放弃的起点到此处
    /// 之间任何一座都不可能是答案，所以一遍就够。
    pub fn find_by_reset(gas: &[i64], cost: &[i64]) -> Option<usize> {
        if gas.is_empty() || gas.len() != cost.len() {
            return None;
        }
        let mut total = 0i64;
        let mut tank = 0i64;
        let mut start = 0;
        for city in 0..gas.len() {
            let net = gas[city] - cost[city];
            total += net;
            tank += net;
            if tank < 0 {
                start = city + 1;
                tank = 0;
            }
        }
        if total < 0 {
            None
        } else {
            Some(start % gas.len())
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    let gas = [1, 2, 3, 4, 5];
    let cost = [3, 4, 5, 1, 2];
    println!("gas: {:?}", gas);
    println!("cost: {:?}", cost);
    println!("ample city: {:?}", AmpleCity::find_by_min_prefix(&gas, &cost));

    let gas = [2, 3, 4];
    let cost = [3, 4, 3];
    println!("gas: {:?}, cost: {:?} -> {:?}", gas, cost, AmpleCity::find_by_reset(&gas, &cost));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        let gas = [1, 2, 3, 4, 5];
        let cost = [3, 4, 5, 1, 2];
        assert_eq!(AmpleCity::find_by_simulation(&gas, &cost), Some(3));
        assert_eq!(AmpleCity::find_by_min_prefix(&gas, &cost), Some(3));
        assert_eq!(AmpleCity::find_by_reset(&gas, &cost), Some(3));
    }

    #[test]
    fn test_no_ample_city() {
        let gas = [2, 3, 4];
        let cost = [3, 4, 3];
        assert_eq!(AmpleCity::find_by_simulation(&gas, &cost), None);
        assert_eq!(AmpleCity::find_by_min_prefix(&gas, &cost), None);
        assert_eq!(AmpleCity::find_by_reset(&gas, &cost), None);
    }

    #[test]
    fn test_single_city() {
        assert_eq!(AmpleCity::find_by_min_prefix(&[5], &[5]), Some(0));
        assert_eq!(AmpleCity::find_by_min_prefix(&[4], &[5]), None);
    }

    #[test]
    fn test_start_at_zero() {
        let gas = [5, 1, 2, 3];
        let cost = [4, 1, 1, 1];
        assert_eq!(AmpleCity::find_by_simulation(&gas, &cost), Some(0));
        assert_eq!(AmpleCity::find_by_reset(&gas, &cost), Some(0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(AmpleCity::find_by_min_prefix(&[], &[]), None);
        assert_eq!(AmpleCity::find_by_reset(&[], &[]), None);
    }

    #[test]
    fn test_answer_actually_completes_tour() {
        let cases: [(&[i64], &[i64]); 4] = [
            (&[1, 2, 3, 4, 5], &[3, 4, 5, 1, 2]),
            (&[3, 1, 1], &[1, 2, 2]),
            (&[5, 8, 2, 8], &[6, 5, 6, 6]),
            (&[1, 1, 1, 1], &[1, 1, 1, 1]),
        ];
        for (gas, cost) in cases {
            let start = AmpleCity::find_by_min_prefix(gas, cost)
                .expect("every case here has an answer in test");
            let mut tank = 0i64;
            for step in 0..gas.len() {
                let city = (start + step) % gas.len();
                tank += gas[city] - cost[city];
                assert!(tank >= 0, "ran dry starting from {start}");
            }
        }
    }

    #[test]
    fn test_methods_agree_on_solvability() {
        let gas: [i64; 6] = [4, 0, 3, 2, 5, 1];
        let costs: [[i64; 6]; 3] = [
            [1, 2, 1, 3, 2, 4],
            [3, 1, 4, 1, 5, 9],
            [2, 2, 2, 2, 2, 2],
        ];
        for cost in &costs {
            let simulated = AmpleCity::find_by_simulation(&gas, cost);
            let prefixed = AmpleCity::find_by_min_prefix(&gas, cost);
            let reset = AmpleCity::find_by_reset(&gas, cost);
            assert_eq!(simulated.is_some(), prefixed.is_some());
            assert_eq!(simulated.is_some(), reset.is_some());
            // 有解时三种方法给出的起点都必须能绕完一圈
            for candidate in [simulated, prefixed, reset].into_iter().flatten() {
                let mut tank = 0i64;
                for step in 0..gas.len() {
                    let city = (candidate + step) % gas.len();
                    tank += gas[city] - cost[city];
                    assert!(tank >= 0);
                }
            }
        }
    }
}
