//! 打家劫舍
//!
//! LeetCode 198/213：一排房子各有现金，相邻两家不能都偷，
//! 求最大收益。递推 f(i) = max(f(i-1), f(i-2) + a[i])。
//!
//! - 直线版滚动两个变量，O(1)空间；
//! - 环形版（首尾相邻）拆成两条直线：偷首弃尾、弃首偷尾，
//!   取大者；
//! - 方案版记录每家偷或不偷，回溯出被偷的下标。

/// 打家劫舍练习结构体
pub struct HouseRobber;

impl HouseRobber {
    /// 直线排列的最大收益
    pub fn rob_line(cash: &[u64]) -> u64 {
        let mut skip_current = 0u64;
        let mut take_current = 0u64;
        for &amount in cash {
            let best_if_skip = skip_current.max(take_current);
            take_current = skip_current + amount;
            skip_current = best_if_skip;
        }
        skip_current.max(take_current)
    }

    /// 环形排列的最大收益，首尾相邻
    pub fn rob_ring(cash: &[u64]) -> u64 {
        match cash.len() {
            0 => 0,
            1 => cash[0],
            _ => {
                let without_last = Self::rob_line(&cash[..cash.len() - 1]);
                let without_first = Self::rob_line(&cash[1..]);
                without_last.max(without_first)
            }
        }
    }

    /// 直线版的一个最优方案，返回被偷房子的下标
    pub fn rob_line_plan(cash: &[u64]) -> Vec<usize> {
        if cash.is_empty() {
            return Vec::new();
        }
        // best[i]：只看前i家的最大收益
        let mut best = vec![0u64; cash.len() + 1];
        best[1] = cash[0];
        for i in 2..=cash.len() {
            best[i] = best[i - 1].max(best[i - 2] + cash[i - 1]);
        }

        let mut plan = Vec::new();
        let mut i = cash.len();
        while i >= 1 {
            if best[i] == best[i - 1] {
                i -= 1;
            } else {
                plan.push(i - 1);
                if i < 2 {
                    break;
                }
                i -= 2;
            }
        }
        plan.reverse();
        plan
    }
}

/// 打印示例输入输出
pub fn demo() {
    let street = [2, 7, 9, 3, 1];
    println!("street: {:?}", street);
    println!("line max: {}", HouseRobber::rob_line(&street));
    println!("plan: houses {:?}", HouseRobber::rob_line_plan(&street));

    let cul_de_sac = [2, 3, 2];
    println!("ring {:?}: {}", cul_de_sac, HouseRobber::rob_ring(&cul_de_sac));
}
