//! 硬币找零
//!
//! 两个经典变体放一起：
//! - 最少硬币数（LeetCode 322）：凑出目标金额最少用几枚，
//!   凑不出返回None；
//! - 组合数（LeetCode 518 / CCI 8.11）：凑出金额有多少种
//!   硬币组合，面额循环在外层保证不重复计数。
//!
//! 最少硬币数再配一个BFS解法对照：金额当节点，每种面额
//! 是一条边，最短路径长度就是答案。

use std::collections::{HashSet, VecDeque};

/// 硬币找零练习结构体
pub struct CoinChange;

impl CoinChange {
    /// 最少硬币数，填表DP
    pub fn fewest_coins(coins: &[u64], amount: u64) -> Option<u64> {
        let amount = amount as usize;
        let mut fewest: Vec<Option<u64>> = vec![None; amount + 1];
        fewest[0] = Some(0);

        for target in 1..=amount {
            for &coin in coins {
                let coin = coin as usize;
                if coin == 0 || coin > target {
                    continue;
                }
                if let Some(below) = fewest[target - coin] {
                    let candidate = below + 1;
                    fewest[target] = Some(match fewest[target] {
                        Some(current) => current.min(candidate),
                        None => candidate,
                    });
                }
            }
        }
        fewest[amount]
    }

    /// 最少硬币数，BFS版
    pub fn fewest_coins_bfs(coins: &[u64], amount: u64) -> Option<u64> {
        if amount == 0 {
            return Some(0);
        }
        let mut visited: HashSet<u64> = HashSet::new();
        let mut queue: VecDeque<(u64, u64)> = VecDeque::new();
        visited.insert(0);
        queue.push_back((0, 0));

        while let Some((reached, used)) = queue.pop_front() {
            for &coin in coins {
                if coin == 0 {
                    continue;
                }
                let Some(next) = reached.checked_add(coin) else {
                    continue;
                };
                if next == amount {
                    return Some(used + 1);
                }
                if next < amount && visited.insert(next) {
                    queue.push_back((next, used + 1));
                }
            }
        }
        None
    }

    /// 凑出金额的组合数，面额顺序不同不算新组合
    pub fn count_combinations(coins: &[u64], amount: u64) -> u64 {
        let amount = amount as usize;
        let mut combinations = vec![0u64; amount + 1];
        combinations[0] = 1;
        // 面额在外层，否则会把排列当组合数出来
        for &coin in coins {
            let coin = coin as usize;
            if coin == 0 {
                continue;
            }
            for target in coin..=amount {
                combinations[target] += combinations[target - coin];
            }
        }
        combinations[amount]
    }
}

/// 打印示例输入输出
pub fn demo() {
    let us_coins = [25, 10, 5, 1];
    println!("coins {:?}, amount 63", us_coins);
    println!("fewest (dp):  {:?}", CoinChange::fewest_coins(&us_coins, 63));
    println!(
        "fewest (bfs): {:?}",
        CoinChange::fewest_coins_bfs(&us_coins, 63)
    );
    println!(
        "combinations for 12: {}",
        CoinChange::count_combinations(&us_coins, 12)
    );

    let awkward = [3, 7];
    println!(
        "coins {:?}, amount 5: {:?}",
        awkward,
        CoinChange::fewest_coins(&awkward, 5)
    );
}
