//! 买卖股票的最佳时机（LeetCode 121 / 122）
//!
//! 给定每天的股价：
//! - 单次交易版：选一天买一天卖，利润最大化。一遍扫描，
//!   维护"至今最低买入价"，每天用当天价减它更新答案；
//! - 不限次数版：所有上涨段都吃到，等价于把相邻正差值
//!   全部累加，不需要真的找波峰波谷。
//!
//! 一直下跌时单次版利润为0（可以不交易），这也是
//! 暴力版和扫描版都要覆盖的边界。

/// 股票买卖问题
pub struct MaxProfit;

impl MaxProfit {
    /// 单次交易，暴力枚举买卖日，O(n²)
    pub fn single_brute_force(prices: &[u64]) -> u64 {
        let mut best = 0;
        for buy in 0..prices.len() {
            for sell in (buy + 1)..prices.len() {
                best = best.max(prices[sell].saturating_sub(prices[buy]));
            }
        }
        best
    }

    /// 单次交易，最低价扫描，O(n)
    pub fn single(prices: &[u64]) -> u64 {
        let mut lowest = u64::MAX;
        let mut best = 0;
        for &price in prices {
            lowest = lowest.min(price);
            best = best.max(price - lowest);
        }
        best
    }

    /// 单次交易并给出买卖日，O(n)
    pub fn single_with_days(prices: &[u64]) -> Option<(usize, usize, u64)> {
        let mut lowest_at = 0;
        let mut best: Option<(usize, usize, u64)> = None;
        for (day, &price) in prices.iter().enumerate() {
            if price < prices[lowest_at] {
                lowest_at = day;
            }
            let profit = price - prices[lowest_at];
            if profit > 0 && best.map_or(true, |(_, _, p)| profit > p) {
                best = Some((lowest_at, day, profit));
            }
        }
        best
    }

    /// 不限交易次数，吃掉所有上涨段
    pub fn unlimited(prices: &[u64]) -> u64 {
        prices
            .windows(2)
            .map(|pair| pair[1].saturating_sub(pair[0]))
            .sum()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let prices = [7, 1, 5, 3, 6, 4];
    println!("prices: {:?}", prices);
    println!("single trade: {}", MaxProfit::single(&prices));
    println!("with days: {:?}", MaxProfit::single_with_days(&prices));
    println!("unlimited trades: {}", MaxProfit::unlimited(&prices));

    let falling = [7, 6, 4, 3, 1];
    println!("falling market {:?} -> {}", falling, MaxProfit::single(&falling));
}
