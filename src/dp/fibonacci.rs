//! 斐波那契数列
//!
//! 动态规划的入门题，拿来对比四种写法的代价：
//! - 朴素递归 O(2^n)，n=40就开始卡，纯粹反面教材；
//! - 记忆化递归 O(n)，自顶向下，改动最小；
//! - 迭代 O(n) 时间 O(1) 空间，滚动两个变量；
//! - 快速倍增 O(log n)，利用 F(2k)=F(k)*(2F(k+1)-F(k))。
//!
//! 返回u128，n超过186会溢出，调用方自行保证。

/// 斐波那契练习结构体
pub struct Fibonacci;

impl Fibonacci {
    /// 朴素递归，指数复杂度
    pub fn naive(n: u32) -> u128 {
        if n < 2 {
            return n as u128;
        }
        Self::naive(n - 1) + Self::naive(n - 2)
    }

    /// 记忆化递归
    pub fn memoized(n: u32) -> u128 {
        let mut memo = vec![None; n as usize + 1];
        Self::fill(n, &mut memo)
    }

    fn fill(n: u32, memo: &mut Vec<Option<u128>>) -> u128 {
        if n < 2 {
            return n as u128;
        }
        if let Some(value) = memo[n as usize] {
            return value;
        }
        let value = Self::fill(n - 1, memo) + Self::fill(n - 2, memo);
        memo[n as usize] = Some(value);
        value
    }

    /// 迭代，常数空间
    pub fn iterative(n: u32) -> u128 {
        let (mut previous, mut current) = (0u128, 1u128);
        for _ in 0..n {
            let next = previous + current;
            previous = current;
            current = next;
        }
        previous
    }

    /// 快速倍增，对数复杂度
    pub fn doubling(n: u32) -> u128 {
        Self::pair(n).0
    }

    /// 返回 (F(n), F(n+1))
    fn pair(n: u32) -> (u128, u128) {
        if n == 0 {
            return (0, 1);
        }
        let (f_k, f_k1) = Self::pair(n / 2);
        let even = f_k * (2 * f_k1 - f_k);
        let odd = f_k * f_k + f_k1 * f_k1;
        if n % 2 == 0 {
            (even, odd)
        } else {
            (odd, even + odd)
        }
    }
}

/// 打印示例输入输出
pub fn demo() {
    println!("first ten: {:?}",
        (0..10).map(Fibonacci::iterative).collect::<Vec<_>>());
    println!("fib(30) naive:     {}", Fibonacci::naive(30));
    println!("fib(30) memoized:  {}", Fibonacci::memoized(30));
    println!("fib(90) iterative: {}", Fibonacci::iterative(90));
    println!("fib(90) doubling:  {}", Fibonacci::doubling(90));
}
