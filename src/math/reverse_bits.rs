//! 颠倒二进制位（LeetCode 190）
//!
//! 把u32的位序整个倒过来。两种写法：
//! - 逐位搬运：每轮从低端取一位推进结果，固定32轮；
//! - 掩码对换：相邻位互换、相邻位对互换、半字节互换……
//!   5轮O(log w)完成，掩码常量0x5555/0x3333/0x0F0F就是
//!   这道题的记忆点。
//!
//! 标准库有现成的`reverse_bits`，测试拿它当裁判。

/// 位反转
pub struct ReverseBits;

impl ReverseBits {
    /// 逐位搬运，固定32轮
    pub fn reverse_loop(value: u32) -> u32 {
        let mut remaining = value;
        let mut result = 0u32;
        for _ in 0..32 {
            result = (result << 1) | (remaining & 1);
            remaining >>= 1;
        }
        result
    }

    /// 掩码分治，5轮
    pub fn reverse_masks(value: u32) -> u32 {
        let mut v = value;
        v = ((v & 0x5555_5555) << 1) | ((v >> 1) & 0x5555_5555);
        v = ((v & 0x3333_3333) << 2) | ((v >> 2) & 0x3333_3333);
        v = ((v & 0x0F0F_0F0F) << 4) | ((v >> 4) & 0x0F0F_0F0F);
        v = ((v & 0x00FF_00FF) << 8) | ((v >> 8) & 0x00FF_00FF);
        v.rotate_left(16)
    }

    /// 只反转字节序，对照用
    pub fn reverse_bytes(value: u32) -> u32 {
        value.swap_bytes()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let value = 0b00000010100101000001111010011100u32;
    println!("input:  {:#034b}", value);
    println!("output: {:#034b}", ReverseBits::reverse_masks(value));
    println!("as decimal: {} -> {}", value, ReverseBits::reverse_masks(value));
    println!(
        "bytes only: {:#010X} -> {:#010X}",
        0x1234_ABCDu32,
        ReverseBits::reverse_bytes(0x1234_ABCD)
    );
}
