//! 汉诺塔（CCI 8.6）
//!
//! 三根柱子，n个盘子从第一根搬到第三根，一次搬一个且
//! 大盘不能压小盘。递归结构是教科书级的：先把n-1个挪到
//! 缓冲柱，再把最大盘挪到目标柱，最后把n-1个从缓冲柱
//! 挪过来，共2^n - 1步。
//!
//! CCI的原题要求用栈表示柱子，这里保留了基于`Vec`栈的
//! 模拟版用来校验走法确实合法，另给一个只记录走法的
//! 轻量递归版。

/// 一步搬运，记录盘号和起止柱
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: usize,
    pub from: usize,
    pub to: usize,
}

/// 汉诺塔求解
pub struct TowersOfHanoi;

impl TowersOfHanoi {
    /// 递归生成全部走法，柱子编号0/1/2
    pub fn moves(disks: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        Self::transfer(disks, 0, 2, 1, &mut moves);
        moves
    }

    fn transfer(disk: usize, from: usize, to: usize, via: usize, moves: &mut Vec<Move>) {
        if disk == 0 {
            return;
        }
        Self::transfer(disk - 1, from, via, to, moves);
        moves.push(Move {
            disk,
            from,
            to,
        });
        Self::transfer(disk - 1, via, to, from, moves);
    }

    /// 最少步数，2^n - 1
    pub fn min_moves(disks: u32) -> u64 {
        (1u64 << disks) - 1
    }

    /// 栈模拟版：逐步执行走法并检查合法性
    ///
    /// 返回搬完后的三根柱子。任何一步违反大压小规则时返回`None`，
    /// 正常情况下只会出现在手工构造的非法走法序列里。
    pub fn simulate(disks: usize, moves: &[Move]) -> Option<[Vec<usize>; 3]> {
        let mut towers: [Vec<usize>; 3] = [(1..=disks).rev().collect(), Vec::new(), Vec::new()];
        for step in moves {
            if step.from > 2 || step.to > 2 {
                return None;
            }
            let disk = towers[step.from].pop()?;
            if disk != step.disk {
                return None;
            }
            if let Some(&top) = towers[step.to].last() {
                if top < disk {
                    return None;
                }
            }
            towers[step.to].push(disk);
        }
        Some(towers)
    }
}

/// 打印示例输入输出
pub fn demo() {
    let moves = TowersOfHanoi::moves(3);
    println!("3 disks take {} moves:", moves.len());
    for step in &moves {
        println!("  disk {} : {} -> {}", step.disk, step.from, step.to);
    }
    for disks in [4u32, 8, 16, 32] {
        println!("{} disks need {} moves", disks, TowersOfHanoi::min_moves(disks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_counts() {
        for disks in 0..12 {
            assert_eq!(
                TowersOfHanoi::moves(disks).len() as u64,
                TowersOfHanoi::min_moves(disks as u32),
                "disks = {disks}"
            );
        }
    }

    #[test]
    fn test_three_disk_sequence() {
        let moves = TowersOfHanoi::moves(2);
        assert_eq!(
            moves,
            vec![
                Move { disk: 1, from: 0, to: 1 },
                Move { disk: 2, from: 0, to: 2 },
                Move { disk: 1, from: 1, to: 2 },
            ]
        );
    }

    #[test]
    fn test_simulation_reaches_goal() {
        for disks in 1..=8 {
            let moves = TowersOfHanoi::moves(disks);
            let towers = TowersOfHanoi::simulate(disks, &moves)
                .expect("Generated moves should be legal in test");
            assert!(towers[0].is_empty());
            assert!(towers[1].is_empty());
            let expected: Vec<usize> = (1..=disks).rev().collect();
            assert_eq!(towers[2], expected);
        }
    }

    #[test]
    fn test_simulation_rejects_illegal_move() {
        // 直接把大盘压到小盘上
        let illegal = vec![
            Move { disk: 1, from: 0, to: 1 },
            Move { disk: 2, from: 0, to: 1 },
        ];
        assert!(TowersOfHanoi::simulate(2, &illegal).is_none());
    }

    #[test]
    fn test_zero_disks() {
        assert!(TowersOfHanoi::moves(0).is_empty());
        assert_eq!(TowersOfHanoi::min_moves(0), 0);
    }
}
