//! 100 doors (Rosetta Code).
//!
//! 100 closed doors; on pass k you toggle every k-th door. After
//! 100 passes, which doors are open? Door d gets toggled once per
//! divisor of d, and only perfect squares have an odd divisor
//! count, so the open doors are exactly 1, 4, 9, ... The full
//! simulation and the square shortcut are both here so one checks
//! the other.

/// The hundred-doors toggling puzzle.
pub struct HundredDoors;

impl HundredDoors {
    /// Simulate all passes; index 0 is door 1. O(n log n) toggles.
    pub fn simulate(doors: usize) -> Vec<bool> {
        let mut open = vec![false; doors];
        for pass in 1..=doors {
            let mut door = pass;
            while door <= doors {
                open[door - 1] = !open[door - 1];
                door += pass;
            }
        }
        open
    }

    /// The divisor-parity shortcut: open doors are the perfect squares.
    pub fn open_doors(doors: usize) -> Vec<usize> {
        (1..)
            .map(|k| k * k)
            .take_while(|&square| square <= doors)
            .collect()
    }
}

/// 打印示例输入输出
pub fn demo() {
    let open = HundredDoors::open_doors(100);
    println!("open doors after 100 passes: {:?}", open);
    let simulated = HundredDoors::simulate(100);
    let count = simulated.iter().filter(|&&o| o).count();
    println!("simulation agrees: {} doors open", count);
}
