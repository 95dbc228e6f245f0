//! 0/1背包
//!
//! 容量有限的背包装物品，每件最多拿一件，求最大总价值。
//! - 二维表 O(n*W)，能回溯出选了哪些物品；
//! - 一维滚动把空间压到 O(W)，容量必须从大到小遍历，
//!   否则一件物品会被重复拿；
//! - 顺带完全背包（每件无限拿），同一行正向遍历即可，
//!   两个方向的差别就是这道题的考点。

/// 背包物品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub const fn new(name: &'static str, weight: usize, value: u64) -> Self {
        Item { name, weight, value }
    }
}

/// 0/1背包练习结构体
pub struct Knapsack;

impl Knapsack {
    /// 二维表版最大价值
    pub fn max_value(items: &[Item], capacity: usize) -> u64 {
        Self::table(items, capacity)[items.len()][capacity]
    }

    /// 一维滚动版最大价值
    pub fn max_value_one_row(items: &[Item], capacity: usize) -> u64 {
        let mut best = vec![0u64; capacity + 1];
        for item in items {
            // 从大到小，保证每件只选一次
            for room in (item.weight..=capacity).rev() {
                best[room] = best[room].max(best[room - item.weight] + item.value);
            }
        }
        best[capacity]
    }

    /// 完全背包：每件物品可以重复拿
    pub fn max_value_unbounded(items: &[Item], capacity: usize) -> u64 {
        let mut best = vec![0u64; capacity + 1];
        for item in items {
            for room in item.weight..=capacity {
                best[room] = best[room].max(best[room - item.weight] + item.value);
            }
        }
        best[capacity]
    }

    /// 选中的物品下标，从二维表回溯，按输入顺序返回
    pub fn chosen_items(items: &[Item], capacity: usize) -> Vec<usize> {
        let table = Self::table(items, capacity);
        let mut chosen = Vec::new();
        let mut room = capacity;
        for index in (0..items.len()).rev() {
            // 价值和上一行不同说明这件被拿了
            if table[index + 1][room] != table[index][room] {
                chosen.push(index);
                room -= items[index].weight;
            }
        }
        chosen.reverse();
        chosen
    }

    fn table(items: &[Item], capacity: usize) -> Vec<Vec<u64>> {
        let mut table = vec![vec![0u64; capacity + 1]; items.len() + 1];
        for (index, item) in items.iter().enumerate() {
            for room in 0..=capacity {
                table[index + 1][room] = table[index][room];
                if item.weight <= room {
                    table[index + 1][room] = table[index + 1][room]
                        .max(table[index][room - item.weight] + item.value);
                }
            }
        }
        table
    }
}

/// 打印示例输入输出
pub fn demo() {
    let loot = [
        Item::new("map", 1, 150),
        Item::new("compass", 1, 35),
        Item::new("water", 4, 200),
        Item::new("sandwich", 3, 160),
        Item::new("glucose", 2, 60),
        Item::new("camera", 3, 30),
    ];
    let capacity = 8;

    println!("capacity {}, items:", capacity);
    for item in &loot {
        println!("  {:<9} weight {} value {}", item.name, item.weight, item.value);
    }
    println!("max value (table):   {}", Knapsack::max_value(&loot, capacity));
    println!(
        "max value (one row): {}",
        Knapsack::max_value_one_row(&loot, capacity)
    );
    let chosen = Knapsack::chosen_items(&loot, capacity);
    let names: Vec<&str> = chosen.iter().map(|&i| loot[i].name).collect();
    println!("chosen: {:?}", names);
    println!(
        "unbounded variant:   {}",
        Knapsack::max_value_unbounded(&loot, capacity)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiking_items() -> Vec<Item> {
        vec![
            Item::new("map", 1, 150),
            Item::new("compass", 1, 35),
            Item::new("water", 4, 200),
            Item::new("sandwich", 3, 160),
        ]
    }

    #[test]
    fn test_max_value() {
        // 全部重量9超容量8，丢下compass: 150+200+160=510
        assert_eq!(Knapsack::max_value(&hiking_items(), 8), 510);
        assert_eq!(Knapsack::max_value(&hiking_items(), 0), 0);
        assert_eq!(Knapsack::max_value(&[], 10), 0);
    }

    #[test]
    fn test_one_row_agrees_with_table() {
        let items = hiking_items();
        for capacity in 0..=12 {
            assert_eq!(
                Knapsack::max_value(&items, capacity),
                Knapsack::max_value_one_row(&items, capacity),
                "diverged at capacity {}",
                capacity
            );
        }
    }

    #[test]
    fn test_chosen_items_are_feasible_and_optimal() {
        let items = hiking_items();
        let capacity = 8;
        let chosen = Knapsack::chosen_items(&items, capacity);

        let weight: usize = chosen.iter().map(|&i| items[i].weight).sum();
        let value: u64 = chosen.iter().map(|&i| items[i].value).sum();
        assert!(weight <= capacity);
        assert_eq!(value, Knapsack::max_value(&items, capacity));
    }

    #[test]
    fn test_unbounded_beats_zero_one() {
        let items = [Item::new("gem", 2, 100), Item::new("bar", 5, 180)];
        // 0/1最多一颗gem一根bar=280；完全背包拿4颗gem=400
        assert_eq!(Knapsack::max_value(&items, 8), 280);
        assert_eq!(Knapsack::max_value_unbounded(&items, 8), 400);
    }

    #[test]
    fn test_item_heavier_than_capacity_ignored() {
        let items = [Item::new("anvil", 50, 9999), Item::new("pen", 1, 5)];
        assert_eq!(Knapsack::max_value(&items, 10), 5);
        assert_eq!(Knapsack::chosen_items(&items, 10), vec![1]);
    }
}
