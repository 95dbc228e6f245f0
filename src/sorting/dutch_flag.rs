//! Dutch national flag.
//!
//! Dijkstra's three-way partition, surfaced on LeetCode as Sort
//! Colors (75): one pass, constant space, three regions growing
//! from both ends with an unexamined gap in the middle. The
//! invariant is everything: [0..low) is below, [low..mid) is
//! equal, [high..] is above, and mid does not advance after a
//! swap from the high side because the incoming element is
//! unexamined.
//!
//! The counting rewrite is the boring-but-honest alternative for
//! the 0/1/2 special case, and the generic `partition_around`
//! is what quicksort-with-equal-keys actually wants.

/// Dutch-flag exercise struct.
pub struct DutchFlag;

impl DutchFlag {
    /// Sort a slice of 0/1/2 in one pass.
    ///
    /// # Panics
    ///
    /// Panics if any element is outside 0..=2; this file is
    /// deliberately strict about its alphabet.
    pub fn sort_colors(values: &mut [u8]) {
        let mut low = 0usize;
        let mut mid = 0usize;
        let mut high = values.len();
        while mid < high {
            match values[mid] {
                0 => {
                    values.swap(low, mid);
                    low += 1;
                    mid += 1;
                }
                1 => mid += 1,
                2 => {
                    high -= 1;
                    values.swap(mid, high);
                }
                other => panic!("sort_colors expects 0/1/2, got {}", other),
            }
        }
    }

    /// Two-pass counting version, same contract.
    ///
    /// # Panics
    ///
    /// Panics if any element is outside 0..=2.
    pub fn sort_colors_counting(values: &mut [u8]) {
        let mut counts = [0usize; 3];
        for &value in values.iter() {
            assert!(value <= 2, "sort_colors expects 0/1/2, got {}", value);
            counts[value as usize] += 1;
        }
        let mut write = 0usize;
        for color in 0u8..=2 {
            for _ in 0..counts[color as usize] {
                values[write] = color;
                write += 1;
            }
        }
    }

    /// Three-way partition around `pivot`. Returns (below, above):
    /// values[..below] < pivot, values[below..above] == pivot,
    /// values[above..] > pivot.
    pub fn partition_around<T: Ord>(values: &mut [T], pivot: &T) -> (usize, usize) {
        let mut low = 0usize;
        let mut mid = 0usize;
        let mut high = values.len();
        while mid < high {
            match values[mid].cmp(pivot) {
                std::cmp::Ordering::Less => {
                    values.swap(low, mid);
                    low += 1;
                    mid += 1;
                }
                std::cmp::Ordering::Equal => mid += 1,
                std::cmp::Ordering::Greater => {
                    high -= 1;
                    values.swap(mid, high);
                }
            }
        }
        (low, high)
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut colors = vec![2u8, 0, 2, 1, 1, 0];
    println!("input:  {:?}", colors);
    DutchFlag::sort_colors(&mut colors);
    println!("sorted: {:?}", colors);

    let mut values = vec![9, 4, 6, 4, 1, 4, 8];
    let (below, above) = DutchFlag::partition_around(&mut values, &4);
    println!(
        "partition around 4: {:?}, below {} above {}",
        values, below, above
    );
}
