//! Bubble sort.
//!
//! The O(n^2) baseline everyone meets first. Kept here in three
//! flavors because the differences are the actual lesson:
//! - textbook double loop;
//! - early-exit: a pass with no swaps means sorted, which makes
//!   best case O(n) on already-sorted input;
//! - cocktail shaker: alternate directions so "turtles" (small
//!   values near the end) do not crawl one slot per pass.
//!
//! All sorts in this category are in-place over `&mut [T]` and
//! stable unless a file says otherwise. Bubble sort is stable.

/// Bubble-sort exercise struct.
pub struct BubbleSort;

impl BubbleSort {
    /// Textbook version.
    pub fn sort<T: Ord>(values: &mut [T]) {
        let n = values.len();
        for pass in 0..n {
            for i in 0..n.saturating_sub(pass + 1) {
                if values[i] > values[i + 1] {
                    values.swap(i, i + 1);
                }
            }
        }
    }

    /// Stop as soon as a pass makes no swap.
    pub fn sort_early_exit<T: Ord>(values: &mut [T]) {
        let mut unsorted = values.len();
        while unsorted > 1 {
            let mut swapped = false;
            for i in 0..unsorted - 1 {
                if values[i] > values[i + 1] {
                    values.swap(i, i + 1);
                    swapped = true;
                }
            }
            unsorted -= 1;
            if !swapped {
                break;
            }
        }
    }

    /// Cocktail shaker: sweep right then left.
    pub fn sort_cocktail<T: Ord>(values: &mut [T]) {
        if values.len() < 2 {
            return;
        }
        let mut low = 0usize;
        let mut high = values.len() - 1;
        let mut swapped = true;
        while swapped && low < high {
            swapped = false;
            for i in low..high {
                if values[i] > values[i + 1] {
                    values.swap(i, i + 1);
                    swapped = true;
                }
            }
            high -= 1;
            for i in (low..high).rev() {
                if values[i] > values[i + 1] {
                    values.swap(i, i + 1);
                    swapped = true;
                }
            }
            low += 1;
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![5, 1, 4, 2, 8, 0, 2];
    println!("input:  {:?}", values);
    BubbleSort::sort(&mut values);
    println!("sorted: {:?}", values);

    let mut turtles = vec![2, 3, 4, 5, 1];
    println!("turtle case {:?}", turtles);
    BubbleSort::sort_cocktail(&mut turtles);
    println!("cocktail:   {:?}", turtles);
}
