//! Selection sort.
//!
//! Scan for the minimum, swap it to the front, repeat. Always
//! O(n^2) comparisons regardless of input order, but exactly
//! n-1 swaps, which once mattered on hardware where writes were
//! expensive and still matters for flash wear trivia questions.
//!
//! Not stable (the long-range swap can jump an equal element).
//! The double-ended variant picks min and max per pass and
//! shrinks the window from both sides, halving the pass count.

/// Selection-sort exercise struct.
pub struct SelectionSort;

impl SelectionSort {
    /// Textbook version.
    pub fn sort<T: Ord>(values: &mut [T]) {
        for i in 0..values.len() {
            let mut smallest = i;
            for j in i + 1..values.len() {
                if values[j] < values[smallest] {
                    smallest = j;
                }
            }
            if smallest != i {
                values.swap(i, smallest);
            }
        }
    }

    /// Min and max per pass.
    pub fn sort_double_ended<T: Ord>(values: &mut [T]) {
        if values.is_empty() {
            return;
        }
        let mut low = 0usize;
        let mut high = values.len() - 1;
        while low < high {
            let mut smallest = low;
            let mut largest = low;
            for i in low..=high {
                if values[i] < values[smallest] {
                    smallest = i;
                }
                if values[i] > values[largest] {
                    largest = i;
                }
            }
            values.swap(low, smallest);
            // the max may have just been swapped to `smallest`
            if largest == low {
                largest = smallest;
            }
            values.swap(high, largest);
            low += 1;
            high -= 1;
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![64, 25, 12, 22, 11];
    println!("input:  {:?}", values);
    SelectionSort::sort(&mut values);
    println!("sorted: {:?}", values);

    let mut more = vec![3, 1, 4, 1, 5, 9, 2, 6];
    SelectionSort::sort_double_ended(&mut more);
    println!("double-ended: {:?}", more);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases() -> Vec<Vec<i32>> {
        vec![
            vec![64, 25, 12, 22, 11],
            vec![],
            vec![1],
            vec![2, 1],
            vec![1, 1, 1],
            vec![5, 4, 3, 2, 1],
            vec![3, 1, 4, 1, 5, 9, 2, 6],
            vec![2, 2, 1, 3],
        ]
    }

    #[test]
    fn test_both_variants_sort() {
        for case in cases() {
            let mut expected = case.clone();
            expected.sort();

            let mut a = case.clone();
            SelectionSort::sort(&mut a);
            assert_eq!(a, expected, "plain failed on {:?}", case);

            let mut b = case.clone();
            SelectionSort::sort_double_ended(&mut b);
            assert_eq!(b, expected, "double-ended failed on {:?}", case);
        }
    }

    #[test]
    fn test_max_at_front_edge() {
        // exercises the largest==low fixup
        let mut values = vec![9, 1, 2, 3];
        SelectionSort::sort_double_ended(&mut values);
        assert_eq!(values, vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_sorts_strings() {
        let mut words = vec!["pear", "apple", "banana"];
        SelectionSort::sort(&mut words);
        assert_eq!(words, vec!["apple", "banana", "pear"]);
    }
}
