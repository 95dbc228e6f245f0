//! Merge sort.
//!
//! The O(n log n) workhorse with guaranteed bounds and
//! stability, at the price of O(n) scratch space.
//!
//! - top-down recursion, the version everyone writes first;
//! - bottom-up iteration: merge runs of width 1, 2, 4..., no
//!   recursion, friendlier to explicit-stack-averse settings;
//! - merge-and-count: the inversion-counting twist (how many
//!   pairs are out of order), which is the actual interview
//!   payload of merge sort.

/// Merge-sort exercise struct.
pub struct MergeSort;

impl MergeSort {
    /// Top-down.
    pub fn sort<T: Ord + Clone>(values: &mut [T]) {
        if values.len() < 2 {
            return;
        }
        let mid = values.len() / 2;
        Self::sort(&mut values[..mid]);
        Self::sort(&mut values[mid..]);
        Self::merge(values, mid);
    }

    /// Bottom-up, widths doubling.
    pub fn sort_bottom_up<T: Ord + Clone>(values: &mut [T]) {
        let n = values.len();
        let mut width = 1usize;
        while width < n {
            let mut start = 0usize;
            while start + width < n {
                let end = (start + 2 * width).min(n);
                Self::merge(&mut values[start..end], width);
                start = end;
            }
            width *= 2;
        }
    }

    /// Sort a copy and count inversions in the input.
    pub fn count_inversions<T: Ord + Clone>(values: &[T]) -> u64 {
        let mut scratch: Vec<T> = values.to_vec();
        Self::sort_counting(&mut scratch)
    }

    fn sort_counting<T: Ord + Clone>(values: &mut [T]) -> u64 {
        if values.len() < 2 {
            return 0;
        }
        let mid = values.len() / 2;
        let mut inversions = Self::sort_counting(&mut values[..mid]);
        inversions += Self::sort_counting(&mut values[mid..]);

        // during merge, taking from the right half first means the
        // whole remaining left half is inverted against it
        let left: Vec<T> = values[..mid].to_vec();
        let right: Vec<T> = values[mid..].to_vec();
        let (mut i, mut j) = (0usize, 0usize);
        for slot in values.iter_mut() {
            if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
                *slot = left[i].clone();
                i += 1;
            } else {
                inversions += (left.len() - i) as u64;
                *slot = right[j].clone();
                j += 1;
            }
        }
        inversions
    }

    /// Merge values[..split] and values[split..], both sorted.
    fn merge<T: Ord + Clone>(values: &mut [T], split: usize) {
        let left: Vec<T> = values[..split].to_vec();
        let right: Vec<T> = values[split..].to_vec();
        let (mut i, mut j) = (0usize, 0usize);
        for slot in values.iter_mut() {
            if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
                *slot = left[i].clone();
                i += 1;
            } else {
                *slot = right[j].clone();
                j += 1;
            }
        }
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![38, 27, 43, 3, 9, 82, 10];
    println!("input:     {:?}", values);
    MergeSort::sort(&mut values);
    println!("top-down:  {:?}", values);

    let mut again = vec![38, 27, 43, 3, 9, 82, 10];
    MergeSort::sort_bottom_up(&mut again);
    println!("bottom-up: {:?}", again);

    let scrambled = [2, 4, 1, 3, 5];
    println!(
        "inversions in {:?}: {}",
        scrambled,
        MergeSort::count_inversions(&scrambled)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases() -> Vec<Vec<i32>> {
        vec![
            vec![38, 27, 43, 3, 9, 82, 10],
            vec![],
            vec![1],
            vec![2, 1],
            vec![1, 2, 3, 4],
            vec![4, 3, 2, 1],
            vec![5, 5, 5],
            vec![1, 3, 2, 3, 1],
        ]
    }

    #[test]
    fn test_both_orders_sort() {
        for case in cases() {
            let mut expected = case.clone();
            expected.sort();

            let mut a = case.clone();
            MergeSort::sort(&mut a);
            assert_eq!(a, expected, "top-down failed on {:?}", case);

            let mut b = case.clone();
            MergeSort::sort_bottom_up(&mut b);
            assert_eq!(b, expected, "bottom-up failed on {:?}", case);
        }
    }

    #[test]
    fn test_inversion_counts() {
        assert_eq!(MergeSort::count_inversions(&[1, 2, 3, 4]), 0);
        assert_eq!(MergeSort::count_inversions(&[2, 4, 1, 3, 5]), 3);
        // reversed n elements have n*(n-1)/2 inversions
        assert_eq!(MergeSort::count_inversions(&[5, 4, 3, 2, 1]), 10);
        assert_eq!(MergeSort::count_inversions::<i32>(&[]), 0);
    }

    #[test]
    fn test_inversions_agree_with_brute_force() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut brute = 0u64;
        for i in 0..values.len() {
            for j in i + 1..values.len() {
                if values[i] > values[j] {
                    brute += 1;
                }
            }
        }
        assert_eq!(MergeSort::count_inversions(&values), brute);
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct Keyed {
        key: i32,
        tag: char,
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn test_stability() {
        let mut pairs = vec![
            Keyed { key: 2, tag: 'a' },
            Keyed { key: 1, tag: 'b' },
            Keyed { key: 2, tag: 'c' },
            Keyed { key: 1, tag: 'd' },
        ];
        MergeSort::sort(&mut pairs);
        let tags: Vec<char> = pairs.iter().map(|p| p.tag).collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }
}
