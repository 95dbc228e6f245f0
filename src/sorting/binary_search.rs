//! Binary search.
//!
//! O(log n) membership in a sorted slice, the problem with the
//! famous off-by-one graveyard. Kept variants:
//! - iterative half-interval, `low + (high - low) / 2` to dodge
//!   the overflow bug that sat in the JDK for years;
//! - recursive, carrying an offset so returned indices refer to
//!   the original slice;
//! - leftmost/rightmost insertion points (lower and upper
//!   bound), the duplicate-friendly answers that `partition_point`
//!   encodes in std.

/// Binary-search exercise struct.
pub struct BinarySearch;

impl BinarySearch {
    /// Iterative. Any matching index for duplicates.
    pub fn find<T: Ord>(values: &[T], target: &T) -> Option<usize> {
        let mut low = 0usize;
        let mut high = values.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match values[mid].cmp(target) {
                std::cmp::Ordering::Equal => return Some(mid),
                std::cmp::Ordering::Less => low = mid + 1,
                std::cmp::Ordering::Greater => high = mid,
            }
        }
        None
    }

    /// Recursive with offset bookkeeping.
    pub fn find_recursive<T: Ord>(values: &[T], target: &T) -> Option<usize> {
        Self::recurse(values, target, 0)
    }

    fn recurse<T: Ord>(values: &[T], target: &T, offset: usize) -> Option<usize> {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        match values[mid].cmp(target) {
            std::cmp::Ordering::Equal => Some(offset + mid),
            std::cmp::Ordering::Less => {
                Self::recurse(&values[mid + 1..], target, offset + mid + 1)
            }
            std::cmp::Ordering::Greater => Self::recurse(&values[..mid], target, offset),
        }
    }

    /// First index with values[i] >= target (insertion point).
    pub fn lower_bound<T: Ord>(values: &[T], target: &T) -> usize {
        let mut low = 0usize;
        let mut high = values.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if values[mid] < *target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// First index with values[i] > target.
    pub fn upper_bound<T: Ord>(values: &[T], target: &T) -> usize {
        let mut low = 0usize;
        let mut high = values.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if values[mid] <= *target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Count of `target` via the two bounds.
    pub fn count<T: Ord>(values: &[T], target: &T) -> usize {
        Self::upper_bound(values, target) - Self::lower_bound(values, target)
    }
}

/// Print sample input and output.
pub fn demo() {
    let values = [1, 3, 3, 3, 5, 8, 13];
    println!("sorted: {:?}", values);
    println!("find 5:  {:?}", BinarySearch::find(&values, &5));
    println!("find 4:  {:?}", BinarySearch::find(&values, &4));
    println!(
        "bounds of 3: [{}, {})",
        BinarySearch::lower_bound(&values, &3),
        BinarySearch::upper_bound(&values, &3)
    );
    println!("count of 3: {}", BinarySearch::count(&values, &3));
}
