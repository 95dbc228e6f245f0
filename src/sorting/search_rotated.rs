//! Search in rotated sorted array.
//!
//! LeetCode 33/153: a sorted array was rotated at an unknown
//! pivot ([4,5,6,7,0,1,2]); find a target in O(log n). At every
//! step one half is guaranteed sorted; check whether the target
//! falls inside that half and recurse into the right one.
//!
//! Also here: find the rotation point (index of the minimum),
//! both as its own binary search and as the building block of
//! the two-phase "unrotate then ordinary search" solution.
//! Elements are assumed distinct, the LeetCode 33 contract; with
//! duplicates the bound degrades to O(n) and is out of scope.

/// Rotated-search exercise struct.
pub struct SearchRotated;

impl SearchRotated {
    /// One-pass search.
    pub fn find(values: &[i64], target: i64) -> Option<usize> {
        let mut low = 0usize;
        let mut high = values.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if values[mid] == target {
                return Some(mid);
            }
            // left half sorted?
            if values[low] <= values[mid] {
                if values[low] <= target && target < values[mid] {
                    high = mid;
                } else {
                    low = mid + 1;
                }
            } else if values[mid] < target && target <= values[high - 1] {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        None
    }

    /// Index of the smallest element (the rotation point).
    pub fn rotation_point(values: &[i64]) -> Option<usize> {
        if values.is_empty() {
            return None;
        }
        let mut low = 0usize;
        let mut high = values.len() - 1;
        while low < high {
            let mid = low + (high - low) / 2;
            if values[mid] > values[high] {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        Some(low)
    }

    /// Two-phase: locate the pivot, then search the proper half.
    pub fn find_two_phase(values: &[i64], target: i64) -> Option<usize> {
        let pivot = Self::rotation_point(values)?;
        let search = |slice: &[i64], offset: usize| -> Option<usize> {
            slice
                .binary_search(&target)
                .ok()
                .map(|position| position + offset)
        };
        if pivot == 0 {
            return search(values, 0);
        }
        search(&values[pivot..], pivot).or_else(|| search(&values[..pivot], 0))
    }
}

/// Print sample input and output.
pub fn demo() {
    let values = [4, 5, 6, 7, 0, 1, 2];
    println!("rotated: {:?}", values);
    for target in [0, 3, 5] {
        println!(
            "find {}: one-pass {:?}, two-phase {:?}",
            target,
            SearchRotated::find(&values, target),
            SearchRotated::find_two_phase(&values, target)
        );
    }
    println!(
        "rotation point: {:?}",
        SearchRotated::rotation_point(&values)
    );
}
