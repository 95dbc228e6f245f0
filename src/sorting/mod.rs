//! Sorting and searching problems.
//!
//! The comparison sorts operate in place on `&mut [T]` with
//! `T: Ord`; the linear-time sorts pin down their integer types.
//! Each file carries the variants worth contrasting rather than
//! a single canonical implementation.

pub mod binary_search;
pub mod bubble_sort;
pub mod counting_sort;
pub mod dutch_flag;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod quickselect;
pub mod radix_sort;
pub mod search_rotated;
pub mod selection_sort;

pub use binary_search::BinarySearch;
pub use bubble_sort::BubbleSort;
pub use counting_sort::CountingSort;
pub use dutch_flag::DutchFlag;
pub use heap_sort::HeapSort;
pub use insertion_sort::InsertionSort;
pub use merge_sort::MergeSort;
pub use quick_sort::QuickSort;
pub use quickselect::Quickselect;
pub use radix_sort::RadixSort;
pub use search_rotated::SearchRotated;
pub use selection_sort::SelectionSort;

use crate::runner::{Category, Demo};

/// All demos registered by this category.
pub fn demos() -> Vec<Demo> {
    vec![
        Demo::new(
            "sorting/bubble-sort",
            Category::Sorting,
            "Bubble sort with early-exit and cocktail variants",
            bubble_sort::demo,
        ),
        Demo::new(
            "sorting/insertion-sort",
            Category::Sorting,
            "Insertion sort by swaps, shifts and binary slotting",
            insertion_sort::demo,
        ),
        Demo::new(
            "sorting/selection-sort",
            Category::Sorting,
            "Selection sort, single and double ended",
            selection_sort::demo,
        ),
        Demo::new(
            "sorting/merge-sort",
            Category::Sorting,
            "Top-down, bottom-up and inversion counting",
            merge_sort::demo,
        ),
        Demo::new(
            "sorting/quick-sort",
            Category::Sorting,
            "Lomuto, Hoare and seeded random pivots",
            quick_sort::demo,
        ),
        Demo::new(
            "sorting/heap-sort",
            Category::Sorting,
            "Sift-down heap sort and the std BinaryHeap detour",
            heap_sort::demo,
        ),
        Demo::new(
            "sorting/counting-sort",
            Category::Sorting,
            "Range counting with a stable keyed variant",
            counting_sort::demo,
        ),
        Demo::new(
            "sorting/radix-sort",
            Category::Sorting,
            "LSD radix in base 10 and base 256, signed too",
            radix_sort::demo,
        ),
        Demo::new(
            "sorting/quickselect",
            Category::Sorting,
            "Kth smallest, randomized and median-of-medians",
            quickselect::demo,
        ),
        Demo::new(
            "sorting/binary-search",
            Category::Sorting,
            "Half-interval search and duplicate-aware bounds",
            binary_search::demo,
        ),
        Demo::new(
            "sorting/search-rotated",
            Category::Sorting,
            "Log-time search in a rotated sorted array",
            search_rotated::demo,
        ),
        Demo::new(
            "sorting/dutch-flag",
            Category::Sorting,
            "Three-way partition and sort colors",
            dutch_flag::demo,
        ),
    ]
}
