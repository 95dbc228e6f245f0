//! Counting sort.
//!
//! O(n + k) for integers in a known small range: tally
//! occurrences, then either rewrite the slice from the counts
//! (fine for plain integers) or take prefix sums and place
//! records back-to-front, which is the stable version radix
//! sort builds on.
//!
//! The range is discovered by a min/max scan, so negatives work;
//! memory is proportional to max - min + 1, which is the whole
//! trade-off. `sort_by_key` keeps full records, not just keys.

/// Counting-sort exercise struct.
pub struct CountingSort;

impl CountingSort {
    /// Tally and rewrite. Empty input is a no-op.
    ///
    /// # Panics
    ///
    /// The counting table needs `max - min + 1` slots, so a slice
    /// whose extremes span more than `i64::MAX` values panics up
    /// front instead of computing a bogus table size.
    pub fn sort(values: &mut [i64]) {
        let Some(&first) = values.first() else {
            return;
        };
        let (mut low, mut high) = (first, first);
        for &value in values.iter() {
            low = low.min(value);
            high = high.max(value);
        }

        let Some(span) = high.checked_sub(low) else {
            panic!("value range {low}..={high} is too wide for a counting table");
        };
        let mut counts = vec![0usize; span as usize + 1];
        for &value in values.iter() {
            counts[(value - low) as usize] += 1;
        }

        let mut write = 0usize;
        for (offset, &count) in counts.iter().enumerate() {
            for _ in 0..count {
                values[write] = low + offset as i64;
                write += 1;
            }
        }
    }

    /// Stable placement by prefix sums, keyed records.
    ///
    /// `key` must map every record into 0..range.
    pub fn sort_by_key<T: Clone, F: Fn(&T) -> usize>(
        values: &[T],
        range: usize,
        key: F,
    ) -> Vec<T> {
        let mut counts = vec![0usize; range];
        for value in values {
            counts[key(value)] += 1;
        }
        // prefix sums: counts[k] becomes the first slot for key k
        let mut total = 0usize;
        for count in counts.iter_mut() {
            let here = *count;
            *count = total;
            total += here;
        }

        let mut output: Vec<T> = values.to_vec();
        for value in values {
            let k = key(value);
            output[counts[k]] = value.clone();
            counts[k] += 1;
        }
        output
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![4, -2, 2, 8, 3, 3, 1];
    println!("input:  {:?}", values);
    CountingSort::sort(&mut values);
    println!("sorted: {:?}", values);

    let words = ["bb", "a", "ccc", "dd", "e"];
    let by_length = CountingSort::sort_by_key(&words, 4, |w| w.len());
    println!("words by length: {:?}", by_length);
}
