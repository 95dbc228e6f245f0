//! Radix sort.
//!
//! LSD radix sort for unsigned integers: distribute by the
//! lowest digit, then the next, relying on per-pass stability so
//! earlier digits stay ordered. O(d * (n + b)) with d digits in
//! base b.
//!
//! - base-10 version reads like the textbook description;
//! - base-256 version peels one byte per pass (8 passes for
//!   u64), which is what practical implementations do;
//! - signed wrapper: flip the sign bit so two's-complement order
//!   matches unsigned order, sort, flip back.

/// Radix-sort exercise struct.
pub struct RadixSort;

impl RadixSort {
    /// LSD, base 10.
    pub fn sort_base10(values: &mut Vec<u64>) {
        if values.len() < 2 {
            return;
        }
        let max = values.iter().copied().max().unwrap_or(0);
        let mut divisor = 1u64;
        loop {
            let mut buckets: Vec<Vec<u64>> = vec![Vec::new(); 10];
            for &value in values.iter() {
                buckets[((value / divisor) % 10) as usize].push(value);
            }
            values.clear();
            for bucket in buckets {
                values.extend(bucket);
            }
            if divisor > max / 10 {
                break;
            }
            divisor *= 10;
        }
    }

    /// LSD, one byte per pass.
    pub fn sort_base256(values: &mut Vec<u64>) {
        if values.len() < 2 {
            return;
        }
        let mut scratch = vec![0u64; values.len()];
        for pass in 0..8 {
            let shift = pass * 8;
            // counting sort on the current byte, stable
            let mut counts = [0usize; 256];
            for &value in values.iter() {
                counts[((value >> shift) & 0xff) as usize] += 1;
            }
            let mut total = 0usize;
            for count in counts.iter_mut() {
                let here = *count;
                *count = total;
                total += here;
            }
            for &value in values.iter() {
                let byte = ((value >> shift) & 0xff) as usize;
                scratch[counts[byte]] = value;
                counts[byte] += 1;
            }
            values.copy_from_slice(&scratch);
        }
    }

    /// Signed integers via sign-bit flip.
    pub fn sort_signed(values: &mut Vec<i64>) {
        let mut flipped: Vec<u64> = values.iter().map(|&v| (v as u64) ^ (1 << 63)).collect();
        Self::sort_base256(&mut flipped);
        values.clear();
        values.extend(flipped.into_iter().map(|v| (v ^ (1 << 63)) as i64));
    }
}

/// Print sample input and output.
pub fn demo() {
    let mut values = vec![170u64, 45, 75, 90, 802, 24, 2, 66];
    println!("input:    {:?}", values);
    RadixSort::sort_base10(&mut values);
    println!("base 10:  {:?}", values);

    let mut bytes = vec![1_000_000u64, 3, 70_000, 256, 255];
    RadixSort::sort_base256(&mut bytes);
    println!("base 256: {:?}", bytes);

    let mut signed = vec![5i64, -3, 0, -9, 12];
    RadixSort::sort_signed(&mut signed);
    println!("signed:   {:?}", signed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base10_sorts() {
        let mut values = vec![170u64, 45, 75, 90, 802, 24, 2, 66];
        RadixSort::sort_base10(&mut values);
        assert_eq!(values, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_base10_and_base256_agree() {
        let cases: Vec<Vec<u64>> = vec![
            vec![170, 45, 75, 90, 802, 24, 2, 66],
            vec![],
            vec![7],
            vec![u64::MAX, 0, u64::MAX - 1, 1],
            vec![300, 1, 300, 1],
        ];
        for case in cases {
            let mut a = case.clone();
            let mut b = case.clone();
            RadixSort::sort_base10(&mut a);
            RadixSort::sort_base256(&mut b);
            assert_eq!(a, b, "diverged on {:?}", case);

            let mut expected = case.clone();
            expected.sort();
            assert_eq!(a, expected);
        }
    }

    #[test]
    fn test_signed_sort() {
        let mut values = vec![5i64, -3, 0, -9, 12, i64::MIN, i64::MAX];
        RadixSort::sort_signed(&mut values);
        assert_eq!(values, vec![i64::MIN, -9, -3, 0, 5, 12, i64::MAX]);
    }

    #[test]
    fn test_all_zeros_and_duplicates() {
        let mut values = vec![0u64, 0, 0];
        RadixSort::sort_base10(&mut values);
        assert_eq!(values, vec![0, 0, 0]);

        let mut duplicates = vec![9u64, 9, 1, 1, 9];
        RadixSort::sort_base256(&mut duplicates);
        assert_eq!(duplicates, vec![1, 1, 9, 9, 9]);
    }
}
