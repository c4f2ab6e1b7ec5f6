//! Non-comparison sorts with a restricted element type.
//!
//! Counting and radix sort only take integers, bucket sort only takes floats
//! pre-scaled into `[0, 1)`. The element type is part of each signature; range
//! preconditions are checked over the whole input before any work starts.

use crate::comparison::insertion_sort_in_place;
use crate::error::{SortError, SortResult};

/// Counting sort over the value span `min..=max`, offset so negatives work.
///
/// Memory is proportional to `max - min`. A span that cannot be allocated is
/// reported as [`SortError::RangeTooLarge`].
pub fn counting_sort(data: &[i64]) -> SortResult<Vec<i64>> {
    let (Some(&min), Some(&max)) = (data.iter().min(), data.iter().max()) else {
        return Ok(Vec::new());
    };

    let span = i128::from(max) - i128::from(min) + 1;
    let len = usize::try_from(span).map_err(|_| SortError::RangeTooLarge { min, max })?;

    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(len)
        .map_err(|_| SortError::RangeTooLarge { min, max })?;
    counts.resize(len, 0);

    for &value in data {
        counts[(i128::from(value) - i128::from(min)) as usize] += 1;
    }

    let mut out = Vec::with_capacity(data.len());
    for (offset, &count) in counts.iter().enumerate() {
        if count > 0 {
            let value = (i128::from(min) + offset as i128) as i64;
            out.extend(std::iter::repeat(value).take(count));
        }
    }
    Ok(out)
}

/// LSD radix sort, base 10, on absolute values.
///
/// Negatives are sorted by magnitude separately, then reversed and negated
/// and placed in front of the non-negatives.
pub fn radix_sort(data: &[i64]) -> Vec<i64> {
    let (negatives, non_negatives): (Vec<i64>, Vec<i64>) = data.iter().partition(|&&v| v < 0);

    let magnitudes: Vec<u64> = negatives.iter().map(|v| v.unsigned_abs()).collect();
    let mut out: Vec<i64> = radix_sort_lsd(magnitudes)
        .into_iter()
        .rev()
        // 2^63 wraps back to i64::MIN, every other magnitude negates exactly
        .map(|m| (m as i64).wrapping_neg())
        .collect();

    let magnitudes: Vec<u64> = non_negatives.iter().map(|&v| v as u64).collect();
    out.extend(radix_sort_lsd(magnitudes).into_iter().map(|m| m as i64));
    out
}

fn radix_sort_lsd(mut values: Vec<u64>) -> Vec<u64> {
    let Some(&max) = values.iter().max() else {
        return values;
    };

    let mut buffer = vec![0u64; values.len()];
    let mut exp: u64 = 1;

    while max / exp > 0 {
        let mut counts = [0usize; 10];

        // Count occurrences
        for &value in values.iter() {
            counts[((value / exp) % 10) as usize] += 1;
        }

        // Compute prefix sums
        let mut sum = 0;
        for count in counts.iter_mut() {
            let temp = *count;
            *count = sum;
            sum += temp;
        }

        // Distribute elements
        for &value in values.iter() {
            let digit = ((value / exp) % 10) as usize;
            buffer[counts[digit]] = value;
            counts[digit] += 1;
        }

        std::mem::swap(&mut values, &mut buffer);

        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
    values
}

/// Bucket sort for floats in `[0.0, 1.0)`.
///
/// Uses `n` buckets; a value goes to bucket `floor(x * n)` clamped to `n - 1`.
/// Each bucket is insertion sorted and the buckets are concatenated in order.
pub fn bucket_sort(data: &[f64]) -> SortResult<Vec<f64>> {
    if let Some(&value) = data.iter().find(|x| !(0.0..1.0).contains(*x)) {
        return Err(SortError::OutOfRange { value });
    }

    let n = data.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &value in data {
        let idx = ((value * n as f64) as usize).min(n - 1);
        buckets[idx].push(value);
    }

    let mut out = Vec::with_capacity(n);
    for mut bucket in buckets {
        insertion_sort_in_place(&mut bucket);
        out.extend(bucket);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sort_negatives() {
        let out = counting_sort(&[-3, -1, -2, 0, 5]).unwrap();
        assert_eq!(out, vec![-3, -2, -1, 0, 5]);
    }

    #[test]
    fn test_counting_sort_duplicates() {
        let out = counting_sort(&[4, 1, 4, 1, 4]).unwrap();
        assert_eq!(out, vec![1, 1, 4, 4, 4]);
    }

    #[test]
    fn test_counting_sort_rejects_huge_span() {
        let err = counting_sort(&[i64::MIN, i64::MAX]).unwrap_err();
        assert!(matches!(err, SortError::RangeTooLarge { .. }));
    }

    #[test]
    fn test_radix_sort_mixed_signs() {
        let out = radix_sort(&[170, -45, 75, -90, 802, 24, 2, 66, 0, -1]);
        assert_eq!(out, vec![-90, -45, -1, 0, 2, 24, 66, 75, 170, 802]);
    }

    #[test]
    fn test_radix_sort_extremes() {
        let out = radix_sort(&[i64::MAX, 0, i64::MIN, -1, 1]);
        assert_eq!(out, vec![i64::MIN, -1, 0, 1, i64::MAX]);
    }

    #[test]
    fn test_bucket_sort_scenario() {
        let input = [0.78, 0.17, 0.39, 0.26, 0.72, 0.94, 0.21, 0.12, 0.23, 0.68];
        let out = bucket_sort(&input).unwrap();
        assert_eq!(
            out,
            vec![0.12, 0.17, 0.21, 0.23, 0.26, 0.39, 0.68, 0.72, 0.78, 0.94]
        );
    }

    #[test]
    fn test_bucket_sort_rejects_out_of_range() {
        let err = bucket_sort(&[0.2, 1.5, 0.1]).unwrap_err();
        assert!(matches!(err, SortError::OutOfRange { value } if value == 1.5));

        assert!(bucket_sort(&[1.0]).is_err());
        assert!(bucket_sort(&[-0.1]).is_err());
        assert!(bucket_sort(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(counting_sort(&[]).unwrap().is_empty());
        assert!(radix_sort(&[]).is_empty());
        assert!(bucket_sort(&[]).unwrap().is_empty());
    }
}
