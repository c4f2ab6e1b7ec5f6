//! SortItOut
//!
//! Classic in-memory sorting algorithms, a registry to pick them by name,
//! and a small harness to time and compare them.

pub mod comparison;
pub mod distribution;
pub mod error;
pub mod registry;
pub mod timing;
pub mod value;

pub use comparison::{
    bubble_sort, cocktail_sort, comb_sort, gnome_sort, heap_sort, insertion_sort, merge_sort,
    quick_sort, selection_sort, shell_sort,
};
pub use distribution::{bucket_sort, counting_sort, radix_sort};
pub use error::{SortError, SortResult};
pub use registry::Algorithm;
pub use timing::{compare_algorithms, time_sort, Timing};
pub use value::{Dataset, Value};

/// Repetitions used by the timing front ends when none are given
pub const DEFAULT_REPEAT: usize = 3;

/// Algorithm used when none is named
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Merge;

/// Trait for sorting implementations
pub trait Sorter {
    /// Return a sorted copy of `data` in ascending order
    fn sort(&self, data: &Dataset) -> SortResult<Dataset>;
}

/// Any function over datasets can be timed and compared like a registry entry
impl<F> Sorter for F
where
    F: Fn(&Dataset) -> SortResult<Dataset>,
{
    fn sort(&self, data: &Dataset) -> SortResult<Dataset> {
        self(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn sorted_copy(data: &[i64]) -> Vec<i64> {
        let mut expected = data.to_vec();
        expected.sort();
        expected
    }

    fn test_sorter<S: Sorter>(sorter: &S) {
        let cases: Vec<Vec<i64>> = vec![
            // Empty
            vec![],
            // Single element
            vec![42],
            // Two elements
            vec![5, 3],
            // Already sorted
            (0..100).collect(),
            // Reverse sorted
            (0..100).rev().collect(),
            // All same
            vec![7; 100],
            // Negatives and duplicates
            vec![3, -1, 4, -1, 5, -9, 2, 6, 5, -3, 5],
        ];

        for case in cases {
            let out = sorter.sort(&Dataset::Integers(case.clone())).unwrap();
            assert_eq!(out, Dataset::Integers(sorted_copy(&case)));
        }

        // Random
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        let random: Vec<i64> = (0..1000).map(|_| rng.gen_range(-10_000..10_000)).collect();
        let out = sorter.sort(&Dataset::Integers(random.clone())).unwrap();
        assert_eq!(out, Dataset::Integers(sorted_copy(&random)));
    }

    #[test]
    fn test_scenario_every_comparison_sort() {
        let data = Dataset::Integers(vec![5, 3, 8, 1, 9, 2]);
        for alg in Algorithm::ALL {
            if alg == Algorithm::Bucket {
                continue;
            }
            let out = alg.sort(&data).unwrap();
            assert_eq!(out, Dataset::Integers(vec![1, 2, 3, 5, 8, 9]), "{alg}");
        }
    }

    #[test]
    fn test_closure_sorter() {
        let merge_ints = |data: &Dataset| -> SortResult<Dataset> {
            match data {
                Dataset::Integers(v) => Ok(Dataset::Integers(merge_sort(v))),
                other => Ok(other.clone()),
            }
        };
        test_sorter(&merge_ints);
    }

    #[test]
    fn test_bubble() {
        test_sorter(&Algorithm::Bubble);
    }

    #[test]
    fn test_quick() {
        test_sorter(&Algorithm::Quick);
    }

    #[test]
    fn test_merge() {
        test_sorter(&Algorithm::Merge);
    }

    #[test]
    fn test_selection() {
        test_sorter(&Algorithm::Selection);
    }

    #[test]
    fn test_insertion() {
        test_sorter(&Algorithm::Insertion);
    }

    #[test]
    fn test_heap() {
        test_sorter(&Algorithm::Heap);
    }

    #[test]
    fn test_shell() {
        test_sorter(&Algorithm::Shell);
    }

    #[test]
    fn test_counting() {
        test_sorter(&Algorithm::Counting);
    }

    #[test]
    fn test_radix() {
        test_sorter(&Algorithm::Radix);
    }

    #[test]
    fn test_comb() {
        test_sorter(&Algorithm::Comb);
    }

    #[test]
    fn test_cocktail() {
        test_sorter(&Algorithm::Cocktail);
    }

    #[test]
    fn test_gnome() {
        test_sorter(&Algorithm::Gnome);
    }

    #[test]
    fn test_bucket() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(54321);
        let random: Vec<f64> = (0..1000).map(|_| rng.gen::<f64>()).collect();
        let out = Algorithm::Bucket.sort(&Dataset::Floats(random)).unwrap();
        assert!(out.is_sorted());
        assert_eq!(out.len(), 1000);
    }
}
