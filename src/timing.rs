//! Timing harness: average wall-clock time of a sorter over repeated runs.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;

use crate::error::{SortError, SortResult};
use crate::value::Dataset;
use crate::Sorter;

/// Average seconds `sorter` takes on `data` over `repeat` runs.
///
/// Every run gets a fresh copy of `data`, and only the sort call itself is
/// inside the measured window. An empty dataset reports `0.0` without
/// running. Errors from the sorter abort the measurement.
pub fn time_sort<S: Sorter + ?Sized>(sorter: &S, data: &Dataset, repeat: usize) -> SortResult<f64> {
    if repeat == 0 {
        return Err(SortError::InvalidArgument("repeat must be >= 1".into()));
    }
    if data.is_empty() {
        return Ok(0.0);
    }

    let mut total_time = Duration::ZERO;
    for run in 0..repeat {
        let input = data.clone();

        let start = Instant::now();
        let sorted = sorter.sort(&input)?;
        let elapsed = start.elapsed();

        debug!("run {}/{}: {} elements in {:?}", run + 1, repeat, sorted.len(), elapsed);
        total_time += elapsed;
    }

    Ok(total_time.as_secs_f64() / repeat as f64)
}

/// Time each named sorter on the same data; every name appears once in the result.
pub fn compare_algorithms<K, S, I>(
    algorithms: I,
    data: &Dataset,
    repeat: usize,
) -> SortResult<BTreeMap<String, f64>>
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: Sorter,
{
    let mut results = BTreeMap::new();
    for (name, sorter) in algorithms {
        let name = name.into();
        let seconds = time_sort(&sorter, data, repeat)?;
        debug!("{}: {:.6} sec", name, seconds);
        results.insert(name, seconds);
    }
    Ok(results)
}

/// One timing measurement, as reported to users
#[derive(Clone, Debug, Serialize)]
pub struct Timing {
    pub algorithm: String,
    pub seconds: f64,
    pub repeat: usize,
}

impl Timing {
    pub fn measure<S: Sorter + ?Sized>(
        name: impl Into<String>,
        sorter: &S,
        data: &Dataset,
        repeat: usize,
    ) -> SortResult<Timing> {
        Ok(Timing {
            algorithm: name.into(),
            seconds: time_sort(sorter, data, repeat)?,
            repeat,
        })
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.6} sec (avg over {} runs)",
            self.algorithm, self.seconds, self.repeat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Algorithm;

    #[test]
    fn test_zero_repeat_is_invalid() {
        let data = Dataset::Integers(vec![3, 1, 2]);
        let err = time_sort(&Algorithm::Merge, &data, 0).unwrap_err();
        assert!(matches!(err, SortError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_data_is_zero() {
        let t = time_sort(&Algorithm::Merge, &Dataset::default(), 3).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_errors_propagate() {
        let data = Dataset::Floats(vec![0.5, 2.5]);
        assert!(time_sort(&Algorithm::Radix, &data, 2).is_err());
        assert!(time_sort(&Algorithm::Bucket, &data, 2).is_err());
    }

    #[test]
    fn test_timing_display() {
        let timing = Timing {
            algorithm: "merge".into(),
            seconds: 0.0012345678,
            repeat: 3,
        };
        assert_eq!(timing.to_string(), "merge: 0.001235 sec (avg over 3 runs)");
    }
}
