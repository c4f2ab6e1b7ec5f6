use std::collections::BTreeMap;
use std::process::ExitCode;

use log::LevelFilter;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use sort_it_out::{compare_algorithms, Algorithm, Dataset, SortError, SortResult, Sorter};

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    avg_seconds: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    array_size: usize,
    repeat: usize,
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

const BENCH_ITERATIONS: usize = 5;
const ARRAY_SIZE: usize = 2000;
const SEED: u64 = 12345;
const EXIT_FAILURE: u8 = 3;

fn generate_integers(seed: u64, size: usize) -> Dataset {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    Dataset::Integers((0..size).map(|_| rng.gen_range(-1_000_000..=1_000_000)).collect())
}

fn generate_unit_floats(seed: u64, size: usize) -> Dataset {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    Dataset::Floats((0..size).map(|_| rng.gen::<f64>()).collect())
}

fn recorded(timings: &BTreeMap<String, f64>, name: &str) -> SortResult<f64> {
    timings
        .get(name)
        .copied()
        .ok_or_else(|| SortError::InvalidArgument(format!("no timing recorded for {}", name)))
}

fn verify_sort<S: Sorter>(sorter: &S, data: &Dataset) -> bool {
    match sorter.sort(data) {
        Ok(sorted) => sorted.len() == data.len() && sorted.is_sorted(),
        Err(_) => false,
    }
}

/// Time every algorithm that accepts `data` and check its output
fn benchmark_dataset(data: &Dataset, results: &mut Vec<BenchmarkResult>) -> SortResult<bool> {
    let applicable: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|alg| alg.accepts(data))
        .collect();

    let timings = compare_algorithms(
        applicable.iter().map(|alg| (alg.name().to_lowercase(), *alg)),
        data,
        BENCH_ITERATIONS,
    )?;

    let mut all_correct = true;
    for alg in applicable {
        let name = alg.name().to_lowercase();
        let correct = verify_sort(&alg, data);
        all_correct &= correct;
        results.push(BenchmarkResult {
            avg_seconds: recorded(&timings, &name)?,
            name,
            correct,
        });
    }
    Ok(all_correct)
}

fn run() -> SortResult<FullResults> {
    let mut results = Vec::new();
    let mut all_correct = true;

    // Integer data covers every algorithm except bucket sort
    all_correct &= benchmark_dataset(&generate_integers(SEED, ARRAY_SIZE), &mut results)?;

    // Bucket sort only takes floats in [0, 1)
    let floats = generate_unit_floats(SEED, ARRAY_SIZE);
    let bucket = Algorithm::Bucket;
    let timings = compare_algorithms([("bucket", bucket)], &floats, BENCH_ITERATIONS)?;
    let correct = verify_sort(&bucket, &floats);
    all_correct &= correct;
    results.push(BenchmarkResult {
        name: "bucket".into(),
        avg_seconds: recorded(&timings, "bucket")?,
        correct,
    });

    Ok(FullResults {
        array_size: ARRAY_SIZE,
        repeat: BENCH_ITERATIONS,
        results,
        correctness: all_correct,
    })
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run().and_then(|full| serde_json::to_string(&full).map_err(SortError::from)) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark_dataset_reports_every_applicable_algorithm() {
        let mut results = Vec::new();
        let correct = benchmark_dataset(&generate_integers(SEED, 200), &mut results).unwrap();
        assert!(correct);
        // Everything but bucket sort takes integers
        assert_eq!(results.len(), Algorithm::ALL.len() - 1);
        assert!(results.iter().all(|r| r.correct && r.avg_seconds >= 0.0));
    }

    #[test]
    fn test_recorded_missing_name_is_an_error() {
        let timings = BTreeMap::from([("merge".to_string(), 0.25)]);
        assert_eq!(recorded(&timings, "merge").unwrap(), 0.25);
        assert!(matches!(
            recorded(&timings, "bucket"),
            Err(SortError::InvalidArgument(_))
        ));
    }
}
