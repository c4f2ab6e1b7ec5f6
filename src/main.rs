//! sortItOut - sort a newline separated list of values, or time how long it takes
//!
//! Reads one value per line from a file (or stdin) and prints the sorted
//! values, one per line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};
use sort_it_out::{
    Algorithm, Dataset, SortResult, Sorter, Timing, DEFAULT_ALGORITHM, DEFAULT_REPEAT,
};

const EXIT_UNKNOWN_ALGORITHM: u8 = 2;
const EXIT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "sortItOut")]
#[command(about = "Sort values with classic algorithms and time them")]
#[command(version)]
struct Cli {
    /// Input file (one value per line). If omitted or '-' reads stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Sorting algorithm to use
    #[arg(short, long, default_value_t = DEFAULT_ALGORITHM.name().to_lowercase())]
    sort: String,

    /// Print average timing instead of values
    #[arg(long)]
    time: bool,

    /// Time every algorithm that accepts the input
    #[arg(long, conflicts_with = "time")]
    compare: bool,

    /// Repeat times for timing
    #[arg(short, long, default_value_t = DEFAULT_REPEAT)]
    repeat: usize,

    /// Print timings as JSON
    #[arg(long)]
    json: bool,

    /// List available algorithms and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if cli.list {
        for name in Algorithm::names() {
            if let Some(alg) = Algorithm::lookup(name) {
                println!("{:<10} {}", name.to_lowercase(), alg.requirement());
            }
        }
        return ExitCode::SUCCESS;
    }

    let algorithm: Algorithm = match cli.sort.parse() {
        Ok(alg) => alg,
        Err(e) => {
            println!("{}", e);
            return ExitCode::from(EXIT_UNKNOWN_ALGORITHM);
        }
    };

    let data = match read_input(cli.input.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    debug!("read {} {}", data.len(), data.kind());

    let result = if cli.compare {
        compare(&data, cli.repeat, cli.json).map_err(|e| format!("Error while timing: {}", e))
    } else if cli.time {
        time(algorithm, &data, cli.repeat, cli.json)
            .map_err(|e| format!("Error while timing: {}", e))
    } else {
        sort(algorithm, &data).map_err(|e| format!("Error while sorting: {}", e))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            println!("{}", msg);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn read_input(path: Option<&std::path::Path>) -> SortResult<Dataset> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Dataset::parse_lines(&text)
}

fn sort(algorithm: Algorithm, data: &Dataset) -> SortResult<()> {
    let sorted = algorithm.sort(data)?;
    for line in sorted.to_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn time(algorithm: Algorithm, data: &Dataset, repeat: usize, json: bool) -> SortResult<()> {
    let name = algorithm.name().to_lowercase();
    let timing = Timing::measure(name, &algorithm, data, repeat)?;
    if json {
        println!("{}", to_json(&timing)?);
    } else {
        println!("{}", timing);
    }
    Ok(())
}

fn compare(data: &Dataset, repeat: usize, json: bool) -> SortResult<()> {
    let applicable = Algorithm::ALL
        .into_iter()
        .filter(|alg| alg.accepts(data))
        .map(|alg| (alg.name().to_lowercase(), alg));
    let results = sort_it_out::compare_algorithms(applicable, data, repeat)?;

    let timings: Vec<Timing> = results
        .into_iter()
        .map(|(algorithm, seconds)| Timing { algorithm, seconds, repeat })
        .collect();

    if json {
        println!("{}", to_json(&timings)?);
    } else {
        for timing in &timings {
            println!("{}", timing);
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> SortResult<String> {
    Ok(serde_json::to_string(value)?)
}
