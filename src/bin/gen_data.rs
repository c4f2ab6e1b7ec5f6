//! Generate a random integer data file for sortItOut
//!
//! Writes `count` integers drawn uniformly from `[min, max]`, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use sort_it_out::{SortError, SortResult};

const EXIT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "gen_data")]
#[command(about = "Generate random integer data file")]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = "data.txt")]
    output: PathBuf,

    /// Number of integers to generate
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,

    /// Minimum integer (inclusive)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min: i64,

    /// Maximum integer (inclusive)
    #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
    max: i64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn write_data<R: Rng, W: Write>(rng: &mut R, out: &mut W, args: &Args) -> SortResult<()> {
    for _ in 0..args.count {
        writeln!(out, "{}", rng.gen_range(args.min..=args.max))?;
    }
    Ok(())
}

fn check_range(min: i64, max: i64) -> SortResult<()> {
    if min > max {
        return Err(SortError::InvalidArgument(format!(
            "--min {} is greater than --max {}",
            min, max
        )));
    }
    Ok(())
}

fn run(args: &Args) -> SortResult<()> {
    check_range(args.min, args.max)?;

    let mut writer = BufWriter::new(File::create(&args.output)?);
    match args.seed {
        Some(seed) => write_data(&mut Xoshiro256PlusPlus::seed_from_u64(seed), &mut writer, args)?,
        None => write_data(&mut rand::thread_rng(), &mut writer, args)?,
    }
    writer.flush()?;

    info!("wrote {} values to {}", args.count, args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
