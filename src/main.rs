use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use bigsort::{generate_unique_sample, BigSorter, DuplicatePolicy, SampleError, SortConfig, SortError, MIN_VALUE};

#[derive(Parser, Debug)]
#[command(name = "bigsort", about = "Pigeonhole sort of a random set of unique positive integers", version)]
struct Args {
    /// Number of unique values to generate (asked for when omitted)
    size: Option<usize>,
    /// Largest value that may be generated (asked for when omitted)
    max: Option<u32>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// What to do with repeated values: collapse, reject or count
    #[arg(long, default_value_t = DuplicatePolicy::Collapse)]
    duplicates: DuplicatePolicy,
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Array size ({size}) is greater than the number of unique values in the range [{min}, {max}].")]
    Range { size: usize, min: u32, max: u32 },
    #[error("{0}")]
    Sort(#[from] SortError),
    #[error("cannot access terminal: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("'{0}' is not a valid non-negative integer")]
    NotANumber(String),
}

impl From<SampleError> for CliError {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::InvalidRange { size, min, max, .. } => CliError::Range { size, min, max },
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&args, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    let size = match args.size {
        Some(size) => size,
        None => prompt(input, out, "Enter array size: ")?,
    };
    let max = match args.max {
        Some(max) => max,
        None => prompt(input, out, "Enter max element value: ")?,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("size = {size}, max = {max}, seed = {:?}, duplicates = {}", args.seed, args.duplicates);

    let arr = generate_unique_sample(&mut rng, size, MIN_VALUE, max)?;
    writeln!(out, "Original Array: {}", join(&arr))?;

    let mut sorter = BigSorter::with_config(&arr, SortConfig::new(args.duplicates));
    sorter.sort()?;

    writeln!(out, "Compact Sorted Array: {}", join(sorter.sorted()))?;
    writeln!(out, "{sorter}")?;
    Ok(())
}

fn prompt<T: FromStr>(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<T, CliError> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::EndOfInput);
    }
    let line = line.trim();
    line.parse().map_err(|_| CliError::NotANumber(line.to_string()))
}

fn join(values: &[u32]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}
