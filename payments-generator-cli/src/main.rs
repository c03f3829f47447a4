use std::convert::TryFrom;
use std::io::{self, BufWriter};
use std::process;

use chrono::Utc;
use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use payments_generator::error::GeneratorError;
use payments_generator::generator::{Generator, RecordsCount};

/// Prints SQL inserts for synthetic `payment` and `vehicle_entrant_payment` rows
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The number of payments to generate, each with 2 to 10 vehicle entrant payments
    #[clap(long = "recordsCnt")]
    pub(crate) records_cnt: Option<u64>,

    /// Seed for the random source. Without it every run draws fresh, unseeded randomness
    /// like the original generator script
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let count = RecordsCount::try_from(cli.records_cnt)?;

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    let now = Utc::now();

    match cli.seed {
        Some(seed) => {
            debug!("Using seed {}", seed);
            Generator::new(StdRng::seed_from_u64(seed), now).write_records(count, writer)
        }
        None => Generator::new(thread_rng(), now).write_records(count, writer),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
