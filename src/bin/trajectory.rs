//! Generates a trajectory of i.i.d. symbols and saves it to a file.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use infodrills::trajectory::{
    empirical_frequencies, generate, write_trajectory, Categorical, ALPHABET, DEFAULT_OUT_PATH,
    DEFAULT_SAMPLE_SIZE,
};

/// Sample a symbol stream from a random categorical distribution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Size of the sample to generate
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    size: usize,

    /// Output file name
    #[arg(short, long, default_value = DEFAULT_OUT_PATH)]
    out: PathBuf,

    /// Seed for the random source; the wall clock is used when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    infodrills::logging::init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, size = args.size, "seeding generator");
    let mut rng = StdRng::seed_from_u64(seed);

    let dist = Categorical::random(&mut rng);
    tracing::debug!(probabilities = ?dist.probabilities(), "generated distribution");
    let symbols = ALPHABET.map(char::from);
    println!("Characters: {symbols:?}");
    println!("Probabilities: {:?}", dist.probabilities());

    let trajectory = generate(&dist, args.size, &mut rng);
    println!("Frequencies: {:?}", empirical_frequencies(&trajectory));

    write_trajectory(&args.out, &trajectory)?;
    println!("Generated string saved to {}", args.out.display());
    Ok(())
}
