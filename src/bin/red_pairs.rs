//! How many different five-card hands containing two red pairs can be
//! dealt from a standard deck?

use std::io::{self, BufRead, Write};

use clap::Parser;

use infodrills::cards::red_pairs;

/// Closed-form count of five-card hands holding two red pairs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    infodrills::logging::init();

    println!(
        "How many different five-card hands containing two red pairs can be dealt from a standard deck?\n"
    );

    let count = red_pairs();
    tracing::debug!(?count, "evaluated closed form");
    println!("{count}");

    print!("\nPress any key to continue...");
    io::stdout().flush()?;
    io::stdin().lock().read_line(&mut String::new())?;
    Ok(())
}
