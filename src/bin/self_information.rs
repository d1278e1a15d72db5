//! Self-information and entropy of a data set entered on standard input.

use std::io;

use clap::Parser;

use infodrills::console::Terminal;
use infodrills::session;

/// Interactive self-information and entropy calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    infodrills::logging::init();

    let mut console = Terminal::new(io::stdin().lock(), io::stdout());
    session::run(&mut console)?;
    Ok(())
}
