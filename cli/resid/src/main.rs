//! resid - encode, decode and inspect calendar resource identifiers
//!
//! Operator tool for interpreting `urn:uuid:` calendar user addresses
//! found in stored calendar data.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbosity());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
