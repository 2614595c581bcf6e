//! docmaskctl (docmask) - CLI for CPF/CNPJ masking and validation
//!
//! Formats, normalizes, and validates Brazilian taxpayer identifiers from
//! arguments or stdin.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose());

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
