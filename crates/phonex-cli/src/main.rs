//! Phonex - Main Entry Point
//!
//! Usage:
//!     phonex Catherine Katherine
//!     phonex --input names.txt --format json

use clap::Parser;
use phonex_cli::{logging, run_stdout, Args, CliConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = CliConfig::from_args(args)?;

    logging::init(config.log_level);
    info!("Starting phonex v{}", env!("CARGO_PKG_VERSION"));

    run_stdout(&config)?;

    Ok(())
}
