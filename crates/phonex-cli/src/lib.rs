//! Phonex command-line front end
//!
//! Reads names from arguments, a file or stdin, strips control characters,
//! and prints each name with its Phonex code.
//!
//! ```text
//! phonex Catherine Katherine
//! phonex --input names.txt --format json
//! cat names.txt | RUST_LOG=debug phonex
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

use std::io::{self, Write};
use std::time::Instant;

use phonex_core::{encode_all, EncodedName};
use tracing::{debug, info};

pub use config::{Args, CliConfig, NameSource, OutputFormat};
pub use error::{Error, Result};

/// Encode every configured name and write the results to `out`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<usize> {
    let start = Instant::now();

    let names = input::collect_names(&config.source)?;
    let codes = encode_all(&names);

    let records: Vec<EncodedName> = names
        .into_iter()
        .zip(codes)
        .map(|(name, code)| {
            debug!(%name, %code, "encoded");
            EncodedName { name, code }
        })
        .collect();

    output::write_records(out, &records, config.format)?;

    info!(
        count = records.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "encoded names"
    );
    Ok(records.len())
}

/// Run against stdout.
pub fn run_stdout(config: &CliConfig) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(config, &mut out)
}
