//! Command-line arguments and the validated run configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::error::{Error, Result};

/// Output format for encoded names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `NAME<TAB>CODE`, one per line
    #[default]
    Text,
    /// JSON array of `{"name", "code"}` records
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "phonex")]
#[command(about = "Compute Phonex codes for personal names")]
#[command(version)]
pub struct Args {
    /// Names to encode (reads --input or stdin when none are given)
    pub names: Vec<String>,

    /// File with one name per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where the names to encode come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

/// Validated configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub source: NameSource,
    pub format: OutputFormat,
    /// Default log level; `RUST_LOG` takes precedence when set
    pub log_level: Level,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source: NameSource::Stdin,
            format: OutputFormat::Text,
            log_level: Level::WARN,
        }
    }
}

impl CliConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = args
            .log_level
            .parse::<Level>()
            .map_err(|_| Error::Config(format!("unknown log level '{}'", args.log_level)))?;

        let source = match (args.names.is_empty(), args.input) {
            (false, Some(_)) => {
                return Err(Error::Config(
                    "names and --input cannot be used together".to_string(),
                ))
            }
            (false, None) => NameSource::Args(args.names),
            (true, Some(path)) => NameSource::File(path),
            (true, None) => NameSource::Stdin,
        };

        Ok(Self {
            source,
            format: args.format,
            log_level,
        })
    }
}
