//! Error types for the phonex command.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for phonex command operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (stdin, stdout)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the phonex command Error.
pub type Result<T> = std::result::Result<T, Error>;
