//! Reading and sanitizing names
//!
//! The encoder expects callers to strip control characters, so every name
//! passes through [`sanitize`] before it is encoded.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::debug;

use crate::config::NameSource;
use crate::error::{Error, Result};

/// Remove control characters and surrounding whitespace.
///
/// Returns `None` when nothing is left.
pub fn sanitize(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read one name per line, skipping blank lines.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        match sanitize(&line?) {
            Some(name) => names.push(name),
            None => debug!(line = lineno + 1, "skipping blank line"),
        }
    }
    Ok(names)
}

/// Collect the sanitized names from the configured source.
pub fn collect_names(source: &NameSource) -> Result<Vec<String>> {
    match source {
        NameSource::Args(names) => Ok(names.iter().filter_map(|n| sanitize(n)).collect()),
        NameSource::File(path) => {
            let file = File::open(path).map_err(|source| Error::Input {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "reading names from file");
            read_names(BufReader::new(file))
        }
        NameSource::Stdin => {
            debug!("reading names from stdin");
            read_names(io::stdin().lock())
        }
    }
}
