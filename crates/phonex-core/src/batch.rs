//! Batch encoding and the JSON entry point.
//!
//! `encode_all` encodes many names at once, fanning out to rayon for large
//! batches when the `parallel` feature is on. `encode_names_json` wraps it
//! in a JSON-in/JSON-out call for hosts that cannot link Rust types
//! directly (WASM, FFI).

use serde::{Deserialize, Serialize};

use crate::{encode, PhonexCode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batches at least this large are encoded in parallel.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Encode every name, preserving input order.
pub fn encode_all<S: AsRef<str> + Sync>(names: &[S]) -> Vec<PhonexCode> {
    #[cfg(feature = "parallel")]
    {
        if names.len() >= PARALLEL_THRESHOLD {
            return names.par_iter().map(|n| encode(n.as_ref())).collect();
        }
    }

    names.iter().map(|n| encode(n.as_ref())).collect()
}

/// A name paired with its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedName {
    pub name: String,
    pub code: PhonexCode,
}

impl EncodedName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let code = encode(&name);
        Self { name, code }
    }
}

/// Input for the encode_names JSON function.
#[derive(Debug, Deserialize)]
pub struct EncodeInput {
    pub names: Vec<String>,
}

/// Output of the encode_names JSON function.
#[derive(Debug, Serialize)]
pub struct EncodeOutput {
    pub codes: Vec<PhonexCode>,
    pub total: usize,
}

/// JSON entry point: deserialize names, encode, serialize codes.
///
/// Malformed input yields `{"error": "..."}` rather than a panic.
pub fn encode_names_json(input: &str) -> String {
    let parsed: EncodeInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid encode input: {}", e)),
    };

    let codes = encode_all(&parsed.names);
    let total = codes.len();

    match serde_json::to_string(&EncodeOutput { codes, total }) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

fn error_json(message: String) -> String {
    serde_json::json!({ "error": message }).to_string()
}
