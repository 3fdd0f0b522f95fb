//! Phonex Core Encoder
//!
//! Computes the Phonex code of a personal name: one letter followed by three
//! digits, shared by names that sound alike but are spelled differently.
//!
//! The pipeline runs in four stages, each exposed on its own:
//!
//! 1. [`normalize`] - Unicode lowercasing, trailing `s` removal
//! 2. [`rewrite_leading`] - leading digraph/letter cascade
//! 3. [`code_name`] - coding pass with lookahead and repeat suppression
//! 4. [`PhonexCode::from_buffer`] - pad or truncate to four characters
//!
//! # Features
//!
//! - `parallel` - Encode large batches on the rayon pool ([`encode_all`])
//!
//! # Example
//!
//! ```rust
//! use phonex_core::encode;
//!
//! assert_eq!(encode("Knight"), "N230");
//! assert_eq!(encode("Miller"), encode("Myler"));
//! assert_eq!(encode(""), "0000");
//! ```

pub mod batch;
pub mod code;
pub mod coder;
pub mod error;
pub mod normalize;
pub mod rewrite;

// Re-export main types at crate root
pub use batch::{encode_all, encode_names_json, EncodeInput, EncodeOutput, EncodedName};
pub use code::{PhonexCode, CODE_LEN};
pub use coder::{code_name, CodeBuffer};
pub use error::{PhonexError, PhonexResult};
pub use normalize::normalize;
pub use rewrite::rewrite_leading;

/// The Phonex encoder.
///
/// Holds no state; every call is independent, so a single value (or the
/// free function [`encode`]) can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Phonex;

impl Phonex {
    /// Encode `name` into its four-character Phonex code.
    ///
    /// Total over all inputs: the empty string (or a name that normalizes
    /// to nothing, such as `"sss"`) yields `0000`. Callers strip control
    /// characters beforehand.
    pub fn encode(&self, name: &str) -> PhonexCode {
        let normalized = normalize(name);
        let rewritten = rewrite_leading(&normalized);
        PhonexCode::from_buffer(&code_name(&rewritten))
    }
}

/// Encode `name` with the default [`Phonex`] encoder.
pub fn encode(name: &str) -> PhonexCode {
    Phonex.encode(name)
}
