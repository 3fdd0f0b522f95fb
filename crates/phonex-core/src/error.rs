//! Error types for parsing stored Phonex codes
//!
//! Encoding itself never fails; these only arise when a code string coming
//! back from storage or the wire is turned into a [`crate::PhonexCode`].

use thiserror::Error;

/// Errors that can occur when parsing a Phonex code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonexError {
    /// Code does not have exactly four characters
    #[error("phonex code must be 4 characters, got {0}")]
    InvalidLength(usize),

    /// A position after the lead holds something other than an ASCII digit
    #[error("phonex code position {position} must be a digit, found {found:?}")]
    InvalidDigit { position: usize, found: char },
}

/// Result type for Phonex code parsing
pub type PhonexResult<T> = Result<T, PhonexError>;
