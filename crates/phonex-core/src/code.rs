//! The four-character Phonex code value

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coder::CodeBuffer;
use crate::error::{PhonexError, PhonexResult};

/// Length of every Phonex code, in characters.
pub const CODE_LEN: usize = 4;

const DIGIT_COUNT: usize = CODE_LEN - 1;

/// A formatted Phonex code: a lead character followed by three digits.
///
/// Serializes as its four-character string form (`"C365"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhonexCode {
    lead: char,
    digits: [u8; DIGIT_COUNT],
}

impl PhonexCode {
    /// Format a code buffer into exactly four characters.
    ///
    /// Missing positions are filled with `'0'` and surplus digits dropped.
    /// The lead is uppercased when it has a single-character uppercase form;
    /// characters that would expand (`ß` to `SS`) stay as they are so the
    /// code keeps its length.
    pub fn from_buffer(buffer: &CodeBuffer) -> Self {
        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, &digit) in digits.iter_mut().zip(buffer.digits()) {
            *slot = digit;
        }

        Self {
            lead: buffer.lead().map_or('0', uppercase_lead),
            digits,
        }
    }

    pub fn lead(&self) -> char {
        self.lead
    }

    /// The three digit values (0-9), zero-padded.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.digits
    }

    /// Characters of the code, lead first.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.lead).chain(self.digits.iter().map(|&d| char::from(b'0' + d)))
    }
}

fn uppercase_lead(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for PhonexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl FromStr for PhonexCode {
    type Err = PhonexError;

    fn from_str(s: &str) -> PhonexResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODE_LEN {
            return Err(PhonexError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (i, (slot, &c)) in digits.iter_mut().zip(&chars[1..]).enumerate() {
            let digit = c.to_digit(10).ok_or(PhonexError::InvalidDigit {
                position: i + 1,
                found: c,
            })?;
            *slot = digit as u8;
        }

        Ok(Self {
            lead: chars[0],
            digits,
        })
    }
}

impl TryFrom<String> for PhonexCode {
    type Error = PhonexError;

    fn try_from(value: String) -> PhonexResult<Self> {
        value.parse()
    }
}

impl From<PhonexCode> for String {
    fn from(code: PhonexCode) -> Self {
        code.to_string()
    }
}

impl PartialEq<str> for PhonexCode {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for PhonexCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coder::code_name;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pads_short_buffer() {
        let code = PhonexCode::from_buffer(&code_name("lee"));
        assert_eq!(code.to_string(), "L000");
        assert_eq!(code.digits(), [0, 0, 0]);
    }

    #[test]
    fn test_truncates_long_buffer() {
        let buffer = code_name("cristopherson");
        assert_eq!(buffer.digits(), &[6, 2, 3, 1, 2, 5]);
        assert_eq!(PhonexCode::from_buffer(&buffer).to_string(), "C623");
    }

    #[test]
    fn test_empty_buffer_is_all_zero() {
        let code = PhonexCode::from_buffer(&CodeBuffer::default());
        assert_eq!(code.to_string(), "0000");
        assert_eq!(code.lead(), '0');
    }

    #[test]
    fn test_lead_uppercasing() {
        assert_eq!(PhonexCode::from_buffer(&code_name("émile")).lead(), 'É');
        assert_eq!(PhonexCode::from_buffer(&code_name("7b")).to_string(), "7100");
        // ß has no single-character uppercase
        assert_eq!(PhonexCode::from_buffer(&code_name("ßa")).lead(), 'ß');
    }

    #[test]
    fn test_always_four_chars() {
        for name in ["", "a", "ßa", "émile", "-", "cristopherson"] {
            let code = PhonexCode::from_buffer(&code_name(name));
            assert_eq!(code.chars().count(), CODE_LEN, "{name}");
        }
    }

    #[test]
    fn test_parse() {
        let code: PhonexCode = "C365".parse().unwrap();
        assert_eq!(code.lead(), 'C');
        assert_eq!(code.digits(), [3, 6, 5]);
        assert_eq!(code, "C365");

        let code: PhonexCode = "É540".parse().unwrap();
        assert_eq!(code.to_string(), "É540");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "C36".parse::<PhonexCode>(),
            Err(PhonexError::InvalidLength(3))
        );
        assert_eq!(
            "C3650".parse::<PhonexCode>(),
            Err(PhonexError::InvalidLength(5))
        );
        assert_eq!(
            "C3x5".parse::<PhonexCode>(),
            Err(PhonexError::InvalidDigit {
                position: 2,
                found: 'x'
            })
        );
        // non-ASCII digits are rejected
        assert!("C٣65".parse::<PhonexCode>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let code = PhonexCode::from_buffer(&code_name("catherine"));
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#""C365""#);

        let back: PhonexCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<PhonexCode>(r#""C3""#).is_err());
    }
}
