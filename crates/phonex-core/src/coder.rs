//! Coding pass
//!
//! Walks a rewritten name code point by code point. The first character is
//! kept literally; every later character is looked up, adjusted by its
//! lookahead rule, and emitted as a digit unless it is zero or repeats the
//! last emitted digit.
//!
//! | Code | Letters           | Lookahead                              |
//! |------|-------------------|----------------------------------------|
//! | 1    | b f p v           |                                        |
//! | 2    | c g j k q s x z   |                                        |
//! | 3    | d t               | dropped before `c`                     |
//! | 4    | l                 | kept before a vowel/`y` or at the end  |
//! | 5    | m n               | absorbs a following `d` or `g`         |
//! | 6    | r                 | kept before a vowel/`y` or at the end  |
//! | 0    | everything else   |                                        |

/// Code digit for a single character; 0 means "no code".
///
/// Only lowercase Latin letters carry a code. Vowels, `h`, `w`, `y`,
/// digits, punctuation and non-Latin letters all map to 0.
#[inline]
pub fn lookup(c: char) -> u8 {
    match c {
        'b' | 'f' | 'p' | 'v' => 1,
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => 2,
        'd' | 't' => 3,
        'l' => 4,
        'm' | 'n' => 5,
        'r' => 6,
        _ => 0,
    }
}

#[inline]
pub fn is_vowel_or_y(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Output of the coding pass: the retained first character followed by
/// the emitted digits.
///
/// Digits are always in `1..=6` and no two neighbours are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBuffer {
    lead: Option<char>,
    digits: Vec<u8>,
}

impl CodeBuffer {
    /// The retained first character, `None` for an empty name.
    pub fn lead(&self) -> Option<char> {
        self.lead
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of elements, counting the lead character.
    pub fn len(&self) -> usize {
        usize::from(self.lead.is_some()) + self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lead.is_none()
    }
}

/// Run the coding pass over a rewritten name.
///
/// An m/n followed by `d` or `g` absorbs that letter: the absorbed position
/// is coded as if it held the m/n itself, which always repeats the digit
/// just emitted and is therefore suppressed. Since the stand-in is an m/n,
/// it can absorb in turn (`"ndg"` yields a single 5).
pub fn code_name(name: &str) -> CodeBuffer {
    let chars: Vec<char> = name.chars().collect();
    let Some(&lead) = chars.first() else {
        return CodeBuffer::default();
    };

    let mut digits = Vec::with_capacity(chars.len() - 1);
    let mut last_emitted = 0u8;
    let mut absorbed_as: Option<char> = None;

    for i in 1..chars.len() {
        let current = absorbed_as.take().unwrap_or(chars[i]);
        let next = chars.get(i + 1).copied();

        let effective = match lookup(current) {
            3 if next == Some('c') => 0,
            4 | 6 if !next.map_or(true, is_vowel_or_y) => 0,
            5 => {
                if matches!(next, Some('d' | 'g')) {
                    absorbed_as = Some(current);
                }
                5
            }
            code => code,
        };

        // A zero leaves last_emitted alone: vowels do not break a repeat
        if effective != 0 && effective != last_emitted {
            digits.push(effective);
            last_emitted = effective;
        }
    }

    CodeBuffer {
        lead: Some(lead),
        digits,
    }
}
