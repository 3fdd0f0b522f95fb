//! Leading-form cascade
//!
//! Rewrites the start of a normalized name before coding. Every rule is
//! anchored at position 0 and fires at most once. Rules run in table order
//! and each one sees whatever the previous rules left at the front, so
//! `"hyde"` loses its `h` and the exposed `y` then becomes `a`.

/// Leading digraphs, applied before the single-letter rules.
const DIGRAPH_RULES: &[(&str, &str)] = &[("kn", "n"), ("wr", "r"), ("ph", "f")];

/// Leading letters (any of the set) and their replacement. `None` removes
/// the letter.
const LETTER_RULES: &[(&str, Option<char>)] = &[
    ("h", None),
    ("eiouy", Some('a')),
    ("kq", Some('c')),
    ("p", Some('b')),
    ("j", Some('g')),
    ("v", Some('f')),
    ("z", Some('s')),
];

/// Apply the leading-form cascade to an already normalized name.
///
/// The result is never longer than the input and at most one code point
/// shorter. Leading characters that match no rule pass through untouched.
pub fn rewrite_leading(name: &str) -> String {
    let mut out = name.to_string();

    for (digraph, replacement) in DIGRAPH_RULES {
        if out.starts_with(digraph) {
            out.replace_range(..digraph.len(), replacement);
        }
    }

    for (letters, replacement) in LETTER_RULES {
        let Some(first) = out.chars().next() else {
            break;
        };
        if !letters.contains(first) {
            continue;
        }
        match replacement {
            Some(c) => out.replace_range(..first.len_utf8(), c.encode_utf8(&mut [0; 4])),
            None => {
                out.remove(0);
            }
        }
    }

    out
}
