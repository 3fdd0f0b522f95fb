//! Name normalization ahead of the leading-form cascade.

/// Lowercase `name` and drop its trailing run of `'s'`.
///
/// Lowercasing is full Unicode (`str::to_lowercase`), so accented and
/// non-Latin letters fold wherever a lowercase mapping exists. The strip
/// runs after folding, so a trailing `'S'` goes as well; only ASCII `'s'`
/// is removed.
pub fn normalize(name: &str) -> String {
    let mut lower = name.to_lowercase();
    let kept = lower.trim_end_matches('s').len();
    lower.truncate(kept);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("CATHERINE"), "catherine");
        assert_eq!(normalize("McDonald"), "mcdonald");
    }

    #[test]
    fn test_strips_trailing_s_run() {
        assert_eq!(normalize("Smiths"), "smith");
        assert_eq!(normalize("Jonesss"), "jone");
        assert_eq!(normalize("SHERMANSSS"), "sherman");
    }

    #[test]
    fn test_keeps_inner_s() {
        assert_eq!(normalize("Rossi"), "rossi");
        assert_eq!(normalize("Sass a"), "sass a");
    }

    #[test]
    fn test_all_s_becomes_empty() {
        assert_eq!(normalize("sss"), "");
        assert_eq!(normalize("S"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_unicode_folding() {
        assert_eq!(normalize("ÉLODIE"), "élodie");
        assert_eq!(normalize("ΑΘΗΝΑ"), "αθηνα");
        assert_eq!(normalize("MÜLLERS"), "müller");
    }

    #[test]
    fn test_non_ascii_s_lookalike_is_kept() {
        // U+0455 CYRILLIC SMALL LETTER DZE looks like 's' but is not stripped
        assert_eq!(normalize("ab\u{0455}"), "ab\u{0455}");
    }
}
