//! Text normalization and word counting.
//!
//! Scoring always works on normalized copies; word counts are taken from the
//! verbatim text so that punctuation-heavy answers are measured the way the
//! candidate wrote them.

/// Normalize text for analysis.
///
/// Lowercases, replaces every character outside `[A-Za-z0-9\s]` with a space,
/// collapses whitespace runs to a single space and trims both ends.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Number of whitespace-separated words in the verbatim text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Cut `text` to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(
            normalize("  Lists are MUTABLE, tuples aren't!  "),
            "lists are mutable tuples aren t"
        );
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("a\t\tb\n\n c"), "a b c");
    }

    #[test]
    fn normalize_empty_and_symbol_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("[]() -- !!"), "");
    }

    #[test]
    fn normalize_output_alphabet() {
        let inputs = [
            "Héllo, wörld! 42 times…",
            "\u{00A0}leading nbsp and trailing tab\t",
            "SQL: SELECT * FROM t;",
            "   ",
        ];
        for input in inputs {
            let out = normalize(input);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '),
                "unexpected char in {out:?}"
            );
            assert!(!out.contains("  "), "double space in {out:?}");
            assert_eq!(out.trim(), out);
        }
    }

    #[test]
    fn word_count_uses_verbatim_text() {
        assert_eq!(word_count("uses square brackets []."), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   one  "), 1);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
