//! Keyword extraction: normalize, tokenize, drop stop words, stem.

use std::collections::BTreeSet;

use crate::stemmer::stem;
use crate::stopwords::is_stop_word;
use crate::text::normalize;

/// Tokens of this length or shorter are discarded.
pub const MIN_KEYWORD_LEN: usize = 2;

/// A set of root-form keywords derived from one text.
pub type KeywordSet = BTreeSet<String>;

/// Extract stemmed keywords from `text`, in input order, duplicates kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|token| token.len() > MIN_KEYWORD_LEN && !is_stop_word(token))
        .map(stem)
        .collect()
}

/// Extract the distinct keywords of `text`.
pub fn keyword_set(text: &str) -> KeywordSet {
    extract_keywords(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ?! ").is_empty());
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let kws = extract_keywords("It is an OK plan to do it in Go");
        assert_eq!(kws, vec!["plan"]);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let kws = extract_keywords("Skills, more skills, and strengths!");
        assert_eq!(kws, vec!["skill", "skill", "strength"]);
    }

    #[test]
    fn idempotent_under_renormalization() {
        let text = "Tuples are IMMUTABLE; lists (by contrast) are mutable [].";
        assert_eq!(extract_keywords(&normalize(text)), extract_keywords(text));
    }

    #[test]
    fn keyword_set_removes_duplicates() {
        let set = keyword_set("database database databases");
        assert_eq!(set.len(), 1);
        assert!(set.contains("databas"));
    }
}
