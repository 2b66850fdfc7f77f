//! Lexical overlap scoring.
//!
//! Two modes: against a reference answer's keyword set, or, when no
//! reference exists, against the expected keywords of the matching topics.

use std::collections::HashSet;

use crate::keywords::{extract_keywords, keyword_set};
use crate::model::QuestionType;
use crate::stemmer::stem;
use crate::text::{normalize, word_count};
use crate::topics::TopicKeywordTable;

/// Share of the fallback score carried by keyword coverage.
pub const FALLBACK_KEYWORD_WEIGHT: f64 = 0.6;
/// Share of the fallback score carried by answer length.
pub const FALLBACK_LENGTH_WEIGHT: f64 = 0.4;

/// Keyword coverage of `reference` by `candidate`, in percent.
///
/// Returns `(0, [])` when the reference has no keywords. Matched keywords are
/// returned in lexicographic order.
pub fn keyword_similarity(candidate: &str, reference: &str) -> (f64, Vec<String>) {
    let reference_set = keyword_set(reference);
    if reference_set.is_empty() {
        return (0.0, Vec::new());
    }
    let candidate_set = keyword_set(candidate);

    let matched: Vec<String> = reference_set
        .intersection(&candidate_set)
        .cloned()
        .collect();
    let score = 100.0 * matched.len() as f64 / reference_set.len() as f64;
    (score, matched)
}

/// Stemmed expected keywords for a question with no reference answer.
///
/// Topics whose phrase shares a word with the question contribute their
/// keywords; if none do, every topic of the question type contributes.
/// Words are compared in stemmed form, so "lists" selects the "list" topic.
pub fn expected_keywords(
    question_text: &str,
    question_type: QuestionType,
    table: &TopicKeywordTable,
) -> Vec<String> {
    let question_stems = word_stems(question_text);

    let mut expected: Vec<&String> = table
        .entries_for(question_type)
        .filter(|entry| {
            word_stems(&entry.topic)
                .iter()
                .any(|word| question_stems.contains(word))
        })
        .flat_map(|entry| entry.keywords.iter())
        .collect();

    if expected.is_empty() {
        expected = table
            .entries_for(question_type)
            .flat_map(|entry| entry.keywords.iter())
            .collect();
    }

    expected
        .into_iter()
        .map(|keyword| stem(&keyword.to_lowercase()))
        .collect()
}

fn word_stems(text: &str) -> HashSet<String> {
    normalize(text).split_whitespace().map(stem).collect()
}

/// Word-count based completeness used when no reference answer exists.
pub fn absolute_length_score(words: usize) -> f64 {
    if words < 10 {
        words as f64 * 5.0
    } else if words > 200 {
        100.0
    } else {
        (50.0 + (words - 10) as f64 * 0.5).min(100.0)
    }
}

/// Score an answer against the topic table when no reference is available.
///
/// Matched keywords keep candidate order and may repeat.
pub fn fallback_score(
    candidate: &str,
    question_text: &str,
    question_type: QuestionType,
    table: &TopicKeywordTable,
) -> (f64, Vec<String>) {
    let expected = expected_keywords(question_text, question_type, table);
    let expected_lookup: HashSet<&str> = expected.iter().map(String::as_str).collect();

    let matched: Vec<String> = extract_keywords(candidate)
        .into_iter()
        .filter(|kw| expected_lookup.contains(kw.as_str()))
        .collect();

    let keyword_score = if expected.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f64 / expected.len() as f64
    };
    let length_score = absolute_length_score(word_count(candidate));

    let score = (keyword_score * FALLBACK_KEYWORD_WEIGHT + length_score * FALLBACK_LENGTH_WEIGHT)
        .clamp(0.0, 100.0);
    (score, matched)
}
