//! TF-IDF vector similarity over a two-document corpus.
//!
//! Terms are the stemmed keywords of each text plus adjacent keyword pairs.
//! The vocabulary is shared between the two documents and capped to the most
//! frequent terms; IDF is smoothed so it never divides by zero.

use std::collections::HashMap;

use crate::keywords::extract_keywords;

/// Maximum number of terms kept in the shared vocabulary.
pub const MAX_VOCABULARY: usize = 500;

/// Unigram and bigram terms of a text, in order.
fn terms(text: &str) -> Vec<String> {
    let words = extract_keywords(text);
    let bigrams: Vec<String> = words
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();
    let mut terms = words;
    terms.extend(bigrams);
    terms
}

fn term_frequencies(terms: &[String]) -> HashMap<&str, f64> {
    let mut tf: HashMap<&str, f64> = HashMap::new();
    for term in terms {
        *tf.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    tf
}

/// Build the shared vocabulary: most frequent terms first, ties by term.
fn vocabulary<'a>(docs: &[HashMap<&'a str, f64>], cap: usize) -> Vec<&'a str> {
    let mut totals: HashMap<&'a str, f64> = HashMap::new();
    for doc in docs {
        for (&term, &count) in doc {
            *totals.entry(term).or_insert(0.0) += count;
        }
    }
    let mut ranked: Vec<(&'a str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(cap);
    ranked.into_iter().map(|(term, _)| term).collect()
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
fn idf(n_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// TF-IDF cosine similarity between two texts, in percent.
///
/// Returns `(0, false)` when neither text yields a usable term, in which case
/// the caller should not weight this score.
pub fn vector_similarity(candidate: &str, reference: &str) -> (f64, bool) {
    let candidate_terms = terms(candidate);
    let reference_terms = terms(reference);
    let docs = [
        term_frequencies(&candidate_terms),
        term_frequencies(&reference_terms),
    ];

    let vocab = vocabulary(&docs, MAX_VOCABULARY);
    if vocab.is_empty() {
        return (0.0, false);
    }

    let weights: Vec<f64> = vocab
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains_key(term)).count();
            idf(docs.len(), df)
        })
        .collect();

    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            vocab
                .iter()
                .zip(&weights)
                .map(|(term, w)| doc.get(term).copied().unwrap_or(0.0) * w)
                .collect()
        })
        .collect();

    let similarity = cosine(&vectors[0], &vectors[1]);
    ((similarity * 100.0).clamp(0.0, 100.0), true)
}
