//! Length-appropriateness scoring against a reference answer.

use crate::text::word_count;

/// Score returned when the reference has no words to compare against.
pub const NEUTRAL_LENGTH_SCORE: f64 = 50.0;

/// Map a candidate/reference word-count ratio onto `[0, 100]`.
///
/// Under 0.3 the score falls steeply; over 2.0 it falls gently; in between
/// it rises to 100 at ratio 1.0 and stays there.
pub fn ratio_score(ratio: f64) -> f64 {
    let score = if ratio < 0.3 {
        ratio * 60.0
    } else if ratio > 2.0 {
        100.0 - (ratio - 2.0) * 10.0
    } else {
        50.0 + ratio.min(1.0) * 50.0
    };
    score.clamp(0.0, 100.0)
}

/// Completeness of `candidate` relative to the length of `reference`.
pub fn length_score(candidate: &str, reference: &str) -> f64 {
    let reference_words = word_count(reference);
    if reference_words == 0 {
        return NEUTRAL_LENGTH_SCORE;
    }
    ratio_score(word_count(candidate) as f64 / reference_words as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length_is_full_marks() {
        assert_eq!(ratio_score(1.0), 100.0);
        assert_eq!(length_score("one two three", "four five six"), 100.0);
    }

    #[test]
    fn empty_reference_is_neutral() {
        assert_eq!(length_score("anything at all", ""), 50.0);
        assert_eq!(length_score("anything", "   "), 50.0);
    }

    #[test]
    fn strictly_decreasing_outside_band() {
        assert!(ratio_score(0.29) > ratio_score(0.2));
        assert!(ratio_score(0.2) > ratio_score(0.1));
        assert!(ratio_score(2.5) > ratio_score(3.0));
        assert!(ratio_score(3.0) > ratio_score(8.0));
    }

    #[test]
    fn always_within_bounds() {
        for i in 0..=400 {
            let ratio = i as f64 * 0.1;
            let s = ratio_score(ratio);
            assert!((0.0..=100.0).contains(&s), "ratio {ratio} -> {s}");
        }
        assert_eq!(ratio_score(50.0), 0.0);
    }

    #[test]
    fn band_values() {
        assert!((ratio_score(0.5) - 75.0).abs() < 1e-9);
        assert!((ratio_score(0.1) - 6.0).abs() < 1e-9);
        assert_eq!(ratio_score(2.0), 100.0);
        assert!((ratio_score(3.0) - 90.0).abs() < 1e-9);
    }
}
