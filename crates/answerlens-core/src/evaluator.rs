//! Score fusion: the answer evaluator.
//!
//! Combines vector similarity, keyword overlap and length appropriateness
//! into one score, or falls back to topic keywords when there is no usable
//! reference answer. Evaluation is a pure function of its inputs.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::feedback::{generate_feedback, FeedbackContext, TOO_SHORT_FEEDBACK};
use crate::length::length_score;
use crate::model::{EvaluationRequest, EvaluationResult, QuestionType};
use crate::overlap::{fallback_score, keyword_similarity};
use crate::text::{truncate_chars, word_count};
use crate::topics::TopicKeywordTable;
use crate::vector::vector_similarity;

/// Answers shorter than this (trimmed, in characters) are rejected.
pub const MIN_ANSWER_CHARS: usize = 5;
/// References must be longer than this (trimmed, in characters) to be used.
pub const MIN_REFERENCE_CHARS: usize = 10;
/// At most this many matched keywords are returned.
pub const MAX_MATCHED_KEYWORDS: usize = 10;
/// Default bound on input length before scoring.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Fusion weights when all three scores are available.
pub const VECTOR_WEIGHT: f64 = 0.5;
pub const KEYWORD_WEIGHT: f64 = 0.3;
pub const LENGTH_WEIGHT: f64 = 0.2;
/// Fusion weights when vectorization was not possible.
pub const NO_VECTOR_KEYWORD_WEIGHT: f64 = 0.6;
pub const NO_VECTOR_LENGTH_WEIGHT: f64 = 0.4;

/// Tunables for the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Candidate and reference answers are cut to this many characters.
    pub max_input_chars: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

/// Which scoring path produced the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
    /// The answer was too short to score.
    TooShort,
    /// Reference answer with vector, keyword and length scores.
    Reference,
    /// Reference answer, but vectorization failed; keyword and length only.
    ReferenceWithoutVector,
    /// No usable reference; topic keywords and absolute length.
    Fallback,
}

/// Intermediate scores behind a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub path: ScoringPath,
    /// TF-IDF cosine similarity, when it could be computed.
    pub vector: Option<f64>,
    /// Keyword overlap against the reference.
    pub keyword: Option<f64>,
    /// Length appropriateness against the reference.
    pub length: Option<f64>,
    /// Unrounded final score.
    pub fused: f64,
}

impl ScoreBreakdown {
    fn too_short() -> Self {
        Self {
            path: ScoringPath::TooShort,
            vector: None,
            keyword: None,
            length: None,
            fused: 0.0,
        }
    }
}

/// The answer evaluator.
///
/// Cheap to clone; the topic table is shared.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvaluatorConfig,
    topics: Arc<TopicKeywordTable>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default(), TopicKeywordTable::builtin())
    }
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig, topics: Arc<TopicKeywordTable>) -> Self {
        Self { config, topics }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn topics(&self) -> &TopicKeywordTable {
        &self.topics
    }

    /// Evaluate one answer.
    pub fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
        self.evaluate_with_breakdown(request).0
    }

    /// Evaluate one answer and report the intermediate scores.
    pub fn evaluate_with_breakdown(
        &self,
        request: &EvaluationRequest,
    ) -> (EvaluationResult, ScoreBreakdown) {
        let candidate = self.bounded(&request.candidate_answer, "candidate");

        if candidate.trim().chars().count() < MIN_ANSWER_CHARS {
            let result = EvaluationResult {
                score: 0.0,
                feedback: TOO_SHORT_FEEDBACK.to_string(),
                keywords_matched: Vec::new(),
            };
            return (result, ScoreBreakdown::too_short());
        }

        let reference = request
            .reference_answer
            .as_deref()
            .map(|r| self.bounded(r, "reference"))
            .filter(|r| r.trim().chars().count() > MIN_REFERENCE_CHARS);

        let (breakdown, mut matched) = match reference {
            Some(reference) => score_against_reference(candidate, reference),
            None => {
                let (score, matched) = fallback_score(
                    candidate,
                    &request.question_text,
                    request.question_type,
                    &self.topics,
                );
                let breakdown = ScoreBreakdown {
                    path: ScoringPath::Fallback,
                    vector: None,
                    keyword: None,
                    length: None,
                    fused: score,
                };
                (breakdown, matched)
            }
        };

        tracing::debug!(
            path = ?breakdown.path,
            fused = breakdown.fused,
            matched = matched.len(),
            "answer evaluated"
        );

        let feedback = generate_feedback(&FeedbackContext {
            score: breakdown.fused,
            matched: &matched,
            candidate_words: word_count(candidate),
            reference_words: reference.map(word_count),
        });

        matched.truncate(MAX_MATCHED_KEYWORDS);
        let result = EvaluationResult {
            score: round2(breakdown.fused),
            feedback,
            keywords_matched: matched,
        };
        (result, breakdown)
    }

    fn bounded<'a>(&self, text: &'a str, which: &str) -> &'a str {
        let bounded = truncate_chars(text, self.config.max_input_chars);
        if bounded.len() < text.len() {
            tracing::debug!(
                which,
                max_chars = self.config.max_input_chars,
                "input truncated before scoring"
            );
        }
        bounded
    }
}

fn score_against_reference(candidate: &str, reference: &str) -> (ScoreBreakdown, Vec<String>) {
    let (vector, vector_ok) = vector_similarity(candidate, reference);
    let (keyword, matched) = keyword_similarity(candidate, reference);
    let length = length_score(candidate, reference);

    let (path, fused) = if vector_ok {
        (
            ScoringPath::Reference,
            vector * VECTOR_WEIGHT + keyword * KEYWORD_WEIGHT + length * LENGTH_WEIGHT,
        )
    } else {
        (
            ScoringPath::ReferenceWithoutVector,
            keyword * NO_VECTOR_KEYWORD_WEIGHT + length * NO_VECTOR_LENGTH_WEIGHT,
        )
    };

    let breakdown = ScoreBreakdown {
        path,
        vector: vector_ok.then_some(vector),
        keyword: Some(keyword),
        length: Some(length),
        fused: fused.clamp(0.0, 100.0),
    };
    (breakdown, matched)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate one answer with the default evaluator and built-in topic table.
pub fn evaluate(
    question_text: &str,
    candidate_answer: &str,
    question_type: QuestionType,
    reference_answer: Option<&str>,
) -> EvaluationResult {
    static DEFAULT: OnceLock<Evaluator> = OnceLock::new();
    let request = EvaluationRequest {
        question_text: question_text.to_string(),
        candidate_answer: candidate_answer.to_string(),
        question_type,
        reference_answer: reference_answer.map(str::to_string),
    };
    DEFAULT.get_or_init(Evaluator::default).evaluate(&request)
}
