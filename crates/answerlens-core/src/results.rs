//! Per-answer result records produced by the session engine.

use serde::{Deserialize, Serialize};

use crate::evaluator::ScoreBreakdown;
use crate::model::{Difficulty, EvaluationResult, QuestionType};

/// One answered question together with its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub category: String,
    pub difficulty: Difficulty,
    /// The candidate's answer, verbatim.
    pub answer: String,
    /// Whitespace-separated words in `answer`.
    pub word_count: usize,
    pub result: EvaluationResult,
    pub breakdown: ScoreBreakdown,
    /// Wall-clock time spent scoring, in microseconds.
    pub duration_us: u64,
}

impl ScoredAnswer {
    pub fn score(&self) -> f64 {
        self.result.score
    }
}
