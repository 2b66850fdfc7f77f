//! Core data model types for answerlens.
//!
//! These are the fundamental types shared by the evaluator, the question
//! bank and session loaders, and the report renderers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of interview question being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "HR", alias = "hr")]
    Hr,
    #[serde(rename = "Technical", alias = "technical")]
    Technical,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::Hr => write!(f, "HR"),
            QuestionType::Technical => write!(f, "Technical"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hr" => Ok(QuestionType::Hr),
            "technical" | "tech" => Ok(QuestionType::Technical),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// How hard a question is considered to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One candidate answer to be scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The interview question as asked.
    pub question_text: String,
    /// The candidate's answer, verbatim.
    pub candidate_answer: String,
    /// HR or Technical.
    pub question_type: QuestionType,
    /// Ideal answer to compare against, when the question bank has one.
    #[serde(default)]
    pub reference_answer: Option<String>,
}

impl EvaluationRequest {
    pub fn new(
        question_text: impl Into<String>,
        candidate_answer: impl Into<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            candidate_answer: candidate_answer.into(),
            question_type,
            reference_answer: None,
        }
    }

    /// Attach a reference answer.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_answer = Some(reference.into());
        self
    }
}

/// The outcome of evaluating one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Final score in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// Human-readable feedback assembled from fixed sentence templates.
    pub feedback: String,
    /// Matched keywords (root forms), at most ten.
    pub keywords_matched: Vec<String>,
}

/// A question from a question bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within its bank.
    pub id: String,
    /// The question as asked.
    pub text: String,
    pub question_type: QuestionType,
    /// Topic area used for per-category breakdowns.
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Ideal answer, if one has been written.
    #[serde(default)]
    pub reference_answer: Option<String>,
}

pub(crate) fn default_category() -> String {
    "General".to_string()
}

/// A collection of interview questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A single submitted answer within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionAnswer {
    /// Id of the answered question in the bank.
    pub question_id: String,
    /// The candidate's answer, verbatim.
    pub answer: String,
}

/// One interview attempt: the answers a candidate gave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Name or handle of the candidate.
    #[serde(default)]
    pub candidate: String,
    #[serde(default)]
    pub answers: Vec<SessionAnswer>,
}
