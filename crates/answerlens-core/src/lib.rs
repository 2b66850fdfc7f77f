//! answerlens-core — interview answer evaluation.
//!
//! Scores a candidate's free-text answer to an interview question on a
//! 0-100 scale with short feedback, by comparing it against a reference
//! answer (TF-IDF similarity, keyword overlap, length) or, when there is
//! none, against expected topic keywords. On top of the evaluator sit the
//! question bank and session loaders, the concurrent session engine and the
//! interview summary.

pub mod bank;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod keywords;
pub mod length;
pub mod model;
pub mod overlap;
pub mod report;
pub mod results;
pub mod session;
pub mod stemmer;
pub mod stopwords;
pub mod summary;
pub mod text;
pub mod topics;
pub mod vector;

pub use evaluator::{evaluate, Evaluator, EvaluatorConfig};
pub use model::{EvaluationRequest, EvaluationResult, QuestionType};
