//! Load error types.
//!
//! The evaluator itself never fails; these errors cover reading the files
//! around it (question banks, sessions, topic tables). Loader functions
//! return `anyhow::Result` and attach file context, with one of these as the
//! root cause when the content is well-formed TOML but semantically invalid.

use thiserror::Error;

/// Errors raised while interpreting a loaded file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A `question_type` value was neither HR nor Technical.
    #[error("unknown question type '{value}'")]
    UnknownQuestionType { value: String },

    /// A `difficulty` value was not Easy, Medium or Hard.
    #[error("unknown difficulty '{value}'")]
    UnknownDifficulty { value: String },

    /// A topic table entry carried no keywords.
    #[error("topic '{topic}' has no keywords")]
    EmptyTopic { topic: String },

    /// The topic table declares a format version this build cannot read.
    #[error("unsupported topic table version {found} (supported: {supported})")]
    UnsupportedTopicVersion { found: u32, supported: u32 },
}
