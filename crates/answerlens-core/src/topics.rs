//! Per-topic expected keyword table.
//!
//! Used by the fallback scorer when a question has no reference answer. The
//! table is immutable once built: the built-in one is created on first use
//! and shared, and a replacement can be loaded from TOML at startup.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::QuestionType;

/// Topic table format version understood by this build.
pub const TOPIC_TABLE_VERSION: u32 = 1;

/// Expected keywords for one topic phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub question_type: QuestionType,
    /// Phrase matched word-by-word against the question text.
    pub topic: String,
    /// Keywords a good answer is expected to mention.
    pub keywords: Vec<String>,
}

/// Immutable mapping from (question type, topic phrase) to expected keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicKeywordTable {
    pub version: u32,
    #[serde(default)]
    pub topics: Vec<TopicEntry>,
}

const BUILTIN_HR: &[(&str, &[&str])] = &[
    (
        "Tell me about yourself",
        &["experience", "education", "skills", "background", "work", "career"],
    ),
    (
        "strengths",
        &["strength", "skill", "ability", "talent", "expertise", "proficient"],
    ),
    (
        "weaknesses",
        &["weakness", "improve", "challenge", "develop", "learn", "growth"],
    ),
    (
        "Why do you want to work here",
        &["company", "culture", "values", "opportunity", "growth", "interest"],
    ),
    (
        "Where do you see yourself",
        &["goal", "career", "future", "plan", "aspiration", "growth"],
    ),
];

const BUILTIN_TECHNICAL: &[(&str, &[&str])] = &[
    (
        "Python",
        &["python", "programming", "language", "syntax", "object-oriented", "interpreted"],
    ),
    ("list", &["mutable", "ordered", "changeable", "brackets", "[]"]),
    ("tuple", &["immutable", "ordered", "unchangeable", "parentheses", "()"]),
    (
        "SQL",
        &["database", "query", "structured", "relational", "table", "select"],
    ),
    (
        "normalization",
        &["database", "redundancy", "normal forms", "1nf", "2nf", "3nf", "integrity"],
    ),
    (
        "Flask",
        &["framework", "python", "web", "micro", "routing", "decorator"],
    ),
    (
        "REST",
        &["representational", "state", "transfer", "http", "api", "stateless", "resource"],
    ),
];

impl TopicKeywordTable {
    /// The built-in table, constructed once and shared.
    pub fn builtin() -> Arc<TopicKeywordTable> {
        static BUILTIN: OnceLock<Arc<TopicKeywordTable>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| {
            let mut topics = builtin_entries(QuestionType::Hr, BUILTIN_HR);
            topics.extend(builtin_entries(QuestionType::Technical, BUILTIN_TECHNICAL));
            Arc::new(TopicKeywordTable {
                version: TOPIC_TABLE_VERSION,
                topics,
            })
        }))
    }

    /// Entries for one question type, in table order.
    pub fn entries_for(&self, question_type: QuestionType) -> impl Iterator<Item = &TopicEntry> {
        self.topics
            .iter()
            .filter(move |e| e.question_type == question_type)
    }

    /// Check structural invariants of a loaded table.
    pub fn validate(&self) -> std::result::Result<(), LoadError> {
        if self.version != TOPIC_TABLE_VERSION {
            return Err(LoadError::UnsupportedTopicVersion {
                found: self.version,
                supported: TOPIC_TABLE_VERSION,
            });
        }
        if let Some(empty) = self.topics.iter().find(|e| e.keywords.is_empty()) {
            return Err(LoadError::EmptyTopic {
                topic: empty.topic.clone(),
            });
        }
        Ok(())
    }
}

fn builtin_entries(question_type: QuestionType, rows: &[(&str, &[&str])]) -> Vec<TopicEntry> {
    rows.iter()
        .map(|(topic, keywords)| TopicEntry {
            question_type,
            topic: topic.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

/// Intermediate TOML structure for topic table files.
#[derive(Debug, Deserialize)]
struct TomlTopicFile {
    version: u32,
    #[serde(default)]
    topics: Vec<TomlTopic>,
}

#[derive(Debug, Deserialize)]
struct TomlTopic {
    question_type: String,
    topic: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Load a topic table from a TOML file.
pub fn load_topic_table(path: &Path) -> Result<TopicKeywordTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read topic table: {}", path.display()))?;
    parse_topic_table_str(&content, path)
}

/// Parse a topic table from a TOML string.
pub fn parse_topic_table_str(content: &str, source_path: &Path) -> Result<TopicKeywordTable> {
    let parsed: TomlTopicFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let topics = parsed
        .topics
        .into_iter()
        .map(|t| {
            let question_type = t.question_type.parse().map_err(|_| {
                LoadError::UnknownQuestionType {
                    value: t.question_type.clone(),
                }
            })?;
            Ok(TopicEntry {
                question_type,
                topic: t.topic,
                keywords: t.keywords,
            })
        })
        .collect::<std::result::Result<Vec<_>, LoadError>>()
        .with_context(|| format!("invalid topic table: {}", source_path.display()))?;

    let table = TopicKeywordTable {
        version: parsed.version,
        topics,
    };
    table
        .validate()
        .with_context(|| format!("invalid topic table: {}", source_path.display()))?;
    Ok(table)
}
