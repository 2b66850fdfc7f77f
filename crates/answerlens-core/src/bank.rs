//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::LoadError;
use crate::evaluator::MIN_REFERENCE_CHARS;
use crate::model::{default_category, Difficulty, Question, QuestionBank, QuestionType};

/// The built-in bank shipped with answerlens.
pub const BUILTIN_BANK: &str = include_str!("../../../question-banks/default.toml");

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    question_type: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    reference_answer: Option<String>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let question_type: QuestionType = q.question_type.parse().map_err(|_| {
                LoadError::UnknownQuestionType {
                    value: q.question_type.clone(),
                }
            })?;

            let difficulty = q
                .difficulty
                .map(|d| {
                    d.parse::<Difficulty>()
                        .map_err(|_| LoadError::UnknownDifficulty { value: d.clone() })
                })
                .transpose()?
                .unwrap_or_default();

            let category = q
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(default_category);

            Ok(Question {
                id: q.id,
                text: q.text,
                question_type,
                category,
                difficulty,
                reference_answer: q.reference_answer,
            })
        })
        .collect::<std::result::Result<Vec<_>, LoadError>>()
        .with_context(|| format!("invalid question in {}", source_path.display()))?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
    })
}

/// The built-in bank, parsed.
pub fn builtin_bank() -> Result<QuestionBank> {
    parse_bank_str(BUILTIN_BANK, Path::new("question-banks/default.toml"))
}

/// Recursively load all `.toml` question bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "bank has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &bank.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &bank.questions {
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }
    }

    for question in &bank.questions {
        match question.reference_answer.as_deref().map(str::trim) {
            None | Some("") => warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "no reference_answer; topic keyword scoring will be used".into(),
            }),
            Some(reference) if reference.chars().count() <= MIN_REFERENCE_CHARS => {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!(
                        "reference_answer is {MIN_REFERENCE_CHARS} characters or fewer and will be ignored"
                    ),
                })
            }
            Some(_) => {}
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "python-basics"
name = "Python Basics"
description = "A small bank"

[[questions]]
id = "list-vs-tuple"
text = "Explain the difference between list and tuple in Python."
question_type = "Technical"
category = "Python"
difficulty = "Medium"
reference_answer = """
Lists are mutable and defined using square brackets. Tuples are immutable and defined using parentheses.
"""

[[questions]]
id = "about-yourself"
text = "Tell me about yourself."
question_type = "hr"
"#;

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.id, "python-basics");
        assert_eq!(bank.name, "Python Basics");
        assert_eq!(bank.questions.len(), 2);
        assert_eq!(bank.questions[0].question_type, QuestionType::Technical);
        assert_eq!(bank.questions[0].category, "Python");
        assert!(bank.questions[0].reference_answer.is_some());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        let q = bank.get("about-yourself").unwrap();
        assert_eq!(q.question_type, QuestionType::Hr);
        assert_eq!(q.category, "General");
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert!(q.reference_answer.is_none());
    }

    #[test]
    fn unknown_question_type_is_rejected() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
text = "Why?"
question_type = "Behavioral"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        let root = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(root, LoadError::UnknownQuestionType { value } if value == "Behavioral"));
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let toml = r#"
[bank]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
text = "Why?"
question_type = "HR"
difficulty = "Brutal"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("unknown difficulty 'Brutal'"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_ids_and_references() {
        let toml = r#"
[bank]
id = "dupes"
name = "Dupes"

[[questions]]
id = "same"
text = "First?"
question_type = "HR"
reference_answer = "Too short"

[[questions]]
id = "same"
text = "   "
question_type = "HR"
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
        assert!(warnings.iter().any(|w| w.message.contains("text is empty")));
        assert!(warnings.iter().any(|w| w.message.contains("will be ignored")));
        assert!(warnings.iter().any(|w| w.message.contains("no reference_answer")));
    }

    #[test]
    fn builtin_bank_is_clean() {
        let bank = builtin_bank().unwrap();
        assert_eq!(bank.questions.len(), 10);
        let hr = bank
            .questions
            .iter()
            .filter(|q| q.question_type == QuestionType::Hr)
            .count();
        assert_eq!(hr, 4);
        assert!(validate_bank(&bank).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("b.toml"), BUILTIN_BANK).unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["python-basics", "default"]);
    }

    #[test]
    fn load_directory_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        assert!(load_bank_directory(&file).is_err());
    }
}
