//! TOML interview session parser.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Session, SessionAnswer};

#[derive(Debug, Deserialize)]
struct TomlSessionFile {
    session: TomlSessionHeader,
    #[serde(default)]
    answers: Vec<TomlAnswer>,
}

#[derive(Debug, Deserialize)]
struct TomlSessionHeader {
    id: String,
    #[serde(default)]
    candidate: String,
}

#[derive(Debug, Deserialize)]
struct TomlAnswer {
    question_id: String,
    #[serde(default)]
    answer: String,
}

/// Parse a session file.
pub fn parse_session(path: &Path) -> Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;

    parse_session_str(&content, path)
}

pub fn parse_session_str(content: &str, source_path: &Path) -> Result<Session> {
    let parsed: TomlSessionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(Session {
        id: parsed.session.id,
        candidate: parsed.session.candidate,
        answers: parsed
            .answers
            .into_iter()
            .map(|a| SessionAnswer {
                question_id: a.question_id,
                answer: a.answer,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_session_with_answers() {
        let toml = r#"
[session]
id = "s1"
candidate = "Sam"

[[answers]]
question_id = "what-is-sql"
answer = "SQL is a query language."

[[answers]]
question_id = "about-yourself"
"#;
        let session = parse_session_str(toml, &PathBuf::from("s.toml")).unwrap();
        assert_eq!(session.id, "s1");
        assert_eq!(session.candidate, "Sam");
        assert_eq!(session.answers.len(), 2);
        assert_eq!(session.answers[1].answer, "");
    }

    #[test]
    fn missing_header_is_an_error() {
        let toml = r#"
[[answers]]
question_id = "q"
answer = "a"
"#;
        assert!(parse_session_str(toml, &PathBuf::from("s.toml")).is_err());
    }

    #[test]
    fn read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "[session]\nid = \"disk\"\n").unwrap();
        let session = parse_session(&path).unwrap();
        assert_eq!(session.id, "disk");
        assert!(session.answers.is_empty());

        let err = parse_session(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read session file"));
    }
}
