//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn answerlens() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("answerlens").unwrap()
}

fn repo_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

#[test]
fn validate_builtin_bank() {
    answerlens()
        .arg("validate")
        .arg("--bank")
        .arg(repo_file("question-banks/default.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("10 questions"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_directory() {
    answerlens()
        .arg("validate")
        .arg("--bank")
        .arg(repo_file("question-banks"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Classic Interview Questions"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.toml");
    std::fs::write(
        &path,
        r#"
[bank]
id = "w"
name = "Warnings"

[[questions]]
id = "q1"
text = "What is SQL?"
question_type = "Technical"

[[questions]]
id = "q1"
text = "What is Flask?"
question_type = "Technical"
reference_answer = "A web framework for Python."
"#,
    )
    .unwrap();

    answerlens()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[q1] WARNING: duplicate question ID"))
        .stdout(predicate::str::contains("no reference_answer"))
        .stdout(predicate::str::contains("2 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    answerlens()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn evaluate_with_reference() {
    let dir = TempDir::new().unwrap();
    answerlens()
        .current_dir(dir.path())
        .args([
            "evaluate",
            "--question",
            "Explain the difference between list and tuple in Python.",
            "--answer",
            "A list is mutable, you can change it, uses square brackets []. A tuple is immutable and uses parentheses ().",
            "--type",
            "technical",
            "--reference",
            "Lists are mutable and defined using square brackets. Tuples are immutable and defined using parentheses.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: "))
        .stdout(
            predicate::str::contains("Good answer!")
                .or(predicate::str::contains("Excellent")),
        )
        .stdout(predicate::str::contains("mutabl"));
}

#[test]
fn evaluate_too_short_answer() {
    let dir = TempDir::new().unwrap();
    answerlens()
        .current_dir(dir.path())
        .args([
            "evaluate",
            "--question",
            "What is Python?",
            "--answer",
            "idk",
            "--type",
            "hr",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0.00"))
        .stdout(predicate::str::contains("Answer is too short"));
}

#[test]
fn evaluate_json_output() {
    let dir = TempDir::new().unwrap();
    let answer_path = dir.path().join("answer.txt");
    std::fs::write(
        &answer_path,
        "SQL is a structured query language used to query relational database tables.",
    )
    .unwrap();

    let output = answerlens()
        .current_dir(dir.path())
        .args([
            "evaluate",
            "--question",
            "What is SQL?",
            "--json",
            "--answer-file",
        ])
        .arg(&answer_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let score = value["score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert_eq!(value["breakdown"]["path"], "fallback");
    assert!(value["keywords_matched"].as_array().unwrap().len() <= 10);
    assert!(value["feedback"].as_str().unwrap().len() > 10);
}

#[test]
fn evaluate_rejects_unknown_type() {
    answerlens()
        .args([
            "evaluate",
            "--question",
            "Q",
            "--answer",
            "An answer",
            "--type",
            "behavioral",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown question type"));
}

#[test]
fn evaluate_requires_an_answer() {
    answerlens()
        .args(["evaluate", "--question", "Q"])
        .assert()
        .failure();
}

#[test]
fn run_writes_all_reports() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    answerlens()
        .current_dir(dir.path())
        .arg("run")
        .arg("--bank")
        .arg(repo_file("question-banks/default.toml"))
        .arg("--session")
        .arg(repo_file("sessions/sample.toml"))
        .arg("--output")
        .arg(&out)
        .args(["--format", "all", "--parallelism", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list-vs-tuple"))
        .stdout(predicate::str::contains("Overall:"));

    let files: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(files.iter().any(|f| f.ends_with(".json")));
    assert!(files.iter().any(|f| f.ends_with(".html")));
    assert!(files.iter().any(|f| f.ends_with(".md")));
}

#[test]
fn run_reports_skipped_questions() {
    let dir = TempDir::new().unwrap();
    let session = dir.path().join("session.toml");
    std::fs::write(
        &session,
        r#"
[session]
id = "s"

[[answers]]
question_id = "what-is-flask"
answer = "Flask is a lightweight Python web framework with routing."

[[answers]]
question_id = "does-not-exist"
answer = "Some answer text."
"#,
    )
    .unwrap();

    answerlens()
        .current_dir(dir.path())
        .arg("run")
        .arg("--bank")
        .arg(repo_file("question-banks/default.toml"))
        .arg("--session")
        .arg(&session)
        .arg("--output")
        .arg(dir.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped: does-not-exist"));
}

#[test]
fn run_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    answerlens()
        .current_dir(dir.path())
        .arg("run")
        .arg("--bank")
        .arg(repo_file("question-banks/default.toml"))
        .arg("--session")
        .arg(repo_file("sessions/sample.toml"))
        .args(["--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn topics_lists_builtin_table() {
    let dir = TempDir::new().unwrap();
    answerlens()
        .current_dir(dir.path())
        .args(["topics", "--type", "hr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weaknesses"))
        .stdout(predicate::str::contains("5 topic(s)"))
        .stdout(predicate::str::contains("normalization").not());
}

#[test]
fn topics_as_toml() {
    let dir = TempDir::new().unwrap();
    answerlens()
        .current_dir(dir.path())
        .args(["topics", "--toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version = 1"))
        .stdout(predicate::str::contains("[[topics]]"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    answerlens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created answerlens.toml"))
        .stdout(predicate::str::contains("Created question-banks/example.toml"));

    assert!(dir.path().join("answerlens.toml").exists());
    assert!(dir.path().join("question-banks/example.toml").exists());
    assert!(dir.path().join("sessions/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    answerlens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    answerlens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_then_run_uses_generated_config() {
    let dir = TempDir::new().unwrap();

    answerlens()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    answerlens()
        .current_dir(dir.path())
        .args([
            "run",
            "--bank",
            "question-banks/example.toml",
            "--session",
            "sessions/example.toml",
        ])
        .assert()
        .success();

    let results = dir.path().join("answerlens-results");
    let reports = std::fs::read_dir(&results).unwrap().count();
    assert_eq!(reports, 1);
}

#[test]
fn help_output() {
    answerlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview answer evaluator"));
}

#[test]
fn version_output() {
    answerlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("answerlens"));
}
