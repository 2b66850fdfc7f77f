//! The `answerlens run` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use answerlens_core::bank;
use answerlens_core::config::load_config_from;
use answerlens_core::engine::{EngineConfig, ProgressReporter, SessionEngine};
use answerlens_core::report::SessionReport;
use answerlens_core::results::ScoredAnswer;
use answerlens_core::session::parse_session;
use answerlens_report::html::write_html_report;
use answerlens_report::markdown::write_markdown_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Json,
    Html,
    Markdown,
}

const ALL_FORMATS: [ReportFormat; 3] = [
    ReportFormat::Json,
    ReportFormat::Html,
    ReportFormat::Markdown,
];

/// Console progress reporter.
struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn on_answer_start(&self, question_id: &str) {
        eprintln!("  Scoring: {question_id}");
    }

    fn on_answer_complete(&self, answer: &ScoredAnswer) {
        eprintln!(
            "  Done: {} [{}] score {:.2} ({}us)",
            answer.question_id,
            answer.question_type,
            answer.score(),
            answer.duration_us,
        );
    }

    fn on_answer_skipped(&self, question_id: &str) {
        eprintln!("  SKIPPED: {question_id} is not in the question bank");
    }

    fn on_session_complete(&self, total: usize, scored: usize, skipped: usize, elapsed: Duration) {
        eprintln!(
            "\nComplete: {scored}/{total} scored, {skipped} skipped ({:.1}ms)",
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

/// Split a `--format` value into report formats.
fn parse_formats(format: &str) -> Result<Vec<ReportFormat>> {
    let mut formats = Vec::new();
    for name in format.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let selected: &[ReportFormat] = match name {
            "all" => &ALL_FORMATS,
            "json" => &[ReportFormat::Json],
            "html" => &[ReportFormat::Html],
            "markdown" | "md" => &[ReportFormat::Markdown],
            other => {
                anyhow::bail!("unknown format '{other}' (expected json, html, markdown or all)")
            }
        };
        for fmt in selected {
            if !formats.contains(fmt) {
                formats.push(*fmt);
            }
        }
    }
    anyhow::ensure!(!formats.is_empty(), "no output format given");
    Ok(formats)
}

pub async fn execute(
    bank_path: PathBuf,
    session_path: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    parallelism: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let parallelism = parallelism.unwrap_or(config.parallelism);
    anyhow::ensure!(parallelism >= 1, "parallelism must be at least 1");
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let format = format.unwrap_or_else(|| config.default_format.clone());
    let formats = parse_formats(&format)?;

    let bank = bank::parse_bank(&bank_path)?;
    let session = parse_session(&session_path)?;
    for w in bank::validate_bank(&bank) {
        tracing::debug!(question = ?w.question_id, "bank warning: {}", w.message);
    }

    eprintln!(
        "answerlens v{} - Scoring {} answers from '{}' against '{}' ({} questions)",
        env!("CARGO_PKG_VERSION"),
        session.answers.len(),
        session.id,
        bank.name,
        bank.questions.len()
    );
    eprintln!();

    let engine = SessionEngine::new(config.evaluator()?, EngineConfig { parallelism });
    let report = engine.run(&bank, &session, &ConsoleReporter).await?;

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match fmt {
            ReportFormat::Json => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            ReportFormat::Html => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            ReportFormat::Markdown => {
                let path = output.join(format!("report-{timestamp}.md"));
                write_markdown_report(&report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_summary(report: &SessionReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question", "Type", "Category", "Score", "Keywords"]);

    for a in &report.answers {
        table.add_row(vec![
            Cell::new(&a.question_id),
            Cell::new(a.question_type),
            Cell::new(&a.category),
            Cell::new(format!("{:.2}", a.score())),
            Cell::new(a.result.keywords_matched.join(", ")),
        ]);
    }

    println!("{table}");

    let summary = &report.summary;
    println!(
        "Overall: {:.2} ({}) | HR: {:.2} | Technical: {:.2}",
        summary.overall_score,
        summary.performance_level,
        summary.hr_score,
        summary.technical_score
    );
    for s in &summary.strengths {
        println!("  + {s}");
    }
    for w in &summary.weaknesses {
        println!("  - {w}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped: {}", report.skipped.join(", "));
    }
}
