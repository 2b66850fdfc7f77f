//! The `answerlens evaluate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use answerlens_core::config::load_config_from;
use answerlens_core::evaluator::ScoreBreakdown;
use answerlens_core::model::{EvaluationRequest, EvaluationResult, QuestionType};
use answerlens_core::summary::{performance_level, PerformanceLevel};

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    #[serde(flatten)]
    result: &'a EvaluationResult,
    performance_level: PerformanceLevel,
    breakdown: &'a ScoreBreakdown,
}

pub fn execute(
    question: String,
    answer: Option<String>,
    answer_file: Option<PathBuf>,
    question_type: String,
    reference: Option<String>,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let question_type: QuestionType = question_type
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;

    let answer = match (answer, answer_file) {
        (Some(answer), _) => answer,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read answer file: {}", path.display()))?,
        (None, None) => anyhow::bail!("one of --answer or --answer-file is required"),
    };

    let config = load_config_from(config_path.as_deref())?;
    let evaluator = config.evaluator()?;

    let mut request = EvaluationRequest::new(question, answer, question_type);
    if let Some(reference) = reference {
        request = request.with_reference(reference);
    }
    let (result, breakdown) = evaluator.evaluate_with_breakdown(&request);

    if json {
        let output = EvaluateOutput {
            result: &result,
            performance_level: performance_level(result.score),
            breakdown: &breakdown,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to serialize result")?
        );
        return Ok(());
    }

    println!(
        "Score: {:.2} ({})",
        result.score,
        performance_level(result.score)
    );
    if !result.keywords_matched.is_empty() {
        println!("Keywords: {}", result.keywords_matched.join(", "));
    }
    println!("Feedback: {}", result.feedback);

    Ok(())
}
