//! Session engine.
//!
//! Evaluates every answer of an interview session against a question bank.
//! Answers are scored concurrently, bounded by `parallelism`, and reported in
//! session order.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use uuid::Uuid;

use crate::evaluator::Evaluator;
use crate::model::{EvaluationRequest, Question, QuestionBank, Session, SessionAnswer};
use crate::report::{BankSummary, SessionReport};
use crate::results::ScoredAnswer;
use crate::summary::summarize;
use crate::text::word_count;

/// Configuration for the session engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum answers scored at once.
    pub parallelism: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { parallelism: 4 }
    }
}

/// Progress reporting trait.
pub trait ProgressReporter: Send + Sync {
    fn on_answer_start(&self, question_id: &str);
    fn on_answer_complete(&self, answer: &ScoredAnswer);
    fn on_answer_skipped(&self, question_id: &str);
    fn on_session_complete(&self, total: usize, scored: usize, skipped: usize, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_answer_start(&self, _: &str) {}
    fn on_answer_complete(&self, _: &ScoredAnswer) {}
    fn on_answer_skipped(&self, _: &str) {}
    fn on_session_complete(&self, _: usize, _: usize, _: usize, _: Duration) {}
}

/// Scores interview sessions.
pub struct SessionEngine {
    evaluator: Evaluator,
    config: EngineConfig,
}

impl SessionEngine {
    pub fn new(evaluator: Evaluator, config: EngineConfig) -> Self {
        Self { evaluator, config }
    }

    /// Evaluate a session against a question bank.
    pub async fn run(
        &self,
        bank: &QuestionBank,
        session: &Session,
        progress: &dyn ProgressReporter,
    ) -> Result<SessionReport> {
        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.parallelism.max(1)));

        let mut futures = FuturesUnordered::new();
        let mut skipped = Vec::new();

        for (index, answer) in session.answers.iter().enumerate() {
            let Some(question) = bank.get(&answer.question_id) else {
                tracing::warn!(
                    "question '{}' not found in bank '{}', skipping",
                    answer.question_id,
                    bank.id
                );
                progress.on_answer_skipped(&answer.question_id);
                skipped.push(answer.question_id.clone());
                continue;
            };

            let evaluator = self.evaluator.clone();
            let semaphore = Arc::clone(&semaphore);
            let question = question.clone();
            let answer = answer.clone();

            futures.push(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| anyhow::anyhow!("semaphore closed"))?;

                progress.on_answer_start(&answer.question_id);
                let question_id = answer.question_id.clone();
                let scored = tokio::task::spawn_blocking(move || {
                    score_answer(&evaluator, &question, &answer)
                })
                .await
                .with_context(|| format!("evaluation of '{question_id}' did not finish"))?;
                Ok::<_, anyhow::Error>((index, scored))
            });
        }

        let total = session.answers.len();
        let mut scored = Vec::with_capacity(futures.len());

        while let Some(outcome) = futures.next().await {
            let (index, answer) = outcome?;
            progress.on_answer_complete(&answer);
            scored.push((index, answer));
        }
        scored.sort_by_key(|(index, _)| *index);
        let answers: Vec<ScoredAnswer> = scored.into_iter().map(|(_, answer)| answer).collect();

        let elapsed = start.elapsed();
        progress.on_session_complete(total, answers.len(), skipped.len(), elapsed);

        let summary = summarize(&answers);
        tracing::info!(
            session = %session.id,
            answered = answers.len(),
            skipped = skipped.len(),
            overall = summary.overall_score,
            "session evaluated"
        );

        Ok(SessionReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            bank: BankSummary::from(bank),
            session_id: session.id.clone(),
            candidate: session.candidate.clone(),
            answers,
            skipped,
            summary,
            duration_ms: elapsed.as_millis() as u64,
        })
    }
}

fn score_answer(
    evaluator: &Evaluator,
    question: &Question,
    answer: &SessionAnswer,
) -> ScoredAnswer {
    let request = EvaluationRequest {
        question_text: question.text.clone(),
        candidate_answer: answer.answer.clone(),
        question_type: question.question_type,
        reference_answer: question.reference_answer.clone(),
    };

    let start = Instant::now();
    let (result, breakdown) = evaluator.evaluate_with_breakdown(&request);
    let duration_us = start.elapsed().as_micros() as u64;

    ScoredAnswer {
        question_id: question.id.clone(),
        question_text: question.text.clone(),
        question_type: question.question_type,
        category: question.category.clone(),
        difficulty: question.difficulty,
        word_count: word_count(&answer.answer),
        answer: request.candidate_answer,
        result,
        breakdown,
        duration_us,
    }
}
