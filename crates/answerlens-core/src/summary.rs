//! Interview-level aggregate statistics.
//!
//! Averages per question type and per category, plus rule-based strengths,
//! weaknesses and improvement suggestions derived from them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::QuestionType;
use crate::results::ScoredAnswer;

/// Coarse rating of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceLevel::Excellent => write!(f, "Excellent"),
            PerformanceLevel::Good => write!(f, "Good"),
            PerformanceLevel::Fair => write!(f, "Fair"),
            PerformanceLevel::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Rate an overall score.
pub fn performance_level(score: f64) -> PerformanceLevel {
    if score >= 80.0 {
        PerformanceLevel::Excellent
    } else if score >= 60.0 {
        PerformanceLevel::Good
    } else if score >= 40.0 {
        PerformanceLevel::Fair
    } else {
        PerformanceLevel::NeedsImprovement
    }
}

/// Average score of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub average: f64,
    pub answered: usize,
}

/// Aggregate view of a whole interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub overall_score: f64,
    /// Mean over HR answers, 0 when there are none.
    pub hr_score: f64,
    /// Mean over Technical answers, 0 when there are none.
    pub technical_score: f64,
    pub performance_level: PerformanceLevel,
    pub answered: usize,
    /// Mean words per answer.
    pub avg_words: f64,
    /// Sorted by category name.
    pub per_category: Vec<CategoryScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

const HR_PRACTICE: &str = "Practice common HR questions like 'Tell me about yourself', \
    'Why do you want to work here', and 'Where do you see yourself in 5 years'. \
    Focus on providing structured, detailed answers with examples.";
const TECHNICAL_PRACTICE: &str = "Review technical concepts related to your field. \
    Practice explaining technical topics clearly and concisely. \
    Include specific examples and use cases in your answers.";
const DETAIL_PRACTICE: &str = "Aim to provide answers with at least 50-100 words. \
    Include relevant examples, explain concepts clearly, and structure your answers \
    with an introduction, main points, and conclusion.";
const MOCK_INTERVIEWS: &str = "Practice more mock interviews to improve your confidence \
    and answer quality. Review your weak areas and prepare structured answers beforehand.";
const EXPAND_ANSWERS: &str = "Expand your answers by including examples, explaining your \
    thought process, and providing context. Aim for 50-100 words per answer.";
const BE_CONCISE: &str = "Practice being concise while maintaining clarity. \
    Focus on key points and avoid unnecessary details.";
const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Continue practicing mock interviews regularly",
    "Review feedback after each interview to identify patterns",
    "Prepare answers for common questions in advance",
];

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn type_mean(answers: &[ScoredAnswer], question_type: QuestionType) -> Option<f64> {
    mean(
        answers
            .iter()
            .filter(|a| a.question_type == question_type)
            .map(ScoredAnswer::score),
    )
}

/// Summarize a set of scored answers.
pub fn summarize(answers: &[ScoredAnswer]) -> InterviewSummary {
    let overall = mean(answers.iter().map(ScoredAnswer::score)).unwrap_or(0.0);
    let hr = type_mean(answers, QuestionType::Hr);
    let technical = type_mean(answers, QuestionType::Technical);
    let avg_words = mean(answers.iter().map(|a| a.word_count as f64)).unwrap_or(0.0);

    let mut by_category: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for answer in answers {
        by_category
            .entry(answer.category.as_str())
            .or_default()
            .push(answer.score());
    }
    let per_category: Vec<CategoryScore> = by_category
        .into_iter()
        .map(|(category, scores)| CategoryScore {
            category: category.to_string(),
            average: scores.iter().sum::<f64>() / scores.len() as f64,
            answered: scores.len(),
        })
        .collect();

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    if !answers.is_empty() {
        if let Some(hr) = hr {
            if hr >= 70.0 {
                strengths.push("Strong performance in HR/Behavioral questions".to_string());
            } else if hr < 50.0 {
                weaknesses.push("Needs improvement in HR/Behavioral questions".to_string());
                suggestions.push(HR_PRACTICE.to_string());
            }
        }

        if let Some(technical) = technical {
            if technical >= 70.0 {
                strengths.push("Strong technical knowledge and understanding".to_string());
            } else if technical < 50.0 {
                weaknesses.push("Technical knowledge needs improvement".to_string());
                suggestions.push(TECHNICAL_PRACTICE.to_string());
            }
        }

        let half = answers.len() as f64 * 0.5;
        let excellent = answers.iter().filter(|a| a.score() >= 80.0).count() as f64;
        let poor = answers.iter().filter(|a| a.score() < 50.0).count() as f64;
        if excellent >= half {
            strengths.push("Consistently providing detailed and comprehensive answers".to_string());
        } else if poor >= half {
            weaknesses.push("Answers are often too brief or lack detail".to_string());
            suggestions.push(DETAIL_PRACTICE.to_string());
        }

        for category in &per_category {
            if category.average >= 75.0 {
                strengths.push(format!(
                    "Strong understanding of {} topics",
                    category.category
                ));
            } else if category.average < 50.0 {
                weaknesses.push(format!("Needs improvement in {} area", category.category));
                suggestions.push(format!(
                    "Focus on studying {} concepts. Review fundamental principles and \
                     practice explaining them in your own words.",
                    category.category
                ));
            }
        }

        if overall >= 80.0 {
            strengths.push("Excellent overall interview performance".to_string());
        } else if overall < 60.0 {
            suggestions.push(MOCK_INTERVIEWS.to_string());
        }

        if avg_words < 30.0 {
            weaknesses.push("Answers are consistently too short".to_string());
            suggestions.push(EXPAND_ANSWERS.to_string());
        } else if avg_words > 150.0 {
            weaknesses.push("Some answers may be too lengthy".to_string());
            suggestions.push(BE_CONCISE.to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push(if overall >= 60.0 {
            "Good foundation in interview preparation".to_string()
        } else {
            "Completed the interview - practice makes perfect".to_string()
        });
    }
    if weaknesses.is_empty() {
        weaknesses.push("Continue practicing to maintain consistency".to_string());
    }
    if suggestions.is_empty() {
        suggestions.extend(DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    InterviewSummary {
        overall_score: overall,
        hr_score: hr.unwrap_or(0.0),
        technical_score: technical.unwrap_or(0.0),
        performance_level: performance_level(overall),
        answered: answers.len(),
        avg_words,
        per_category,
        strengths,
        weaknesses,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{ScoreBreakdown, ScoringPath};
    use crate::model::{Difficulty, EvaluationResult};

    fn answer(
        question_type: QuestionType,
        category: &str,
        score: f64,
        words: usize,
    ) -> ScoredAnswer {
        ScoredAnswer {
            question_id: format!("{category}-{score}"),
            question_text: "Q?".into(),
            question_type,
            category: category.into(),
            difficulty: Difficulty::Medium,
            answer: vec!["word"; words].join(" "),
            word_count: words,
            result: EvaluationResult {
                score,
                feedback: String::new(),
                keywords_matched: vec![],
            },
            breakdown: ScoreBreakdown {
                path: ScoringPath::Fallback,
                vector: None,
                keyword: None,
                length: None,
                fused: score,
            },
            duration_us: 0,
        }
    }

    #[test]
    fn performance_levels() {
        assert_eq!(performance_level(80.0), PerformanceLevel::Excellent);
        assert_eq!(performance_level(79.99), PerformanceLevel::Good);
        assert_eq!(performance_level(60.0), PerformanceLevel::Good);
        assert_eq!(performance_level(40.0), PerformanceLevel::Fair);
        assert_eq!(performance_level(39.0), PerformanceLevel::NeedsImprovement);
        assert_eq!(PerformanceLevel::NeedsImprovement.to_string(), "Needs Improvement");
    }

    #[test]
    fn empty_input_gives_defaults() {
        let summary = summarize(&[]);
        assert_eq!(summary.overall_score, 0.0);
        assert_eq!(summary.answered, 0);
        assert!(summary.per_category.is_empty());
        assert_eq!(
            summary.strengths,
            vec!["Completed the interview - practice makes perfect"]
        );
        assert_eq!(
            summary.weaknesses,
            vec!["Continue practicing to maintain consistency"]
        );
        assert_eq!(summary.suggestions.len(), 3);
    }

    #[test]
    fn averages_by_type_and_category() {
        let answers = vec![
            answer(QuestionType::Hr, "Behavioral", 60.0, 50),
            answer(QuestionType::Technical, "Python", 90.0, 70),
            answer(QuestionType::Technical, "Database", 70.0, 60),
            answer(QuestionType::Technical, "Python", 80.0, 40),
        ];
        let summary = summarize(&answers);
        assert!((summary.overall_score - 75.0).abs() < 1e-9);
        assert!((summary.hr_score - 60.0).abs() < 1e-9);
        assert!((summary.technical_score - 80.0).abs() < 1e-9);
        assert!((summary.avg_words - 55.0).abs() < 1e-9);

        let names: Vec<&str> = summary
            .per_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, vec!["Behavioral", "Database", "Python"]);
        assert!((summary.per_category[2].average - 85.0).abs() < 1e-9);
        assert_eq!(summary.per_category[2].answered, 2);

        assert!(summary
            .strengths
            .contains(&"Strong technical knowledge and understanding".to_string()));
        assert!(summary
            .strengths
            .contains(&"Strong understanding of Python topics".to_string()));
        assert!(summary
            .strengths
            .contains(&"Consistently providing detailed and comprehensive answers".to_string()));
        assert_eq!(summary.performance_level, PerformanceLevel::Good);
    }

    #[test]
    fn weak_interview_collects_weaknesses_and_suggestions() {
        let answers = vec![
            answer(QuestionType::Hr, "General", 20.0, 10),
            answer(QuestionType::Hr, "Behavioral", 30.0, 12),
        ];
        let summary = summarize(&answers);
        assert!(summary
            .weaknesses
            .contains(&"Needs improvement in HR/Behavioral questions".to_string()));
        assert!(summary
            .weaknesses
            .contains(&"Answers are consistently too short".to_string()));
        assert!(summary
            .weaknesses
            .contains(&"Needs improvement in General area".to_string()));
        assert!(summary.suggestions.iter().any(|s| s.starts_with("Practice more mock")));
        assert!(!summary
            .weaknesses
            .contains(&"Technical knowledge needs improvement".to_string()));
        assert_eq!(
            summary.strengths,
            vec!["Completed the interview - practice makes perfect"]
        );
    }

    #[test]
    fn lengthy_answers_are_flagged() {
        let answers = vec![answer(QuestionType::Technical, "Python", 65.0, 200)];
        let summary = summarize(&answers);
        assert!(summary
            .weaknesses
            .contains(&"Some answers may be too lengthy".to_string()));
        assert_eq!(
            summary.strengths,
            vec!["Good foundation in interview preparation"]
        );
    }
}
