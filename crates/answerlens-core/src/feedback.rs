//! Feedback generation.
//!
//! Feedback is the space-joined output of an ordered list of independent
//! fragment rules. Each rule looks only at the [`FeedbackContext`] and either
//! contributes one sentence or stays silent.

/// Number of matched keywords named in the feedback.
pub const MAX_KEYWORDS_IN_FEEDBACK: usize = 5;

/// Scores below this get a structured-answer suggestion appended.
pub const SUGGESTION_THRESHOLD: f64 = 60.0;

pub const TOO_SHORT_FEEDBACK: &str =
    "Answer is too short. Please provide a more detailed response (minimum 5 characters).";

/// Everything a fragment rule may look at.
#[derive(Debug, Clone)]
pub struct FeedbackContext<'a> {
    /// Final (unrounded) score.
    pub score: f64,
    pub matched: &'a [String],
    /// Word count of the verbatim candidate answer.
    pub candidate_words: usize,
    /// Word count of the reference answer, when one was used for scoring.
    pub reference_words: Option<usize>,
}

/// A single feedback rule.
pub type FragmentRule = fn(&FeedbackContext<'_>) -> Option<String>;

/// Rules in the order their sentences appear.
pub const FRAGMENT_RULES: &[FragmentRule] = &[
    sentiment_fragment,
    keyword_fragment,
    length_fragment,
    suggestion_fragment,
];

/// Assemble the feedback text for an evaluated answer.
pub fn generate_feedback(ctx: &FeedbackContext<'_>) -> String {
    FRAGMENT_RULES
        .iter()
        .filter_map(|rule| rule(ctx))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sentiment_fragment(ctx: &FeedbackContext<'_>) -> Option<String> {
    let text = if ctx.score >= 85.0 {
        "Excellent answer! You demonstrated comprehensive understanding of the topic."
    } else if ctx.score >= 70.0 {
        "Good answer! You covered the main points well."
    } else if ctx.score >= 55.0 {
        "Fair answer. You're on the right track but could add more detail."
    } else if ctx.score >= 40.0 {
        "Your answer needs improvement. Try to be more specific and detailed."
    } else {
        "Your answer is too brief or lacks relevant information. Please provide more context."
    };
    Some(text.to_string())
}

pub fn keyword_fragment(ctx: &FeedbackContext<'_>) -> Option<String> {
    if ctx.matched.is_empty() {
        return Some("Try to include more relevant technical terms and concepts.".to_string());
    }
    let shown: Vec<&str> = ctx
        .matched
        .iter()
        .take(MAX_KEYWORDS_IN_FEEDBACK)
        .map(String::as_str)
        .collect();
    Some(format!("Key concepts covered: {}.", shown.join(", ")))
}

pub fn length_fragment(ctx: &FeedbackContext<'_>) -> Option<String> {
    let words = ctx.candidate_words as f64;
    let text = match ctx.reference_words {
        Some(reference) => {
            let reference = reference as f64;
            if words < reference * 0.5 {
                "Your answer is quite short. Consider expanding with examples and details."
            } else if words > reference * 1.5 {
                "Your answer is lengthy. Consider being more concise while maintaining clarity."
            } else {
                return None;
            }
        }
        None => {
            if ctx.candidate_words < 20 {
                "Your answer is too short. Aim for at least 30-50 words for better evaluation."
            } else if ctx.candidate_words > 300 {
                "Your answer is very long. Try to be more concise."
            } else {
                return None;
            }
        }
    };
    Some(text.to_string())
}

pub fn suggestion_fragment(ctx: &FeedbackContext<'_>) -> Option<String> {
    (ctx.score < SUGGESTION_THRESHOLD).then(|| {
        "Suggestion: Structure your answer with an introduction, main points, and conclusion. \
         Include specific examples where relevant."
            .to_string()
    })
}
