//! Markdown summary output, suitable for pasting into an issue or a PR.

use std::path::Path;

use anyhow::{Context, Result};

use answerlens_core::report::SessionReport;

/// Keep table cells on one line and stop stray pipes from splitting columns.
fn cell(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").replace('|', "\\|")
}

/// Generate a Markdown summary of a session report.
pub fn generate_markdown(report: &SessionReport) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str(&format!("# Interview report: {}\n\n", cell(&report.candidate)));
    md.push_str(&format!(
        "Session `{}` against **{}** ({} questions), {}\n\n",
        report.session_id,
        cell(&report.bank.name),
        report.bank.question_count,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    md.push_str(&format!(
        "**Overall:** {:.1} ({}) | **HR:** {:.1} | **Technical:** {:.1} | **Answered:** {} | **Avg words:** {:.0}\n\n",
        summary.overall_score,
        summary.performance_level,
        summary.hr_score,
        summary.technical_score,
        summary.answered,
        summary.avg_words
    ));

    if !summary.per_category.is_empty() {
        md.push_str("## Categories\n\n");
        md.push_str("| Category | Answered | Average |\n");
        md.push_str("|----------|----------|---------|\n");
        for c in &summary.per_category {
            md.push_str(&format!(
                "| {} | {} | {:.1} |\n",
                cell(&c.category),
                c.answered,
                c.average
            ));
        }
        md.push('\n');
    }

    md.push_str("## Answers\n\n");
    md.push_str("| Question | Type | Score | Keywords | Feedback |\n");
    md.push_str("|----------|------|-------|----------|----------|\n");
    for a in &report.answers {
        md.push_str(&format!(
            "| {} | {} | {:.2} | {} | {} |\n",
            cell(&a.question_text),
            a.question_type,
            a.score(),
            cell(&a.result.keywords_matched.join(", ")),
            cell(&a.result.feedback)
        ));
    }
    md.push('\n');

    for (title, items) in [
        ("Strengths", &summary.strengths),
        ("Weaknesses", &summary.weaknesses),
        ("Suggestions", &summary.suggestions),
    ] {
        md.push_str(&format!("## {title}\n\n"));
        for item in items {
            md.push_str(&format!("- {item}\n"));
        }
        md.push('\n');
    }

    if !report.skipped.is_empty() {
        md.push_str(&format!(
            "_Skipped (not in bank): {}_\n",
            report.skipped.join(", ")
        ));
    }

    md
}

/// Write a Markdown report to a file.
pub fn write_markdown_report(report: &SessionReport, path: &Path) -> Result<()> {
    let md = generate_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write Markdown report to {}", path.display()))?;
    Ok(())
}
