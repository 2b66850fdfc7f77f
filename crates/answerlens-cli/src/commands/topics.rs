//! The `answerlens topics` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use answerlens_core::config::load_config_from;
use answerlens_core::model::QuestionType;
use answerlens_core::topics::{TopicEntry, TopicKeywordTable};

pub fn execute(
    question_type: Option<String>,
    as_toml: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let filter: Option<QuestionType> = question_type
        .map(|t| t.parse().map_err(|e: String| anyhow::anyhow!("{e}")))
        .transpose()?;

    let config = load_config_from(config_path.as_deref())?;
    let table = config.topic_table()?;

    let entries: Vec<&TopicEntry> = table
        .topics
        .iter()
        .filter(|e| filter.map_or(true, |t| e.question_type == t))
        .collect();

    if as_toml {
        let subset = TopicKeywordTable {
            version: table.version,
            topics: entries.into_iter().cloned().collect(),
        };
        print!(
            "{}",
            toml::to_string_pretty(&subset).context("failed to serialize topic table")?
        );
        return Ok(());
    }

    let mut out = Table::new();
    out.set_header(vec!["Type", "Topic", "Keywords"]);
    for entry in &entries {
        out.add_row(vec![
            Cell::new(entry.question_type),
            Cell::new(&entry.topic),
            Cell::new(entry.keywords.join(", ")),
        ]);
    }
    println!("{out}");
    println!("{} topic(s), table version {}", entries.len(), table.version);

    Ok(())
}
