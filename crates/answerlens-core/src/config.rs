//! Configuration loading.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::evaluator::{Evaluator, EvaluatorConfig, DEFAULT_MAX_INPUT_CHARS, MIN_ANSWER_CHARS};
use crate::topics::{load_topic_table, TopicKeywordTable};

/// Environment variable overriding `max_input_chars`.
pub const MAX_INPUT_CHARS_ENV: &str = "ANSWERLENS_MAX_INPUT_CHARS";

/// Top-level answerlens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerlensConfig {
    /// Answers are truncated to this many characters before scoring.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Max answers scored concurrently.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Topic keyword table to use instead of the built-in one.
    #[serde(default)]
    pub topics: Option<PathBuf>,
    /// Report formats written by `run` when none are given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}
fn default_parallelism() -> usize {
    4
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./answerlens-results")
}
fn default_format() -> String {
    "json".to_string()
}

impl Default for AnswerlensConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            parallelism: default_parallelism(),
            output_dir: default_output_dir(),
            topics: None,
            default_format: default_format(),
        }
    }
}

impl AnswerlensConfig {
    /// The topic table this configuration selects.
    pub fn topic_table(&self) -> Result<Arc<TopicKeywordTable>> {
        match &self.topics {
            Some(path) => Ok(Arc::new(load_topic_table(path)?)),
            None => Ok(TopicKeywordTable::builtin()),
        }
    }

    /// Build an evaluator from this configuration.
    pub fn evaluator(&self) -> Result<Evaluator> {
        Ok(Evaluator::new(
            EvaluatorConfig {
                max_input_chars: self.max_input_chars,
            },
            self.topic_table()?,
        ))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `answerlens.toml` in the current directory
/// 2. `~/.config/answerlens/config.toml`
///
/// Environment variable override: `ANSWERLENS_MAX_INPUT_CHARS`.
pub fn load_config_from(path: Option<&Path>) -> Result<AnswerlensConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("answerlens.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config_file(&path)?
        }
        None => AnswerlensConfig::default(),
    };

    if let Ok(value) = std::env::var(MAX_INPUT_CHARS_ENV) {
        config.max_input_chars = value
            .trim()
            .parse()
            .with_context(|| format!("invalid {MAX_INPUT_CHARS_ENV}: {value}"))?;
    }
    anyhow::ensure!(
        config.max_input_chars >= MIN_ANSWER_CHARS,
        "max_input_chars must be at least {MIN_ANSWER_CHARS}, got {}",
        config.max_input_chars
    );

    config.output_dir = resolve_path(&config.output_dir);
    config.topics = config.topics.as_deref().map(resolve_path);

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<AnswerlensConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<AnswerlensConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("answerlens"))
}
