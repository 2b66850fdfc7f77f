//! The `answerlens init` command.

use std::path::Path;

use anyhow::{Context, Result};

use answerlens_core::bank::BUILTIN_BANK;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("answerlens.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("question-banks").context("failed to create question-banks/")?;
    write_if_missing(Path::new("question-banks/example.toml"), BUILTIN_BANK)?;

    std::fs::create_dir_all("sessions").context("failed to create sessions/")?;
    write_if_missing(Path::new("sessions/example.toml"), EXAMPLE_SESSION)?;

    println!("\nNext steps:");
    println!("  1. Edit answerlens.toml to taste");
    println!("  2. Run: answerlens validate --bank question-banks/example.toml");
    println!(
        "  3. Run: answerlens run --bank question-banks/example.toml --session sessions/example.toml"
    );

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# answerlens configuration

# Answers longer than this many characters are truncated before scoring.
max_input_chars = 10000

# Max answers scored concurrently by `answerlens run`.
parallelism = 4

# Where reports are written. `${VAR}` references are expanded.
output_dir = "./answerlens-results"

# Report formats written by `run` when --format is not given.
default_format = "json"

# Custom topic keyword table (optional).
# topics = "topics.toml"
"#;

const EXAMPLE_SESSION: &str = r#"[session]
id = "example"
candidate = "Example Candidate"

[[answers]]
question_id = "list-vs-tuple"
answer = "A list is mutable, you can change it, uses square brackets []. A tuple is immutable and uses parentheses ()."

[[answers]]
question_id = "strengths-weaknesses"
answer = "My strength is problem solving and my communication skill. My weakness is public speaking, but I work to improve it every week."
"#;
