//! answerlens CLI - the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "answerlens", version, about = "Interview answer evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single answer
    Evaluate {
        /// The interview question
        #[arg(long)]
        question: String,

        /// The candidate's answer
        #[arg(long, conflicts_with = "answer_file", required_unless_present = "answer_file")]
        answer: Option<String>,

        /// Read the candidate's answer from a file
        #[arg(long)]
        answer_file: Option<PathBuf>,

        /// Question type: hr or technical
        #[arg(long = "type", default_value = "technical")]
        question_type: String,

        /// Reference (ideal) answer to compare against
        #[arg(long)]
        reference: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Evaluate an interview session against a question bank
    Run {
        /// Path to a question bank .toml file
        #[arg(long)]
        bank: PathBuf,

        /// Path to a session .toml file
        #[arg(long)]
        session: PathBuf,

        /// Output directory (default: from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, markdown, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Max answers scored concurrently (default: from config)
        #[arg(long)]
        parallelism: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Show the topic keyword table in use
    Topics {
        /// Only show topics for this question type
        #[arg(long = "type")]
        question_type: Option<String>,

        /// Print the table as TOML
        #[arg(long)]
        toml: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("answerlens=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            question,
            answer,
            answer_file,
            question_type,
            reference,
            json,
            config,
        } => commands::evaluate::execute(
            question,
            answer,
            answer_file,
            question_type,
            reference,
            json,
            config,
        ),
        Commands::Run {
            bank,
            session,
            output,
            format,
            parallelism,
            config,
        } => commands::run::execute(bank, session, output, format, parallelism, config).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Topics {
            question_type,
            toml,
            config,
        } => commands::topics::execute(question_type, toml, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
