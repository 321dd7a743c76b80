//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored when the terminal allows it
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI arguments for quorum-solver
#[derive(Parser, Debug)]
#[command(name = "quorum-solver")]
#[command(author, version, about = "Answer questions with routed reasoning strategies")]
#[command(long_about = r#"
quorum-solver answers free-form questions by routing each one to a strategy:

  math    Self-consistency vote over several samples, then critique-and-repair
  coding  Critique-and-repair from a fresh draft
  other   Single chain-of-thought call

Configuration is merged from (highest priority first):
1. Environment         MODEL_NAME, API_BASE, OPENAI_API_KEY
2. --config <path>     Explicit config file
3. ./solver.toml       Project-level config
4. ~/.config/quorum-solver/config.toml   Global config

Example:
  quorum-solver solve "What is the value of x if 2x + 3 = 11?"
  quorum-solver generate --input test.json --output answers.json --limit 20
  quorum-solver evaluate --input dev.json --batch-size 10 --strict
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Model to call (overrides config and MODEL_NAME)
    #[arg(short, long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Append a JSONL transcript of every model call to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub transcript: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question and print the answer
    Solve {
        /// The question to answer
        question: String,

        /// Domain label (math, coding, or any other label); inferred when omitted
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Answer every problem in a dataset, checkpointing after each one
    Generate {
        /// Problem dataset (JSON array of {"input", "domain"?})
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Answers file; an existing file is resumed
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Only consider the first N problems
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Grade the solver against a labelled dataset
    Evaluate {
        /// Labelled dataset (JSON array of {"input", "output", "domain"?})
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Only evaluate the first N problems (0 = all)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,

        /// Problems per batch
        #[arg(long, default_value_t = 10)]
        batch_size: usize,

        /// Stop after the first batch that is not fully correct
        #[arg(long)]
        strict: bool,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check an answers file against the submission format
    Verify {
        /// Problem dataset the answers belong to
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Answers file to check
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Expected number of answers instead of the dataset size
        #[arg(short, long)]
        limit: Option<usize>,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show configuration sources and the merged configuration
    Config,
}

impl Commands {
    /// Commands that walk a dataset and can stop cleanly between problems
    pub fn is_batch(&self) -> bool {
        matches!(self, Commands::Generate { .. } | Commands::Evaluate { .. })
    }
}
