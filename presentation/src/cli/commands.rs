//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use sentiment_domain::SentimentVector;
use std::path::PathBuf;

/// Output format for sentiment results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for sentiment_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => sentiment_domain::OutputFormat::Text,
            OutputFormat::Json => sentiment_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for sentiment-vectorizer
#[derive(Parser, Debug)]
#[command(name = "sentiment-vectorizer")]
#[command(author, version, about = "Sentiment vector algebra - combine and score sentiments")]
#[command(long_about = r#"
sentiment-vectorizer combines (magnitude, polarity, intensity) sentiment vectors
and projects them onto a bounded score.

Vectors are written as "magnitude,polarity,intensity":
  magnitude   non-negative integer
  polarity    -1, 0 or 1
  intensity   > 0 (>= 1 amplifies, < 1 attenuates)
              prefix with ! for a negated modifier (!1.25 = 0.75)

Configuration files are loaded from (in priority order):
1. SENTIMENT_* environment variables (e.g. SENTIMENT_MOMENTUM__ALPHA=0.3)
2. --config <path>          Explicit config file
3. ./sentiment.toml         Project-level config
4. ~/.config/sentiment-vectorizer/config.toml   Global config

Example:
  sentiment-vectorizer combine 3,1,1.2 3,-1,1.5
  sentiment-vectorizer score 4,-1,2
  sentiment-vectorizer analyze --input conversation.jsonl -o json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format in the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Combine two or more vectors, left to right
    Combine {
        /// Vectors to combine ("magnitude,polarity,intensity")
        #[arg(required = true, num_args = 2.., value_name = "VECTOR")]
        vectors: Vec<SentimentVector>,
    },

    /// Project a single vector onto its score
    Score {
        /// Vector to score ("magnitude,polarity,intensity")
        #[arg(value_name = "VECTOR")]
        vector: SentimentVector,
    },

    /// Analyze a sequence of vectors (combined and momentum scores)
    Analyze {
        /// JSONL file with one vector per line
        #[arg(short, long, value_name = "PATH", conflicts_with = "vectors")]
        input: Option<PathBuf>,

        /// Vectors given inline instead of an input file
        #[arg(value_name = "VECTOR")]
        vectors: Vec<SentimentVector>,

        /// Momentum weight of the current score (0.0..=1.0)
        #[arg(long)]
        alpha: Option<f64>,

        /// Momentum carried over from previous changes (0.0..=1.0)
        #[arg(long)]
        beta: Option<f64>,

        /// Append structured analysis events to this JSONL file
        #[arg(long, value_name = "PATH")]
        analysis_log: Option<PathBuf>,
    },
}
