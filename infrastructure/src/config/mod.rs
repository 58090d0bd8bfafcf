//! Configuration file loading for sentiment-vectorizer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SENTIMENT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./sentiment.toml` or `./.sentiment.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sentiment-vectorizer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileMomentumConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
