//! Infrastructure layer for sentiment-vectorizer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileMomentumConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use logging::JsonlAnalysisLogger;
pub use source::JsonlSentimentSource;
