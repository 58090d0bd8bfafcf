//! Application layer for sentiment-vectorizer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use ports::{
    analysis_logger::{AnalysisEvent, AnalysisEventKind, AnalysisLogger, NoAnalysisLogger},
    sentiment_source::{InlineSentimentSource, SentimentSource, SourceError},
};
pub use use_cases::analyze_sentiments::{AnalyzeError, AnalyzeSentimentsUseCase};
