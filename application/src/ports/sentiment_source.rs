//! Sentiment source port
//!
//! Defines where the vectors analyzed by the use cases come from.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`SentimentSource`] - defined here in application layer
//! - **Adapter**: `JsonlSentimentSource` - implemented in infrastructure layer
//!
//! # Built-in Implementations
//!
//! - [`InlineSentimentSource`] - vectors supplied up front (command line, tests)

use async_trait::async_trait;
use sentiment_domain::SentimentVector;
use thiserror::Error;

/// Errors that can occur while loading vectors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid sentiment vector at line {line}: {message}")]
    InvalidLine { line: usize, message: String },
}

/// Source of sentiment vectors
#[async_trait]
pub trait SentimentSource: Send + Sync {
    /// Load all vectors, in order
    async fn load(&self) -> Result<Vec<SentimentVector>, SourceError>;

    /// Short human-readable description (e.g. a file path)
    fn describe(&self) -> String;
}

/// Source backed by an in-memory list of vectors
#[derive(Debug, Clone, Default)]
pub struct InlineSentimentSource {
    vectors: Vec<SentimentVector>,
}

impl InlineSentimentSource {
    pub fn new(vectors: Vec<SentimentVector>) -> Self {
        Self { vectors }
    }
}

#[async_trait]
impl SentimentSource for InlineSentimentSource {
    async fn load(&self) -> Result<Vec<SentimentVector>, SourceError> {
        Ok(self.vectors.clone())
    }

    fn describe(&self) -> String {
        "inline".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inline_source_returns_vectors_in_order() {
        let vectors = vec![
            SentimentVector::create(1, 1, 1.0).unwrap(),
            SentimentVector::create(2, -1, 0.5).unwrap(),
        ];
        let source = InlineSentimentSource::new(vectors.clone());

        assert_eq!(source.load().await.unwrap(), vectors);
        assert_eq!(source.describe(), "inline");
    }

    #[test]
    fn test_source_error_display() {
        let error = SourceError::InvalidLine {
            line: 3,
            message: "missing field `polarity`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid sentiment vector at line 3: missing field `polarity`"
        );
    }
}
