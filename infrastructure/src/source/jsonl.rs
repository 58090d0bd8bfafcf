//! JSON-Lines sentiment source
//!
//! One vector per line, either as a JSON object or in the compact
//! `magnitude,polarity,intensity` form:
//!
//! ```text
//! {"magnitude": 3, "polarity": 1, "intensity": 1.2}
//! 3,-1,1.5
//! 2,1,!1.25
//! # comments and blank lines are skipped
//! ```

use async_trait::async_trait;
use sentiment_application::{SentimentSource, SourceError};
use sentiment_domain::SentimentVector;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads sentiment vectors from a JSONL file
#[derive(Debug, Clone)]
pub struct JsonlSentimentSource {
    path: PathBuf,
}

impl JsonlSentimentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SentimentSource for JsonlSentimentSource {
    async fn load(&self) -> Result<Vec<SentimentVector>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Read {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let vectors = parse_lines(&content)?;
        debug!("Read {} vectors from {}", vectors.len(), self.path.display());
        Ok(vectors)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse every non-empty, non-comment line into a vector
///
/// Line numbers in errors are 1-based.
pub fn parse_lines(content: &str) -> Result<Vec<SentimentVector>, SourceError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            parse_line(line.trim()).map_err(|message| SourceError::InvalidLine {
                line: index + 1,
                message,
            })
        })
        .collect()
}

fn parse_line(line: &str) -> Result<SentimentVector, String> {
    if line.starts_with('{') {
        serde_json::from_str(line).map_err(|e| e.to_string())
    } else {
        line.parse().map_err(|e: sentiment_domain::DomainError| e.to_string())
    }
}
