//! Analyze Sentiments use case
//!
//! Loads a sequence of sentiment vectors, scores each one, folds them into
//! a single combined vector and computes the momentum-adjusted score.

use crate::config::AnalysisConfig;
use crate::ports::analysis_logger::{
    AnalysisEvent, AnalysisEventKind, AnalysisLogger, NoAnalysisLogger,
};
use crate::ports::sentiment_source::{SentimentSource, SourceError};
use sentiment_domain::AnalysisReport;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during an analysis
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("No sentiment vectors to analyze in {0}")]
    NoVectors(String),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Use case for analyzing a sequence of sentiment vectors
pub struct AnalyzeSentimentsUseCase<S: SentimentSource + 'static> {
    source: Arc<S>,
    logger: Arc<dyn AnalysisLogger>,
}

impl<S: SentimentSource + 'static> AnalyzeSentimentsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            logger: Arc::new(NoAnalysisLogger),
        }
    }

    /// Record analysis events to a structured log
    pub fn with_logger(mut self, logger: Arc<dyn AnalysisLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case
    pub async fn execute(&self, config: &AnalysisConfig) -> Result<AnalysisReport, AnalyzeError> {
        let description = self.source.describe();
        info!("Loading sentiment vectors from {}", description);

        let vectors = self.source.load().await?;
        debug!("Loaded {} vectors", vectors.len());

        let report = AnalysisReport::analyze(description.clone(), vectors, config.momentum)
            .ok_or_else(|| AnalyzeError::NoVectors(description))?;

        for (index, entry) in report.entries.iter().enumerate() {
            debug!("#{} {} -> {:.4}", index, entry.vector, entry.score);
            self.logger.log(AnalysisEvent::new(
                AnalysisEventKind::VectorScored,
                json!({
                    "index": index,
                    "vector": entry.vector,
                    "score": entry.score,
                }),
            ));
        }

        self.logger.log(AnalysisEvent::new(
            AnalysisEventKind::VectorsCombined,
            json!({
                "count": report.len(),
                "combined": report.combined,
                "score": report.combined_score,
            }),
        ));

        info!(
            "Analyzed {} vectors: combined score {:.4}, momentum score {:.4}",
            report.len(),
            report.combined_score,
            report.momentum_score
        );

        self.logger.log(AnalysisEvent::new(
            AnalysisEventKind::AnalysisComplete,
            json!({
                "source": report.source,
                "combined_score": report.combined_score,
                "momentum_score": report.momentum_score,
                "alpha": report.momentum.alpha,
                "beta": report.momentum.beta,
            }),
        ));

        Ok(report)
    }
}
