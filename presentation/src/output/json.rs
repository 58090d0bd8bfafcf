//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use sentiment_domain::{AnalysisReport, ScoredVector, SentimentVector};
use serde_json::json;

/// Formats sentiment results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &impl serde::Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, vector: &SentimentVector) -> String {
        Self::pretty(&ScoredVector::new(*vector))
    }

    fn format_combination(&self, inputs: &[SentimentVector], result: &SentimentVector) -> String {
        let inputs: Vec<ScoredVector> = inputs.iter().copied().map(ScoredVector::new).collect();
        Self::pretty(&json!({
            "inputs": inputs,
            "result": ScoredVector::new(*result),
        }))
    }

    fn format_report(&self, report: &AnalysisReport) -> String {
        Self::pretty(report)
    }
}
