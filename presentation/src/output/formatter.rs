//! Output formatter trait

use sentiment_domain::{AnalysisReport, OutputFormat, SentimentVector};

/// Trait for formatting sentiment results
pub trait OutputFormatter {
    /// Format a single vector with its score
    fn format_score(&self, vector: &SentimentVector) -> String;

    /// Format a combination of `inputs` into `result`
    fn format_combination(&self, inputs: &[SentimentVector], result: &SentimentVector) -> String;

    /// Format a complete analysis report
    fn format_report(&self, report: &AnalysisReport) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
