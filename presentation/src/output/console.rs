//! Console output formatter for sentiment results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use sentiment_domain::{AnalysisReport, Polarity, SentimentVector};

/// Formats sentiment results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One vector per line with its score
    pub fn format_score(vector: &SentimentVector) -> String {
        format!(
            "{}\n{} {}\n",
            vector.to_debug_string(),
            "Score:".cyan().bold(),
            Self::colored_score(vector.polarity(), vector.score())
        )
    }

    pub fn format_combination(inputs: &[SentimentVector], result: &SentimentVector) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Inputs"));
        for (index, vector) in inputs.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {}  {}\n",
                index + 1,
                vector,
                Self::colored_score(vector.polarity(), vector.score())
            ));
        }

        output.push_str(&Self::section_header("Combined"));
        output.push_str(&format!("  {}\n", result));
        output.push_str(&format!(
            "  {} {}\n",
            "Score:".cyan().bold(),
            Self::colored_score(result.polarity(), result.score())
        ));

        output
    }

    pub fn format_report(report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Sentiment Analysis"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({} vectors)\n",
            "Source:".cyan().bold(),
            report.source,
            report.len()
        ));

        output.push_str(&Self::section_header("Vectors"));
        for (index, entry) in report.entries.iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}. {}  {}\n",
                index + 1,
                entry.vector,
                Self::colored_score(entry.vector.polarity(), entry.score)
            ));
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "  {:<16} {}\n",
            "Combined:".bold(),
            report.combined
        ));
        output.push_str(&format!(
            "  {:<16} {}\n",
            "Combined score:".bold(),
            Self::colored_score(report.combined.polarity(), report.combined_score)
        ));
        output.push_str(&format!(
            "  {:<16} {:.4} {}\n",
            "Momentum score:".bold(),
            report.momentum_score,
            format!(
                "(alpha {}, beta {})",
                report.momentum.alpha, report.momentum.beta
            )
            .dimmed()
        ));

        if let Some(strongest) = report.strongest() {
            output.push_str(&format!(
                "  {:<16} {}\n",
                "Strongest:".bold(),
                strongest.vector
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn colored_score(polarity: Polarity, score: f64) -> ColoredString {
        let text = format!("{:+.4}", score);
        match polarity {
            Polarity::Positive => text.green(),
            Polarity::Negative => text.red(),
            Polarity::Neutral => text.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, vector: &SentimentVector) -> String {
        Self::format_score(vector)
    }

    fn format_combination(&self, inputs: &[SentimentVector], result: &SentimentVector) -> String {
        Self::format_combination(inputs, result)
    }

    fn format_report(&self, report: &AnalysisReport) -> String {
        Self::format_report(report)
    }
}
