//! Analysis result value objects

use super::combine::combine_all;
use super::momentum::{MomentumParams, momentum_score};
use super::vector::SentimentVector;
use serde::{Deserialize, Serialize};

/// A vector together with its projected score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredVector {
    pub vector: SentimentVector,
    pub score: f64,
}

impl ScoredVector {
    pub fn new(vector: SentimentVector) -> Self {
        Self {
            score: vector.score(),
            vector,
        }
    }
}

/// Result of analyzing a sequence of sentiment vectors
///
/// # Example
///
/// ```
/// use sentiment_domain::sentiment::{AnalysisReport, MomentumParams, SentimentVector};
///
/// let vectors = vec![
///     SentimentVector::create(0, 0, 1.0).unwrap(),
///     SentimentVector::create(5, 1, 1.3).unwrap(),
/// ];
///
/// let report = AnalysisReport::analyze("inline", vectors, MomentumParams::default()).unwrap();
/// assert_eq!(report.combined.magnitude(), 5);
/// assert_eq!(report.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Where the vectors came from (file path, "inline", ...)
    pub source: String,
    /// Each input vector with its individual score
    pub entries: Vec<ScoredVector>,
    /// Left fold of all vectors in input order
    pub combined: SentimentVector,
    /// Score of the combined vector
    pub combined_score: f64,
    /// Momentum-adjusted score across the sequence
    pub momentum_score: f64,
    /// Parameters used for the momentum score
    pub momentum: MomentumParams,
}

impl AnalysisReport {
    /// Analyze a sequence of vectors, returning `None` when it is empty
    pub fn analyze(
        source: impl Into<String>,
        vectors: Vec<SentimentVector>,
        momentum: MomentumParams,
    ) -> Option<Self> {
        let combined = combine_all(vectors.iter().copied())?;

        Some(Self {
            source: source.into(),
            momentum_score: momentum_score(&vectors, momentum),
            entries: vectors.into_iter().map(ScoredVector::new).collect(),
            combined_score: combined.score(),
            combined,
            momentum,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with the largest absolute score
    pub fn strongest(&self) -> Option<&ScoredVector> {
        self.entries
            .iter()
            .max_by(|a, b| a.score.abs().total_cmp(&b.score.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(magnitude: u32, polarity: i32, intensity: f64) -> SentimentVector {
        SentimentVector::create(magnitude, polarity, intensity).unwrap()
    }

    #[test]
    fn test_analyze_empty_is_none() {
        assert!(AnalysisReport::analyze("empty", vec![], MomentumParams::default()).is_none());
    }

    #[test]
    fn test_analyze_scores_each_entry() {
        let vectors = vec![v(3, 1, 1.2), v(3, -1, 1.5)];
        let report =
            AnalysisReport::analyze("inline", vectors.clone(), MomentumParams::default()).unwrap();

        assert_eq!(report.source, "inline");
        assert_eq!(report.entries[0].score, vectors[0].score());
        assert_eq!(report.entries[1].score, vectors[1].score());
        assert_eq!(report.combined, v(0, -1, 1.5));
        assert_eq!(report.combined_score, report.combined.score());
        assert_eq!(
            report.momentum_score,
            momentum_score(&vectors, MomentumParams::default())
        );
    }

    #[test]
    fn test_strongest_entry() {
        let vectors = vec![v(1, 1, 1.0), v(6, -1, 1.4), v(2, 1, 0.9)];
        let report = AnalysisReport::analyze("inline", vectors, MomentumParams::default()).unwrap();
        assert_eq!(report.strongest().unwrap().vector, v(6, -1, 1.4));
    }

    #[test]
    fn test_report_serializes_vectors_inline() {
        let report =
            AnalysisReport::analyze("inline", vec![v(2, 1, 0.5)], MomentumParams::default())
                .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["combined"]["polarity"], 1);
        assert_eq!(json["entries"][0]["vector"]["magnitude"], 2);
    }
}
