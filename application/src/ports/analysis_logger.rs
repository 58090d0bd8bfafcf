//! Port for structured analysis logging.
//!
//! Defines the [`AnalysisLogger`] trait for recording what an analysis did
//! (per-vector scores, the combined vector, the final report) to a
//! machine-readable transcript, separate from `tracing` diagnostics.

use serde_json::Value;

/// Step of an analysis that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisEventKind {
    /// One input vector was projected onto its score
    VectorScored,
    /// All inputs were folded into a single vector
    VectorsCombined,
    /// The report is complete
    AnalysisComplete,
}

impl AnalysisEventKind {
    /// Stable identifier written to the `type` field of a log record
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisEventKind::VectorScored => "vector_scored",
            AnalysisEventKind::VectorsCombined => "vectors_combined",
            AnalysisEventKind::AnalysisComplete => "analysis_complete",
        }
    }
}

impl std::fmt::Display for AnalysisEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single analysis step and its JSON payload
#[derive(Debug, Clone)]
pub struct AnalysisEvent {
    pub kind: AnalysisEventKind,
    pub payload: Value,
}

impl AnalysisEvent {
    pub fn new(kind: AnalysisEventKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}

/// Sink for analysis events.
///
/// `log` is synchronous and infallible; a failing sink must not abort the
/// analysis that feeds it.
pub trait AnalysisLogger: Send + Sync {
    fn log(&self, event: AnalysisEvent);
}

/// Discards every event (logging disabled).
pub struct NoAnalysisLogger;

impl AnalysisLogger for NoAnalysisLogger {
    fn log(&self, _event: AnalysisEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(AnalysisEventKind::VectorScored.as_str(), "vector_scored");
        assert_eq!(
            AnalysisEventKind::VectorsCombined.to_string(),
            "vectors_combined"
        );
        assert_eq!(
            AnalysisEventKind::AnalysisComplete.to_string(),
            "analysis_complete"
        );
    }
}
