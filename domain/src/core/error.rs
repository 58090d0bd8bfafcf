//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The algebra itself is total; these only arise when raw scalars are lifted
/// into the typed model at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid polarity: {0} (expected -1, 0 or 1)")]
    InvalidPolarity(i64),

    #[error("Invalid intensity: {0} (expected a finite value > 0)")]
    InvalidIntensity(f64),

    #[error("Invalid momentum parameter {name}: {value} (expected 0.0..=1.0)")]
    InvalidMomentum { name: &'static str, value: f64 },

    #[error("Invalid sentiment vector: {0}")]
    InvalidVector(String),
}
