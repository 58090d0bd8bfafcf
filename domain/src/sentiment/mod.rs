//! Sentiment vector algebra
//!
//! A sentiment is modelled as a 3-dimensional vector:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  SentimentVector                                              │
//! ├───────────────────────────────────────────────────────────────┤
//! │  magnitude  (u32)        strength / weight                    │
//! │  polarity   (-1, 0, +1)  negative / neutral / positive        │
//! │  intensity  (> 0)        >= 1 quantifier, < 1 diminisher      │
//! └───────────────────────────────────────────────────────────────┘
//!
//!   create / s2v ──► combine (0..n times) ──► v2s (bounded score)
//! ```
//!
//! The free functions below mirror the method API for callers that prefer
//! the flat `create` / `combine` / `v2s` vocabulary.

pub mod combine;
pub mod intensity;
pub mod momentum;
pub mod polarity;
pub mod projection;
pub mod report;
pub mod vector;

pub use combine::combine_all;
pub use intensity::{Intensity, IntensityCategory};
pub use momentum::{MomentumParams, momentum_score};
pub use polarity::Polarity;
pub use projection::{PROJECTION_BOUND, PROJECTION_SCALE};
pub use report::{AnalysisReport, ScoredVector};
pub use vector::SentimentVector;

use crate::core::error::DomainError;

/// Create a sentiment vector from raw scalars
pub fn create(
    magnitude: u32,
    polarity: i32,
    intensity: f64,
) -> Result<SentimentVector, DomainError> {
    SentimentVector::create(magnitude, polarity, intensity)
}

/// Treat three raw scalars as a sentiment vector
pub fn s2v(
    magnitude: u32,
    polarity: i32,
    intensity: f64,
) -> Result<SentimentVector, DomainError> {
    create(magnitude, polarity, intensity)
}

/// Project a sentiment vector onto a bounded scalar score
pub fn v2s(v: &SentimentVector) -> f64 {
    v.score()
}

/// Combine two sentiment vectors into a new one
pub fn combine(v1: &SentimentVector, v2: &SentimentVector) -> SentimentVector {
    v1.combine(v2)
}

/// Distance of the intensity from neutral, `|intensity - 1|`
pub fn effective_intensity(v: &SentimentVector) -> f64 {
    v.effective_intensity()
}

/// Magnitude weighted by effective intensity
pub fn effective_strength(v: &SentimentVector) -> f64 {
    v.effective_strength()
}

/// Human-readable representation with the intensity fixed to 4 decimals
pub fn to_debug_string(v: &SentimentVector) -> String {
    v.to_debug_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s2v_is_create() {
        assert_eq!(s2v(3, -1, 0.7), create(3, -1, 0.7));
        assert!(s2v(3, 9, 0.7).is_err());
    }

    #[test]
    fn test_flat_api_pipeline() {
        let v1 = create(3, 1, 1.2).unwrap();
        let v2 = create(3, -1, 1.5).unwrap();

        let combined = combine(&v1, &v2);
        assert_eq!(
            to_debug_string(&combined),
            "SentimentVector: [magnitude: 0, polarity: -1, intensity: 1.5000]"
        );
        assert!(effective_strength(&v2) > effective_strength(&v1));
        assert_eq!(effective_intensity(&combined), 0.5);

        // zero magnitude: base 1.5, score = 1.5 * -1 * 1.5
        let expected = (-2.25f64).atan() * PROJECTION_SCALE;
        assert!((v2s(&combined) - expected).abs() < 1e-12);
    }
}
