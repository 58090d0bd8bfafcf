//! Domain layer for sentiment-vectorizer
//!
//! This crate contains the sentiment vector algebra and its value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sentiment Vector
//!
//! A sentiment is a `(magnitude, polarity, intensity)` triple. Vectors are
//! small `Copy` values; every operation returns a new one.
//!
//! ## Combination
//!
//! - **Polarity**: agreement keeps the shared direction, opposition is
//!   settled by effective strength (`magnitude × |intensity - 1|`)
//! - **Magnitude**: agreement reinforces, opposition cancels
//! - **Intensity**: the strongest quantifier or diminisher wins
//!
//! ## Projection
//!
//! `v2s` squashes a vector into a bounded scalar score via `atan`.

pub mod config;
pub mod core;
pub mod sentiment;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use sentiment::{
    AnalysisReport, Intensity, IntensityCategory, MomentumParams, PROJECTION_BOUND,
    PROJECTION_SCALE, Polarity, ScoredVector, SentimentVector, combine, combine_all, create,
    effective_intensity, effective_strength, momentum_score, s2v, to_debug_string, v2s,
};
