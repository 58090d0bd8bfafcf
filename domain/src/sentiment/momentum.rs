//! Momentum-based scoring over a sequence of sentiment vectors
//!
//! Tracks how sentiment shifts across a conversation: each new score is
//! blended with the previous adjusted score plus an exponentially smoothed
//! "momentum" of recent changes.

use super::vector::SentimentVector;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Weights for [`momentum_score`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumParams {
    /// Immediate weight of the current score (short-term impact)
    pub alpha: f64,
    /// Momentum factor applied to previous changes (long-term influence)
    pub beta: f64,
}

impl MomentumParams {
    /// Create validated parameters; both must lie in `0.0..=1.0`
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DomainError> {
        let params = Self { alpha, beta };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::InvalidMomentum { name, value });
            }
        }
        Ok(())
    }
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }
}

/// Momentum-adjusted score of a sequence, `0.0` when empty
///
/// A single vector yields its own [`score`](SentimentVector::score).
pub fn momentum_score(vectors: &[SentimentVector], params: MomentumParams) -> f64 {
    let Some((first, rest)) = vectors.split_first() else {
        return 0.0;
    };

    let mut previous = first.score();
    let mut momentum = 0.0;

    for vector in rest {
        let current = vector.score();
        let change = current - previous;

        momentum = params.beta * momentum + (1.0 - params.beta) * change;
        previous = params.alpha * current + (1.0 - params.alpha) * (previous + momentum);
    }

    previous
}
