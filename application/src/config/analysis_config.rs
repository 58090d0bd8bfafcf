//! Analysis configuration

use sentiment_domain::{DomainError, MomentumParams};

/// Controls how [`AnalyzeSentimentsUseCase`](crate::AnalyzeSentimentsUseCase)
/// aggregates a sequence of vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisConfig {
    /// Weights for the momentum-adjusted score
    pub momentum: MomentumParams,
}

impl AnalysisConfig {
    /// Creates an AnalysisConfig from raw momentum weights.
    pub fn with_momentum(alpha: f64, beta: f64) -> Result<Self, DomainError> {
        Ok(Self {
            momentum: MomentumParams::new(alpha, beta)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_momentum() {
        let config = AnalysisConfig::default();
        assert_eq!(config.momentum.alpha, 0.5);
        assert_eq!(config.momentum.beta, 0.5);
    }

    #[test]
    fn test_with_momentum_validates() {
        assert!(AnalysisConfig::with_momentum(0.3, 0.9).is_ok());
        assert!(AnalysisConfig::with_momentum(-0.1, 0.9).is_err());
    }
}
