//! Momentum scoring configuration from TOML (`[momentum]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [momentum]
//! alpha = 0.5   # weight of the current score
//! beta = 0.5    # momentum carried over from previous changes
//! ```

use sentiment_domain::{DomainError, MomentumParams};
use serde::{Deserialize, Serialize};

/// Raw momentum configuration from TOML
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMomentumConfig {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for FileMomentumConfig {
    fn default() -> Self {
        let params = MomentumParams::default();
        Self {
            alpha: params.alpha,
            beta: params.beta,
        }
    }
}

impl FileMomentumConfig {
    /// Convert into validated domain parameters
    pub fn to_params(&self) -> Result<MomentumParams, DomainError> {
        MomentumParams::new(self.alpha, self.beta)
    }
}
