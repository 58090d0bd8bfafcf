//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod momentum;
mod output;

pub use logging::FileLoggingConfig;
pub use momentum::FileMomentumConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use sentiment_application::AnalysisConfig;
use sentiment_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("[momentum] {0}")]
    InvalidMomentum(#[source] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Momentum scoring weights
    pub momentum: FileMomentumConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Structured logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration without converting it
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.to_analysis_config().map(|_| ())
    }

    /// Build the application-level analysis configuration
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig, ConfigValidationError> {
        let momentum = self
            .momentum
            .to_params()
            .map_err(ConfigValidationError::InvalidMomentum)?;
        Ok(AnalysisConfig { momentum })
    }
}
