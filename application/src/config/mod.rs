//! Application-level configuration.
//!
//! - [`AnalysisConfig`]: aggregation parameters for sequence analysis

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
