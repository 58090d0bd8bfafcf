//! Command-line overrides merged over the loaded configuration

use anyhow::Result;
use sentiment_application::AnalysisConfig;
use sentiment_domain::{MomentumParams, OutputFormat};
use sentiment_infrastructure::FileConfig;
use sentiment_presentation::OutputFormat as CliOutputFormat;

/// `-o` wins over `[output] format`, which wins over the default (text)
pub fn output_format(cli: Option<CliOutputFormat>, config: &FileConfig) -> OutputFormat {
    cli.map(Into::into)
        .or(config.output.format)
        .unwrap_or_default()
}

/// Colors stay on unless disabled by `--no-color` or `[output] color = false`
pub fn use_color(no_color: bool, config: &FileConfig) -> bool {
    !no_color && config.output.color
}

/// Merge `--alpha`/`--beta` over the configured momentum weights
pub fn analysis_config(
    config: &FileConfig,
    alpha: Option<f64>,
    beta: Option<f64>,
) -> Result<AnalysisConfig> {
    let mut analysis_config = config.to_analysis_config()?;
    if alpha.is_some() || beta.is_some() {
        let current = analysis_config.momentum;
        analysis_config.momentum = MomentumParams::new(
            alpha.unwrap_or(current.alpha),
            beta.unwrap_or(current.beta),
        )?;
    }
    Ok(analysis_config)
}
