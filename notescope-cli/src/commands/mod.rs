//! CLI command implementations

pub mod analyze;
pub mod config;
pub mod note;
pub mod synth;

use anyhow::Result;
use notescope_core::AnalysisConfig;

use crate::ConfigArgs;

/// Layers defaults, the optional JSON file and command-line overrides,
/// then validates the result.
pub fn build_config(args: &ConfigArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(sample_rate) = args.sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(window) = args.window {
        config.window_len = window;
    }
    if let Some(min_amplitude) = args.min_amplitude {
        config.min_amplitude = min_amplitude;
    }

    config.validate()?;
    Ok(config)
}
