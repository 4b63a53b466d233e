//! # Analysis Configuration Module
//!
//! Holds the numeric settings the pipeline consumes: sample rate, analysis
//! window length, peak threshold and the spectrum scaling convention.
//! Configurations can be layered from a JSON file; any field missing from
//! the file keeps its default.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// Default analysis buffer length in samples.
pub const DEFAULT_WINDOW_LEN: usize = 8192;

/// Buffer length used for recorded input.
pub const SHORT_WINDOW_LEN: usize = 4096;

/// Minimum magnitude a peak must reach when thresholding is enabled.
pub const DEFAULT_MIN_AMPLITUDE: f64 = 0.05;

/// Pairing of the transform's normalization divisor with its frequency axis.
///
/// Both variants put a peak at the same frequency; they differ only in
/// absolute magnitude (by a factor of two). Peak thresholds are tuned for
/// [`BinScaling::HalfLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinScaling {
    /// Divide by N/2, bin k sits at k * R / N.
    #[default]
    HalfLength,
    /// Divide by N, bin k sits at k * R / N / 2.
    FullLength,
}

impl BinScaling {
    /// Normalization divisor for a buffer of `n` samples.
    pub fn divisor(self, n: usize) -> f64 {
        match self {
            BinScaling::HalfLength => n as f64 / 2.0,
            BinScaling::FullLength => n as f64,
        }
    }

    /// Width of one spectrum bin in Hz.
    pub fn bin_width(self, n: usize, sample_rate: u32) -> f64 {
        let step = sample_rate as f64 / n as f64;
        match self {
            BinScaling::HalfLength => step,
            BinScaling::FullLength => step / 2.0,
        }
    }
}

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Number of samples analyzed (and synthesized for reconstruction).
    pub window_len: usize,
    /// Peaks below this magnitude are dropped; 0 disables thresholding.
    pub min_amplitude: f64,
    /// Spectrum normalization and axis convention.
    pub scaling: BinScaling,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            window_len: DEFAULT_WINDOW_LEN,
            min_amplitude: DEFAULT_MIN_AMPLITUDE,
            scaling: BinScaling::default(),
        }
    }
}

impl AnalysisConfig {
    /// Checks the preconditions every pipeline stage relies on.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.sample_rate > 0, "sample rate must be positive");
        ensure!(self.window_len > 0, "window length must be positive");
        ensure!(
            self.min_amplitude.is_finite() && self.min_amplitude >= 0.0,
            "minimum amplitude must be a finite, non-negative number (got {})",
            self.min_amplitude
        );
        Ok(())
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: AnalysisConfig = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        log::debug!("Loaded analysis config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Renders the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Frequency distance between two adjacent spectrum bins.
    pub fn bin_width(&self) -> f64 {
        self.scaling.bin_width(self.window_len, self.sample_rate)
    }
}
