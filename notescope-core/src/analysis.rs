//! # Analysis Pipeline Module
//!
//! Chains the stages into one call: samples → spectrum → peaks → note names.
//! Every call owns its buffers; nothing is cached between analyses, so the
//! pipeline can run on any thread, including several at once.

use anyhow::Result;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::peaks::{Point, extract_peaks};
use crate::{dft, notes, synth};

/// One detected frequency, as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedItem {
    /// The name of the matched note, or [`notes::UNKNOWN_NOTE`].
    pub note: String,
    /// Peak frequency in Hz.
    pub frequency: f64,
    /// Peak magnitude.
    pub amplitude: f64,
}

/// Represents the result of analyzing one sample buffer.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Sample rate the buffer was analyzed at.
    pub sample_rate: u32,
    /// Number of samples analyzed.
    pub sample_count: usize,
    /// Full spectrum, for display.
    pub spectrum: Vec<Point>,
    /// Peaks above the configured threshold, frequency-ascending.
    pub peaks: Vec<Point>,
    /// One labeled entry per peak.
    pub detected: Vec<DetectedItem>,
}

impl Analysis {
    /// The detected item with the largest amplitude.
    pub fn dominant(&self) -> Option<&DetectedItem> {
        self.detected
            .iter()
            .max_by(|a, b| a.amplitude.total_cmp(&b.amplitude))
    }

    /// Frequencies of all detected items, in detection order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.detected.iter().map(|item| item.frequency).collect()
    }
}

/// Runs the full pipeline over `samples`.
///
/// 1. Validates `config`
/// 2. Computes the magnitude spectrum with the configured scaling
/// 3. Extracts peaks at or above `config.min_amplitude`
/// 4. Labels every peak with its note name
///
/// The whole buffer is analyzed; `config.window_len` only applies to
/// [`reconstruct`].
///
/// # Returns
/// * `Ok(Analysis)` - Spectrum, peaks and labeled results
/// * `Err(e)` - The configuration is invalid
pub fn analyze(samples: &[f64], config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;

    let spectrum = dft::spectrum(samples, config.sample_rate, config.scaling);
    log::debug!(
        "Computed {} spectrum bins from {} samples at {} Hz",
        spectrum.len(),
        samples.len(),
        config.sample_rate
    );

    let peaks = extract_peaks(&spectrum, config.min_amplitude);
    log::debug!(
        "Found {} peaks at or above amplitude {}",
        peaks.len(),
        config.min_amplitude
    );

    let detected: Vec<DetectedItem> = peaks
        .iter()
        .map(|peak| DetectedItem {
            note: notes::map_frequency_to_note(peak.x).to_string(),
            frequency: peak.x,
            amplitude: peak.y,
        })
        .collect();

    for item in &detected {
        log::debug!(
            "Peak {:.2} Hz (amplitude {:.3}) -> {}",
            item.frequency,
            item.amplitude,
            item.note
        );
    }

    Ok(Analysis {
        sample_rate: config.sample_rate,
        sample_count: samples.len(),
        spectrum,
        peaks,
        detected,
    })
}

/// Regenerates a waveform from detected frequencies.
///
/// Produces `config.window_len` samples, or an empty buffer when nothing
/// was detected.
pub fn reconstruct(detected: &[DetectedItem], config: &AnalysisConfig) -> Result<Vec<f64>> {
    config.validate()?;
    let frequencies: Vec<f64> = detected.iter().map(|item| item.frequency).collect();
    Ok(synth::synthesize(
        &frequencies,
        config.window_len,
        config.sample_rate,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BinScaling;

    fn small_config() -> AnalysisConfig {
        AnalysisConfig {
            window_len: 2048,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_buffer_analyzes_to_nothing() {
        let analysis = analyze(&[], &AnalysisConfig::default()).unwrap();
        assert_eq!(analysis.sample_count, 0);
        assert!(analysis.spectrum.is_empty());
        assert!(analysis.peaks.is_empty());
        assert!(analysis.detected.is_empty());
        assert!(analysis.dominant().is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalysisConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(analyze(&[0.0; 16], &config).is_err());
        assert!(reconstruct(&[], &config).is_err());
    }

    #[test]
    fn test_single_tone_is_labeled() {
        let config = small_config();
        let signal = synth::synthesize(&[440.0], config.window_len, config.sample_rate);
        let analysis = analyze(&signal, &config).unwrap();

        assert_eq!(analysis.detected.len(), 1);
        let item = &analysis.detected[0];
        assert_eq!(item.note, "A4");
        assert!((item.frequency - 440.0).abs() <= config.bin_width());
        assert_eq!(analysis.peaks[0].x, item.frequency);
        assert_eq!(analysis.peaks[0].y, item.amplitude);
    }

    #[test]
    fn test_full_length_scaling_keeps_positions() {
        let half = small_config();
        let full = AnalysisConfig {
            scaling: BinScaling::FullLength,
            min_amplitude: half.min_amplitude / 2.0,
            ..half.clone()
        };
        let signal = synth::synthesize(&[440.0], half.window_len, half.sample_rate);

        let a = analyze(&signal, &half).unwrap();
        let b = analyze(&signal, &full).unwrap();
        assert_eq!(a.detected.len(), b.detected.len());
        assert_eq!(a.spectrum.len(), b.spectrum.len());
        // Same bin, half the axis step and half the magnitude
        assert!((a.detected[0].frequency - 2.0 * b.detected[0].frequency).abs() < 1e-9);
        assert!((a.detected[0].amplitude - 2.0 * b.detected[0].amplitude).abs() < 1e-9);
    }

    #[test]
    fn test_reconstruct_uses_detected_frequencies() {
        let config = small_config();
        let detected = vec![
            DetectedItem { note: "A3".into(), frequency: 220.0, amplitude: 0.6 },
            DetectedItem { note: "A4".into(), frequency: 440.0, amplitude: 0.7 },
        ];
        let wave = reconstruct(&detected, &config).unwrap();
        assert_eq!(wave.len(), config.window_len);
        assert_eq!(wave, synth::synthesize(&[220.0, 440.0], 2048, 22050));

        assert!(reconstruct(&[], &config).unwrap().is_empty());
    }

    #[test]
    fn test_dominant_picks_largest_amplitude() {
        let analysis = Analysis {
            sample_rate: 22050,
            sample_count: 0,
            spectrum: vec![],
            peaks: vec![],
            detected: vec![
                DetectedItem { note: "C4".into(), frequency: 261.0, amplitude: 0.4 },
                DetectedItem { note: "E4".into(), frequency: 331.0, amplitude: 0.9 },
                DetectedItem { note: "?".into(), frequency: 9000.0, amplitude: 0.1 },
            ],
        };
        assert_eq!(analysis.dominant().unwrap().note, "E4");
        assert_eq!(analysis.frequencies(), vec![261.0, 331.0, 9000.0]);
    }

    #[test]
    fn test_analysis_serializes_for_reports() {
        let config = small_config();
        let signal = synth::synthesize(&[440.0], config.window_len, config.sample_rate);
        let analysis = analyze(&signal, &config).unwrap();

        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["sample_rate"], 22050);
        assert_eq!(value["sample_count"], 2048);
        assert_eq!(value["spectrum"].as_array().unwrap().len(), 1024);
        assert_eq!(value["detected"][0]["note"], "A4");
        assert!(value["detected"][0]["frequency"].is_f64());
    }
}
