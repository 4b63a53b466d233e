//! # Waveform Synthesis Module
//!
//! Builds sampled signals as sums of unit-amplitude sine waves. Used for
//! demo and test input, and to regenerate a waveform from the frequencies
//! the analysis detected.
//!
//! No clipping or normalization happens during synthesis: summing k sines
//! yields peaks of up to k. Use [`normalize_for_playback`] before handing
//! a buffer to an audio sink.

use std::f64::consts::TAU;

/// The chord analyzed when no other input is given.
pub static DEMO_FREQUENCIES: [f64; 6] = [220.0, 262.0, 330.0, 440.0, 523.0, 659.0];

/// Predefined chords offered for quick experiments.
pub static PRESET_CHORDS: [[f64; 3]; 4] = [
    [220.0, 262.0, 330.0],
    [440.0, 523.0, 659.0],
    [262.0, 330.0, 392.0],
    [523.0, 659.0, 784.0],
];

/// Sums one sine per frequency into a buffer of `sample_count` samples.
///
/// Sample `i` is `Σ sin(2π · f · i / sample_rate)`. An empty frequency set
/// means "no signal" and yields an empty buffer rather than silence.
///
/// # Panics
/// * If `sample_rate` is zero
pub fn synthesize(frequencies: &[f64], sample_count: usize, sample_rate: u32) -> Vec<f64> {
    assert!(sample_rate > 0, "sample rate must be positive");
    if frequencies.is_empty() {
        return Vec::new();
    }

    let step = TAU / sample_rate as f64;
    (0..sample_count)
        .map(|i| {
            let phase = i as f64 * step;
            frequencies.iter().map(|&f| (phase * f).sin()).sum()
        })
        .collect()
}

/// Scales a buffer so its largest absolute sample is exactly 1.0.
///
/// A buffer that is silent (or empty) is returned unchanged.
pub fn normalize_for_playback(samples: &[f64]) -> Vec<f64> {
    let abs_max = samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if abs_max == 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|s| s / abs_max).collect()
}
