//! # Direct Fourier Transform Module
//!
//! This module computes magnitude spectra with a textbook, direct discrete
//! transform. Every bin is a full correlation of the buffer against a cosine,
//! so the cost is O(N²). Peak thresholds downstream are tuned to the exact
//! values this produces, which is why no fast transform is substituted here.
//!
//! ## Features
//! - Real-cosine correlation magnitude per bin
//! - Two normalization conventions, each paired with its own frequency axis
//! - Spectrum points ready for peak extraction
//!
//! No windowing or DC removal is applied; the buffer is analyzed as given.

use std::f64::consts::TAU;

use crate::config::BinScaling;
use crate::peaks::Point;

/// Computes the magnitude spectrum with the default [`BinScaling::HalfLength`]
/// convention.
///
/// # Arguments
/// * `samples` - Real-valued input buffer of length N
///
/// # Returns
/// * `Vec<f64>` - ⌊N/2⌋ non-negative magnitudes, bin 0 first
pub fn transform(samples: &[f64]) -> Vec<f64> {
    transform_with(samples, BinScaling::HalfLength)
}

/// Computes the magnitude spectrum with an explicit normalization convention.
///
/// For each bin `k` in `0..N/2`:
/// `magnitude(k) = |Σ sample(i) · cos(2π·k·i/N)| / D`
/// where `D` is given by `scaling`.
///
/// # Arguments
/// * `samples` - Real-valued input buffer of length N
/// * `scaling` - Divisor convention; pair it with [`bin_frequency`] using the same value
///
/// # Returns
/// * `Vec<f64>` - ⌊N/2⌋ non-negative magnitudes; empty for an empty buffer
pub fn transform_with(samples: &[f64], scaling: BinScaling) -> Vec<f64> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let base = TAU / n as f64;
    let divisor = scaling.divisor(n);

    (0..n / 2)
        .map(|k| {
            let omega = base * k as f64;
            let correlation: f64 = samples
                .iter()
                .enumerate()
                .map(|(i, &sample)| sample * (omega * i as f64).cos())
                .sum();
            correlation.abs() / divisor
        })
        .collect()
}

/// Frequency in Hz of bin `k` for a buffer of `n` samples.
///
/// # Arguments
/// * `k` - Bin index
/// * `n` - Length of the analyzed buffer (not of the spectrum)
/// * `sample_rate` - Sample rate in Hz
/// * `scaling` - Must match the convention the magnitudes were computed with
pub fn bin_frequency(k: usize, n: usize, sample_rate: u32, scaling: BinScaling) -> f64 {
    k as f64 * scaling.bin_width(n, sample_rate)
}

/// Transforms `samples` and labels each magnitude with its bin frequency.
///
/// The returned points are frequency-ascending and can be passed straight
/// to [`crate::peaks::extract_peaks`].
///
/// # Panics
/// * If `sample_rate` is zero
pub fn spectrum(samples: &[f64], sample_rate: u32, scaling: BinScaling) -> Vec<Point> {
    assert!(sample_rate > 0, "sample rate must be positive");
    let n = samples.len();

    transform_with(samples, scaling)
        .into_iter()
        .enumerate()
        .map(|(k, magnitude)| Point::new(bin_frequency(k, n, sample_rate, scaling), magnitude))
        .collect()
}
