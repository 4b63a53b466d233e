//! # Peak Extraction Module
//!
//! Finds local maxima in an ordered sequence of (x, y) points with a single
//! forward scan. The scan keeps one candidate and one "ascending" flag; a
//! candidate is confirmed as a peak the first time a strictly lower point
//! follows an ascending run.
//!
//! ## Known limitation
//! A run that is still ascending when the sequence ends is never confirmed,
//! so a maximum sitting on the last point is not reported.

use serde::{Deserialize, Serialize};

pub use crate::config::DEFAULT_MIN_AMPLITUDE;

/// A single (x, y) sample of an ordered curve. For spectra, `x` is the
/// frequency in Hz and `y` the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Returns the local maxima of `points` whose `y` is at least `min_amplitude`.
///
/// Peaks come out in input order. Equal neighbours extend an ascending run
/// rather than confirming it, so a plateau reports its last point. A
/// `min_amplitude` of zero (or less) disables thresholding.
///
/// Runs in O(len) time with O(1) extra state besides the output.
pub fn extract_peaks(points: &[Point], min_amplitude: f64) -> Vec<Point> {
    let mut peaks = Vec::new();
    if points.is_empty() {
        return peaks;
    }

    let mut candidate = 0;
    let mut last_emitted: Option<usize> = None;
    let mut ascending = false;

    for (i, point) in points.iter().enumerate() {
        if point.y >= points[candidate].y {
            candidate = i;
            ascending = true;
        } else if !ascending {
            // Still descending: follow the floor down.
            candidate = i;
        } else if last_emitted != Some(candidate) {
            let peak = points[candidate];
            if min_amplitude <= 0.0 || peak.y >= min_amplitude {
                peaks.push(peak);
                last_emitted = Some(candidate);
            }
            ascending = false;
        }
    }

    peaks
}
