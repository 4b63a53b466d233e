// notescope-core/src/lib.rs

//! The core logic for the notescope spectrum analyzer.
//! This crate turns a sampled waveform into a magnitude spectrum,
//! picks out its dominant frequencies and names them as musical notes.
//! It is completely headless and contains no audio device or UI code.

pub mod analysis;
pub mod config;
pub mod dft;
pub mod notes;
pub mod peaks;
pub mod synth;

pub use analysis::{Analysis, DetectedItem, analyze, reconstruct};
pub use config::{AnalysisConfig, BinScaling};
pub use peaks::{Point, extract_peaks};
