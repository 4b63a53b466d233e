//! Synth command: write a normalized chord to a WAV file

use anyhow::{Result, ensure};
use notescope_core::synth;
use std::path::Path;

use crate::ConfigArgs;
use crate::wav;

pub fn run(frequencies: &[f64], out: &Path, args: &ConfigArgs) -> Result<()> {
    let config = super::build_config(args)?;
    ensure!(
        frequencies.iter().all(|f| f.is_finite() && *f >= 0.0),
        "frequencies must be finite and non-negative"
    );

    let signal = synth::synthesize(frequencies, config.window_len, config.sample_rate);
    ensure!(!signal.is_empty(), "nothing to synthesize");

    wav::write_wav_file(out, &synth::normalize_for_playback(&signal), config.sample_rate)
}
