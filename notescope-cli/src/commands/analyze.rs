//! Analyze command: run the pipeline and report detected notes

use anyhow::{Context, Result, ensure};
use notescope_core::peaks::Point;
use notescope_core::synth::{self, DEMO_FREQUENCIES, PRESET_CHORDS};
use notescope_core::{Analysis, AnalysisConfig, DetectedItem, analyze, notes, reconstruct};
use serde::Serialize;
use std::path::Path;

use crate::ConfigArgs;
use crate::wav;

/// JSON report; the spectrum is only included on request.
#[derive(Serialize)]
struct Report<'a> {
    config: &'a AnalysisConfig,
    sample_count: usize,
    detected: &'a [DetectedItem],
    #[serde(skip_serializing_if = "Option::is_none")]
    spectrum: Option<&'a [Point]>,
}

pub fn run(
    frequencies: &[f64],
    preset: Option<u8>,
    wav_path: Option<&Path>,
    args: &ConfigArgs,
    json: bool,
    include_spectrum: bool,
    reconstruct_path: Option<&Path>,
) -> Result<()> {
    let config = super::build_config(args)?;
    let (samples, config) = load_samples(frequencies, preset, wav_path, config)?;

    let analysis = analyze(&samples, &config)?;
    log::info!(
        "Detected {} peak(s) in {} samples",
        analysis.detected.len(),
        analysis.sample_count
    );

    if json {
        let report = Report {
            config: &config,
            sample_count: analysis.sample_count,
            detected: &analysis.detected,
            spectrum: include_spectrum.then_some(analysis.spectrum.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&analysis);
    }

    if let Some(path) = reconstruct_path {
        write_reconstruction(&analysis, &config, path)?;
    }

    Ok(())
}

/// Reads the WAV file when one is given, otherwise synthesizes the selected
/// chord. A WAV file's own sample rate replaces the configured one.
pub fn load_samples(
    frequencies: &[f64],
    preset: Option<u8>,
    wav_path: Option<&Path>,
    mut config: AnalysisConfig,
) -> Result<(Vec<f64>, AnalysisConfig)> {
    let samples = match wav_path {
        Some(path) => {
            let (samples, file_rate) = wav::read_wav_file(path, config.window_len)?;
            if file_rate != config.sample_rate {
                log::warn!(
                    "{} is sampled at {} Hz, analyzing at that rate instead of {} Hz",
                    path.display(),
                    file_rate,
                    config.sample_rate
                );
                config.sample_rate = file_rate;
            }
            if samples.len() < config.window_len {
                log::warn!(
                    "{} holds only {} of {} requested samples",
                    path.display(),
                    samples.len(),
                    config.window_len
                );
            }
            samples
        }
        None => {
            let frequencies = select_chord(frequencies, preset)?;
            log::info!("Synthesizing {:?} Hz, {} samples", frequencies, config.window_len);
            synth::synthesize(frequencies, config.window_len, config.sample_rate)
        }
    };
    Ok((samples, config))
}

/// Picks the preset chord, the given frequencies or the demo chord, in
/// that order.
fn select_chord(frequencies: &[f64], preset: Option<u8>) -> Result<&[f64]> {
    let chord: &[f64] = match preset {
        Some(index) => PRESET_CHORDS.get(index as usize).with_context(|| {
            format!(
                "preset {} does not exist (choose 0 to {})",
                index,
                PRESET_CHORDS.len() - 1
            )
        })?,
        None if frequencies.is_empty() => &DEMO_FREQUENCIES,
        None => frequencies,
    };
    ensure!(
        chord.iter().all(|f| f.is_finite() && *f >= 0.0),
        "frequencies must be finite and non-negative"
    );
    Ok(chord)
}

/// Writes the normalized waveform rebuilt from the detected frequencies.
fn write_reconstruction(analysis: &Analysis, config: &AnalysisConfig, path: &Path) -> Result<()> {
    let wave = reconstruct(&analysis.detected, config)?;
    ensure!(!wave.is_empty(), "no frequencies detected, nothing to reconstruct");
    wav::write_wav_file(path, &synth::normalize_for_playback(&wave), config.sample_rate)
}

fn print_table(analysis: &Analysis) {
    if analysis.detected.is_empty() {
        println!("No peaks found.");
        return;
    }

    println!("{:<5} {:>12} {:>10} {:>8}", "Note", "Freq (Hz)", "Amplitude", "Cents");
    for item in &analysis.detected {
        let cents = notes::note_frequency(&item.note)
            .map(|target| format!("{:+.1}", notes::cents_deviation(item.frequency, target)))
            .unwrap_or_default();
        println!(
            "{:<5} {:>12.2} {:>10.3} {:>8}",
            item.note, item.frequency, item.amplitude, cents
        );
    }

    if let Some(dominant) = analysis.dominant() {
        println!("Dominant: {} ({:.2} Hz)", dominant.note, dominant.frequency);
    }
}
