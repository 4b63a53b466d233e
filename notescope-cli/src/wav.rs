//! WAV input and output for sample buffers.
//!
//! Stands in for the recorder and the playback device: recorded takes are
//! read from files, and regenerated waveforms are written back to files.

use anyhow::{Context, Result, ensure};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

/// Reads up to `max_frames` frames of the first channel.
///
/// Integer PCM is scaled to [-1, 1]. Returns the samples and the file's
/// sample rate.
pub fn read_samples<R: Read>(reader: R, max_frames: usize) -> Result<(Vec<f64>, u32)> {
    let mut wav = WavReader::new(reader).context("failed to parse WAV data")?;
    let spec = wav.spec();
    let channels = spec.channels as usize;
    ensure!(channels > 0, "WAV data declares zero channels");

    let samples = match spec.sample_format {
        SampleFormat::Float => wav
            .samples::<f32>()
            .step_by(channels)
            .take(max_frames)
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f64;
            wav.samples::<i32>()
                .step_by(channels)
                .take(max_frames)
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    log::debug!(
        "Read {} frames ({} channel(s), {} bit {:?}) at {} Hz",
        samples.len(),
        channels,
        spec.bits_per_sample,
        spec.sample_format,
        spec.sample_rate
    );
    Ok((samples, spec.sample_rate))
}

/// Writes a mono 32-bit float WAV.
pub fn write_samples<W: Write + Seek>(writer: W, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut wav = WavWriter::new(writer, spec).context("failed to start WAV data")?;
    for &sample in samples {
        wav.write_sample(sample as f32)?;
    }
    wav.finalize()?;
    Ok(())
}

pub fn read_wav_file(path: &Path, max_frames: usize) -> Result<(Vec<f64>, u32)> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_samples(BufReader::new(file), max_frames)
        .with_context(|| format!("failed to read {}", path.display()))
}

pub fn write_wav_file(path: &Path, samples: &[f64], sample_rate: u32) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_samples(BufWriter::new(file), samples, sample_rate)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
