//! # Notescope - Spectrum and Note Analysis CLI
//!
//! Headless front end for `notescope-core`. Synthesizes or loads a sample
//! buffer, runs the spectrum → peaks → notes pipeline and prints what it
//! found. Regenerated waveforms are written to WAV files instead of being
//! played.

mod commands;
mod wav;

use clap::{Args, Parser, Subcommand};
use notescope_core::synth::PRESET_CHORDS;
use std::path::PathBuf;
use std::process::ExitCode;

/// Notescope - find the notes in a waveform
#[derive(Parser)]
#[command(name = "notescope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings shared by every command that builds an analysis config.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON file with analysis settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Number of samples to analyze or synthesize
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Minimum peak amplitude (0 disables thresholding)
    #[arg(long)]
    pub min_amplitude: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a synthesized chord or a WAV file
    Analyze {
        /// Frequencies to synthesize (defaults to the demo chord)
        #[arg(short, long = "freq", value_name = "HZ", conflicts_with_all = ["wav", "preset"])]
        frequencies: Vec<f64>,

        /// Analyze one of the predefined chords
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..PRESET_CHORDS.len() as i64), conflicts_with = "wav")]
        preset: Option<u8>,

        /// WAV file to analyze instead of a synthesized signal
        #[arg(long)]
        wav: Option<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Include the full spectrum in JSON output
        #[arg(long, requires = "json")]
        spectrum: bool,

        /// Write a waveform regenerated from the detected frequencies
        #[arg(long, value_name = "PATH")]
        reconstruct: Option<PathBuf>,
    },

    /// Name the notes closest to the given frequencies
    Note {
        /// Frequencies in Hz
        #[arg(required = true, value_name = "HZ")]
        frequencies: Vec<f64>,
    },

    /// Write a normalized sum of sines to a WAV file
    Synth {
        /// Frequencies to sum
        #[arg(short, long = "freq", value_name = "HZ", required = true)]
        frequencies: Vec<f64>,

        /// Output WAV path
        #[arg(short, long)]
        out: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the effective analysis configuration as JSON
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    let result = match cli.command {
        Commands::Analyze {
            frequencies,
            preset,
            wav,
            config,
            json,
            spectrum,
            reconstruct,
        } => commands::analyze::run(
            &frequencies,
            preset,
            wav.as_deref(),
            &config,
            json,
            spectrum,
            reconstruct.as_deref(),
        ),
        Commands::Note { frequencies } => commands::note::run(&frequencies),
        Commands::Synth {
            frequencies,
            out,
            config,
        } => commands::synth::run(&frequencies, &out, &config),
        Commands::Config { config } => commands::config::run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
