//! Note command: name the notes closest to given frequencies

use anyhow::Result;
use notescope_core::notes;

pub fn run(frequencies: &[f64]) -> Result<()> {
    for &freq in frequencies {
        println!("{}", describe(freq));
    }
    Ok(())
}

fn describe(freq: f64) -> String {
    match notes::find_note(freq) {
        Some(entry) => format!(
            "{:>9.2} Hz  {:<4} {:+6.1} cents",
            freq,
            entry.name,
            notes::cents_deviation(freq, entry.frequency)
        ),
        None => format!("{:>9.2} Hz  {}", freq, notes::UNKNOWN_NOTE),
    }
}
