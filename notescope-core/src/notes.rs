//! # Musical Note Mapping Module
//!
//! This module translates detected frequencies into note names using a fixed
//! reference table of 108 equal-tempered pitches (C0 to B8, A4 = 440 Hz).
//!
//! ## Features
//! - Static reference table, built into the binary
//! - Frequency-sorted, index-aligned lookup arrays built once on first use
//! - Near-exact match by binary search, with an approximate fallback on the
//!   two table entries bracketing the search position
//! - Reverse lookup from note name to frequency
//! - Cent deviation calculations
//!
//! The approximate fallback never considers the very first (C0) or very last
//! (B8) table entry; frequencies just outside those two notes' exact-match
//! window map to [`UNKNOWN_NOTE`].

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Name returned when no reference note is close enough.
pub const UNKNOWN_NOTE: &str = "?";

/// Maximum distance in Hz for a near-exact match.
pub const NOTE_MATCH_EPSILON: f64 = 0.7;

/// Maximum distance in Hz for an approximate match.
pub const NOTE_MAX_APPROX_DISTANCE: f64 = 5.0;

/// A single reference pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEntry {
    /// Note name (e.g., "A4", "C#3")
    pub name: &'static str,
    /// Frequency in Hz
    pub frequency: f64,
}

const fn note(name: &'static str, frequency: f64) -> NoteEntry {
    NoteEntry { name, frequency }
}

/// Reference pitches C0 to B8, rounded to two decimals.
pub static NOTE_TABLE: [NoteEntry; 108] = [
    note("C0", 16.35), note("C#0", 17.32), note("D0", 18.35), note("D#0", 19.45),
    note("E0", 20.60), note("F0", 21.83), note("F#0", 23.12), note("G0", 24.50),
    note("G#0", 25.96), note("A0", 27.50), note("A#0", 29.14), note("B0", 30.87),
    note("C1", 32.70), note("C#1", 34.65), note("D1", 36.71), note("D#1", 38.89),
    note("E1", 41.20), note("F1", 43.65), note("F#1", 46.25), note("G1", 49.00),
    note("G#1", 51.91), note("A1", 55.00), note("A#1", 58.27), note("B1", 61.74),
    note("C2", 65.41), note("C#2", 69.30), note("D2", 73.42), note("D#2", 77.78),
    note("E2", 82.41), note("F2", 87.31), note("F#2", 92.50), note("G2", 98.00),
    note("G#2", 103.83), note("A2", 110.00), note("A#2", 116.54), note("B2", 123.47),
    note("C3", 130.81), note("C#3", 138.59), note("D3", 146.83), note("D#3", 155.56),
    note("E3", 164.81), note("F3", 174.61), note("F#3", 185.00), note("G3", 196.00),
    note("G#3", 207.65), note("A3", 220.00), note("A#3", 233.08), note("B3", 246.94),
    note("C4", 261.63), note("C#4", 277.18), note("D4", 293.66), note("D#4", 311.13),
    note("E4", 329.63), note("F4", 349.23), note("F#4", 369.99), note("G4", 392.00),
    note("G#4", 415.30), note("A4", 440.00), note("A#4", 466.16), note("B4", 493.88),
    note("C5", 523.25), note("C#5", 554.37), note("D5", 587.33), note("D#5", 622.25),
    note("E5", 659.25), note("F5", 698.46), note("F#5", 739.99), note("G5", 783.99),
    note("G#5", 830.61), note("A5", 880.00), note("A#5", 932.33), note("B5", 987.77),
    note("C6", 1046.50), note("C#6", 1108.73), note("D6", 1174.66), note("D#6", 1244.51),
    note("E6", 1318.51), note("F6", 1396.91), note("F#6", 1479.98), note("G6", 1567.98),
    note("G#6", 1661.22), note("A6", 1760.00), note("A#6", 1864.66), note("B6", 1975.53),
    note("C7", 2093.00), note("C#7", 2217.46), note("D7", 2349.32), note("D#7", 2489.02),
    note("E7", 2637.02), note("F7", 2793.83), note("F#7", 2959.96), note("G7", 3135.96),
    note("G#7", 3322.44), note("A7", 3520.00), note("A#7", 3729.31), note("B7", 3951.07),
    note("C8", 4186.01), note("C#8", 4434.92), note("D8", 4698.63), note("D#8", 4978.03),
    note("E8", 5274.04), note("F8", 5587.65), note("F#8", 5919.91), note("G8", 6271.93),
    note("G#8", 6644.88), note("A8", 7040.00), note("A#8", 7458.62), note("B8", 7902.13),
];

/// Frequency-sorted view of [`NOTE_TABLE`].
///
/// `frequencies[i]` belongs to `entries[i]`; the two vectors are kept in
/// lockstep so lookups never key a map by a float.
struct NoteIndex {
    frequencies: Vec<f64>,
    entries: Vec<&'static NoteEntry>,
    by_name: BTreeMap<&'static str, usize>,
}

static NOTE_INDEX: Lazy<NoteIndex> = Lazy::new(|| {
    let mut entries: Vec<&'static NoteEntry> = NOTE_TABLE.iter().collect();
    entries.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));

    let frequencies = entries.iter().map(|e| e.frequency).collect();
    let by_name = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.name, i))
        .collect();

    NoteIndex {
        frequencies,
        entries,
        by_name,
    }
});

/// Finds the reference note matching `freq`, if any.
///
/// 1. Binary search for an entry within [`NOTE_MATCH_EPSILON`]; return it.
/// 2. Otherwise take the entries on either side of where the search ended,
///    keep those within [`NOTE_MAX_APPROX_DISTANCE`] and return the closer
///    one (the upper neighbour wins a tie).
///
/// # Arguments
/// * `freq` - Frequency in Hz
///
/// # Returns
/// * `Some(entry)` - Matched reference note
/// * `None` - No note close enough
pub fn find_note(freq: f64) -> Option<&'static NoteEntry> {
    let index = &*NOTE_INDEX;
    let freqs = &index.frequencies;
    let len = freqs.len() as isize;

    let mut start: isize = 0;
    let mut end: isize = len - 1;
    while start <= end {
        let middle = (start + end) / 2;
        let value = freqs[middle as usize];

        if (value - freq).abs() < NOTE_MATCH_EPSILON {
            return Some(index.entries[middle as usize]);
        } else if value < freq {
            start = middle + 1;
        } else {
            end = middle - 1;
        }
    }

    // The outermost entries are never used as approximate matches.
    let near = |i: isize| {
        (i > 0 && i < len - 1 && (freq - freqs[i as usize]).abs() < NOTE_MAX_APPROX_DISTANCE)
            .then_some(i as usize)
    };

    match (near(start), near(end)) {
        (Some(upper), Some(lower)) => {
            let closer = if (freq - freqs[upper]).abs() <= (freq - freqs[lower]).abs() {
                upper
            } else {
                lower
            };
            Some(index.entries[closer])
        }
        (Some(i), None) | (None, Some(i)) => Some(index.entries[i]),
        (None, None) => None,
    }
}

/// Maps a frequency to the closest note name, or [`UNKNOWN_NOTE`].
pub fn map_frequency_to_note(freq: f64) -> &'static str {
    find_note(freq).map_or(UNKNOWN_NOTE, |entry| entry.name)
}

/// Gets a note's reference frequency from its name (e.g. "A4", "C#3").
pub fn note_frequency(name: &str) -> Option<f64> {
    NOTE_INDEX
        .by_name
        .get(name)
        .map(|&i| NOTE_INDEX.frequencies[i])
}

/// Calculates the deviation from a target frequency in cents.
///
/// 100 cents = 1 semitone; positive values are sharp, negative values flat.
pub fn cents_deviation(freq: f64, target_freq: f64) -> f64 {
    1200.0 * (freq / target_freq).log2()
}
