//! End-to-end checks of the analysis pipeline at the default buffer sizes.

use notescope_core::config::{DEFAULT_SAMPLE_RATE, DEFAULT_WINDOW_LEN, SHORT_WINDOW_LEN};
use notescope_core::notes::{UNKNOWN_NOTE, map_frequency_to_note};
use notescope_core::synth::{DEMO_FREQUENCIES, synthesize};
use notescope_core::{AnalysisConfig, analyze, dft, extract_peaks, reconstruct};

#[test]
fn single_tone_round_trip() {
    let config = AnalysisConfig::default();
    let signal = synthesize(&[440.0], DEFAULT_WINDOW_LEN, DEFAULT_SAMPLE_RATE);

    let spectrum = dft::spectrum(&signal, config.sample_rate, config.scaling);
    assert_eq!(spectrum.len(), DEFAULT_WINDOW_LEN / 2);

    let peaks = extract_peaks(&spectrum, config.min_amplitude);
    assert_eq!(peaks.len(), 1);
    assert!((peaks[0].x - 440.0).abs() <= config.bin_width());
    assert_eq!(map_frequency_to_note(peaks[0].x), "A4");
}

#[test]
fn short_window_round_trip() {
    let config = AnalysisConfig {
        window_len: SHORT_WINDOW_LEN,
        ..Default::default()
    };
    let signal = synthesize(&[1000.0], config.window_len, config.sample_rate);
    let analysis = analyze(&signal, &config).unwrap();

    assert_eq!(analysis.detected.len(), 1);
    assert!((analysis.detected[0].frequency - 1000.0).abs() <= config.bin_width());
}

#[test]
fn demo_chord_is_named() {
    let config = AnalysisConfig::default();
    let signal = synthesize(&DEMO_FREQUENCIES, config.window_len, config.sample_rate);
    let analysis = analyze(&signal, &config).unwrap();

    let names: Vec<&str> = analysis.detected.iter().map(|d| d.note.as_str()).collect();
    assert_eq!(names, vec!["A3", "C4", "E4", "A4", "C5", "E5"]);

    for (item, &target) in analysis.detected.iter().zip(DEMO_FREQUENCIES.iter()) {
        assert!((item.frequency - target).abs() <= config.bin_width());
        assert!(item.amplitude >= config.min_amplitude);
    }

    // The regenerated waveform is meant for listening, not re-analysis
    let rebuilt = reconstruct(&analysis.detected, &config).unwrap();
    assert_eq!(rebuilt, synthesize(&analysis.frequencies(), config.window_len, config.sample_rate));
}

#[test]
fn threshold_selects_a_subset() {
    let config = AnalysisConfig {
        window_len: 2048,
        ..Default::default()
    };
    let signal = synthesize(&[220.0, 440.0, 3000.0], config.window_len, config.sample_rate);
    let spectrum = dft::spectrum(&signal, config.sample_rate, config.scaling);

    let all = extract_peaks(&spectrum, 0.0);
    for threshold in [0.01, 0.05, 0.2, 0.5] {
        let subset = extract_peaks(&spectrum, threshold);
        assert!(subset.iter().all(|p| p.y >= threshold));
        assert!(subset.iter().all(|p| all.contains(p)));
    }
}

#[test]
fn silence_and_no_signal() {
    let config = AnalysisConfig::default();

    assert!(synthesize(&[], config.window_len, config.sample_rate).is_empty());

    let silent = vec![0.0; 1024];
    let analysis = analyze(&silent, &config).unwrap();
    assert_eq!(analysis.spectrum.len(), 512);
    assert!(analysis.detected.is_empty());
}

#[test]
fn concurrent_lookups_agree() {
    let inputs = [27.5, 220.72, 443.0, 4434.92, 10000.0];
    let expected: Vec<&str> = inputs.iter().map(|&f| map_frequency_to_note(f)).collect();
    assert_eq!(expected[4], UNKNOWN_NOTE);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| inputs.iter().map(|&f| map_frequency_to_note(f)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
