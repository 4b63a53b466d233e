//! Benchmarks for the direct transform and the full pipeline
//!
//! Run with: cargo bench --bench transform_bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use notescope_core::config::DEFAULT_SAMPLE_RATE;
use notescope_core::synth::{DEMO_FREQUENCIES, synthesize};
use notescope_core::{AnalysisConfig, analyze, dft};

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_transform");
    group.sample_size(10);

    for n in [1024, 2048, 4096] {
        let signal = synthesize(&DEMO_FREQUENCIES, n, DEFAULT_SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| dft::transform(black_box(signal)))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let config = AnalysisConfig {
        window_len: 2048,
        ..Default::default()
    };
    let signal = synthesize(&DEMO_FREQUENCIES, config.window_len, config.sample_rate);

    c.bench_function("analyze_demo_chord_2048", |b| {
        b.iter(|| analyze(black_box(&signal), &config))
    });
}

criterion_group!(benches, bench_transform, bench_pipeline);
criterion_main!(benches);
