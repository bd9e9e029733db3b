//! Criterion benchmarks for espectro-analysis components
//!
//! Run with: cargo bench -p espectro-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use espectro_analysis::{compute_spectrum, inverse_spectrum, verify_linearity};
use espectro_core::{TimeAxis, WhiteNoise, rectangular_pulse, sinusoid};

const SAMPLE_RATE: f64 = 1000.0;

fn test_axis(len_seconds: f64) -> TimeAxis {
    TimeAxis::new(-len_seconds / 2.0, len_seconds / 2.0, SAMPLE_RATE).unwrap()
}

fn bench_compute_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_spectrum");

    for &n in &[512usize, 2048, 4096, 8192] {
        let mut noise = WhiteNoise::new(0x12345678);
        let signal = noise.fill(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &signal, |b, signal| {
            b.iter(|| compute_spectrum(black_box(signal), SAMPLE_RATE).unwrap());
        });
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let t = test_axis(4.096);
    let sine = sinusoid(&t, 5.0, 1.0);

    c.bench_function("spectrum_round_trip_4096", |b| {
        b.iter(|| {
            let s = compute_spectrum(black_box(&sine), SAMPLE_RATE).unwrap();
            inverse_spectrum(&s).unwrap()
        });
    });
}

fn bench_linearity_check(c: &mut Criterion) {
    let t = test_axis(2.0);
    let pulse = rectangular_pulse(&t, 0.2);
    let sine = sinusoid(&t, 5.0, 1.0);

    c.bench_function("verify_linearity_2000", |b| {
        b.iter(|| {
            verify_linearity(black_box(&pulse), black_box(&sine), SAMPLE_RATE, 1e-9).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_compute_spectrum,
    bench_round_trip,
    bench_linearity_check
);
criterion_main!(benches);
