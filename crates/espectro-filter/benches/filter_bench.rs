//! Criterion benchmarks for espectro-filter components
//!
//! Run with: cargo bench -p espectro-filter

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use espectro_core::WhiteNoise;
use espectro_filter::{Band, FilterSpec, design, filtfilt, lfilter};

const SAMPLE_RATE: f64 = 1000.0;

fn lowpass_spec(order: usize) -> FilterSpec {
    FilterSpec::Butterworth {
        order,
        band: Band::Low(10.0),
        sample_rate: SAMPLE_RATE,
    }
}

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("butterworth_design");
    for &order in &[2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| design(black_box(&lowpass_spec(order))).unwrap());
        });
    }
    group.finish();

    c.bench_function("fir_design_101", |b| {
        let spec = FilterSpec::Fir {
            num_taps: 101,
            cutoff_hz: 10.0,
            sample_rate: SAMPLE_RATE,
        };
        b.iter(|| design(black_box(&spec)).unwrap());
    });
}

fn bench_apply(c: &mut Criterion) {
    let coeffs = design(&lowpass_spec(4)).unwrap();
    let mut noise = WhiteNoise::new(0x12345678);
    let signal = noise.fill(2048);

    c.bench_function("lfilter_order4_2048", |b| {
        b.iter(|| lfilter(black_box(&coeffs), black_box(&signal)).unwrap());
    });

    c.bench_function("filtfilt_order4_2048", |b| {
        b.iter(|| filtfilt(black_box(&coeffs), black_box(&signal)).unwrap());
    });
}

criterion_group!(benches, bench_design, bench_apply);
criterion_main!(benches);
