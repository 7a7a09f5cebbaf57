//! Performance benchmarks for band averaging

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use octave_bands::bands::frames::average_frames;
use octave_bands::{AveragerConfig, BandAverager};

fn synthetic_spectrum(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| 1.0 / (1.0 + i as f32 * 0.01) + ((i * 7919) % 13) as f32 * 0.001)
        .collect()
}

fn bench_single_frame(c: &mut Criterion) {
    let spectrum = synthetic_spectrum(2048);
    let mut averager = BandAverager::new(36, 48000.0).expect("valid averager");

    c.bench_function("compute_averages_2048_bins_36_bands", |b| {
        b.iter(|| {
            let _ = averager.compute_averages(black_box(&spectrum));
        });
    });
}

fn bench_spectrogram(c: &mut Criterion) {
    // ~30 seconds of 2048-sample hops at 44.1 kHz
    let frames: Vec<Vec<f32>> = (0..646).map(|_| synthetic_spectrum(2048)).collect();

    c.bench_function("average_frames_646x2048", |b| {
        b.iter(|| {
            let _ = average_frames(
                black_box(&frames),
                black_box(18),
                black_box(44100.0),
                AveragerConfig::default(),
            );
        });
    });
}

criterion_group!(benches, bench_single_frame, bench_spectrogram);
criterion_main!(benches);
