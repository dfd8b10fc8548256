//! Performance benchmarks for cry analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bawl_dsp::{analyze_cry, AnalysisConfig};

/// Synthetic rhythmic cry: 400 Hz bursts at 120 BPM, half duty cycle
fn synthetic_cry(duration_seconds: f32, sample_rate: u32) -> Vec<f32> {
    let num_samples = (duration_seconds * sample_rate as f32) as usize;
    let period = (60.0 / 120.0 * sample_rate as f32) as usize;
    let burst_len = period / 2;

    (0..num_samples)
        .map(|i| {
            if i % period < burst_len {
                let t = i as f32 / sample_rate as f32;
                0.35 * (2.0 * std::f32::consts::PI * 400.0 * t).sin()
            } else {
                0.0
            }
        })
        .collect()
}

fn bench_analyze_cry(c: &mut Criterion) {
    let sample_rate = 22050;
    let samples = synthetic_cry(5.0, sample_rate);
    let config = AnalysisConfig::default();

    c.bench_function("analyze_cry_5s", |b| {
        b.iter(|| {
            let _ = analyze_cry(
                black_box(&samples),
                black_box(sample_rate),
                black_box(config.clone()),
            );
        });
    });
}

criterion_group!(benches, bench_analyze_cry);
criterion_main!(benches);
