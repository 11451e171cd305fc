//! Benchmarks for ledcms conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use ledcms_color::{Lab, Xyz};
use ledcms_core::Dcs;
use ledcms_illuminant::{BlackBodyArea, BlackBodyFixed};
use ledcms_profile::{ColorProfile, DeviceProfile, FromDcs, SumLimiter};
use ledcms_transfer::{Gamma, Srgb, TransferFunction};

const R: Xyz = Xyz::new(41.25, 21.27, 1.93);
const G: Xyz = Xyz::new(35.76, 71.52, 11.92);
const B: Xyz = Xyz::new(18.04, 7.22, 95.05);

fn rgbww() -> ColorProfile {
    ColorProfile::new(
        vec![R, G, B],
        vec![(R + G + B) * 0.6, R * 0.55 + G * 0.4 + B * 0.1],
        Arc::new(Srgb),
        Some(Arc::new(SumLimiter::new(2.0).unwrap())),
    )
    .unwrap()
}

fn colors(n: usize) -> Vec<Xyz> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            R * t + G * (1.0 - t) * 0.5 + B * (t * t)
        })
        .collect()
}

/// Benchmark transfer function encode/decode.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    let gamma = Gamma::new(2.2).unwrap();
    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_linearize", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| Srgb.linearize(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_delinearize", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| Srgb.delinearize(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("gamma_2.2", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma.linearize(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark profile conversions in both directions.
fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    let optimized = rgbww();
    let plain = optimized.without_white_optimization();
    let input = colors(10000);
    let encoded: Vec<Dcs> = input.iter().map(|&x| optimized.xyz_to_dcs(x)).collect();
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("xyz_to_dcs", |b| {
        b.iter(|| {
            input
                .iter()
                .map(|&x| optimized.xyz_to_dcs(black_box(x)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("xyz_to_dcs_no_whites", |b| {
        b.iter(|| {
            input
                .iter()
                .map(|&x| plain.xyz_to_dcs(black_box(x)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("dcs_to_xyz", |b| {
        b.iter(|| {
            encoded
                .iter()
                .map(|v| optimized.dcs_to_xyz(black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("dcs_to_lab", |b| {
        b.iter(|| {
            encoded
                .iter()
                .map(|v| Lab::from_dcs(&optimized, black_box(v)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark blackbody models.
fn bench_blackbody(c: &mut Criterion) {
    let mut group = c.benchmark_group("blackbody");

    group.bench_function("fixed", |b| {
        b.iter(|| BlackBodyFixed::new(black_box(3200.0), 800.0).xyz())
    });

    group.bench_function("area", |b| {
        b.iter(|| BlackBodyArea::new(black_box(3200.0), 1e-4).xyz())
    });

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_profile, bench_blackbody);
criterion_main!(benches);
