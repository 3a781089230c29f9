//! Hot-path benchmarks for the coding engine.
//!
//! Measures the cost centers of encode and decode:
//! - GF(2^8) table multiply
//! - Slice XOR (the add_scaled fast path)
//! - Source::generate for assorted window shapes
//! - Sink full-decode cycles
//!
//! Run with: cargo bench --package braid-rlnc

use braid_rlnc::{gf256, Sink, Source};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// ─── Field Ops ──────────────────────────────────────────────────────────────

fn bench_gf_mul(c: &mut Criterion) {
    gf256::init();
    let mut group = c.benchmark_group("gf256_mul");
    group.bench_function("sweep_256", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for x in 0..=255u8 {
                acc ^= gf256::mul(black_box(x), black_box(0x57));
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_xor_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_slice");
    for size in [64usize, 1500, 65536] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size}B"), |b| {
            let src = vec![0xa5u8; size];
            let mut dst = vec![0x5au8; size];
            b.iter(|| {
                gf256::xor_slice(black_box(&mut dst), black_box(&src));
            });
        });
    }
    group.finish();
}

// ─── Encode ─────────────────────────────────────────────────────────────────

fn bench_generate(c: &mut Criterion) {
    gf256::init();
    let mut group = c.benchmark_group("source_generate");
    for (count, len) in [(8usize, 1200usize), (32, 1200), (8, 65536)] {
        group.throughput(Throughput::Bytes((count * len) as u64));
        group.bench_function(format!("{count}x{len}"), |b| {
            let mut source = Source::new(42);
            for i in 0..count {
                let payload = vec![i as u8; len];
                source.add(&payload);
            }
            b.iter(|| black_box(source.generate().unwrap()));
        });
    }
    group.finish();
}

// ─── Decode ─────────────────────────────────────────────────────────────────

fn bench_solve_full_decode(c: &mut Criterion) {
    gf256::init();
    let mut group = c.benchmark_group("sink_solve");
    for count in [8usize, 32] {
        group.throughput(Throughput::Bytes((count * 1200) as u64));
        group.bench_function(format!("full_decode_{count}"), |b| {
            let mut source = Source::new(7);
            for i in 0..count {
                let payload = vec![i as u8; 1200];
                source.add(&payload);
            }
            let combinations: Vec<_> = (0..count + 4)
                .map(|_| source.generate().unwrap())
                .collect();
            b.iter(|| {
                let mut sink = Sink::new();
                for combination in &combinations {
                    sink.solve(combination.clone());
                }
                black_box(sink.decoded_count())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_gf_mul,
    bench_xor_slice,
    bench_generate,
    bench_solve_full_decode
);
criterion_main!(benches);
