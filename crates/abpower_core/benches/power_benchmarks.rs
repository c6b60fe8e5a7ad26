//! Criterion benchmarks for abpower_core
//!
//! Run with: cargo bench -p abpower_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use abpower_core::sweep::{AllocationGrid, SweepConfig};
use abpower_core::{compute_mde, compute_power, compute_sample_size, sweep_by_allocation};

fn bench_formulas(c: &mut Criterion) {
    c.bench_function("compute_power", |b| {
        b.iter(|| {
            compute_power(
                black_box(2000),
                black_box(50.0),
                black_box(0.02),
                black_box(0.05),
            )
        })
    });

    c.bench_function("compute_mde", |b| {
        b.iter(|| {
            compute_mde(
                black_box(2000),
                black_box(50.0),
                black_box(0.8),
                black_box(0.05),
            )
        })
    });

    c.bench_function("compute_sample_size", |b| {
        b.iter(|| {
            compute_sample_size(
                black_box(0.02),
                black_box(0.8),
                black_box(50.0),
                black_box(0.05),
            )
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_by_allocation");

    // Default 19-point grid, then progressively finer caller-defined grids
    for step_pct in [5.0, 1.0, 0.1] {
        let config = SweepConfig {
            grid: AllocationGrid {
                start_pct: 1.0,
                end_pct: 99.0,
                step_pct,
            },
            ..SweepConfig::sample_size(0.02, 0.8)
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(step_pct),
            &config,
            |b, config| b.iter(|| sweep_by_allocation(black_box(config))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_formulas, bench_sweep);
criterion_main!(benches);
