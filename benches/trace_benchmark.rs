//! Performance benchmarks for the circumference tracer.
//!
//! Tests trace time for different grid resolutions and circle radii.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digitizer::domain::{Circle, Grid};
use digitizer::geometry::trace_circumference;

/// Benchmark tracing rings of growing radius on a fixed 100x100 grid.
fn bench_trace_by_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_by_radius");
    let grid = Grid::new(100, 100, 10.0, 0.5);

    for radius in [45.0, 125.0, 305.0, 475.0].iter() {
        let circle = Circle::new(505.0, 505.0, *radius, true);
        let ring_len = trace_circumference(&grid, &circle).unwrap().len();
        group.throughput(Throughput::Elements(ring_len as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("radius_{radius}")),
            &circle,
            |b, circle| {
                b.iter(|| {
                    let trace = trace_circumference(black_box(&grid), black_box(circle));
                    black_box(trace)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full gesture tail: trace plus highlight application.
fn bench_trace_and_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_and_highlight");

    for size in [20u16, 50, 100].iter() {
        let spacing = 10.0;
        let extent = *size as f64 * spacing;
        let circle = Circle::new(
            extent / 2.0 + 5.0,
            extent / 2.0 + 5.0,
            extent / 3.0,
            true,
        );

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            size,
            |b, size| {
                b.iter_batched(
                    || Grid::new(*size, *size, spacing, 0.5),
                    |mut grid| {
                        let trace = trace_circumference(&grid, &circle).unwrap();
                        digitizer::highlight::apply(&mut grid, &trace.points).unwrap();
                        black_box(grid)
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trace_by_radius, bench_trace_and_highlight);
criterion_main!(benches);
