//! Performance measurement for topology queries at varying knot sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use knotweave::lattice::Grid;
use knotweave::topology::{loop_count, region_count, trace_paths};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn randomized_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    let mut rng = StdRng::seed_from_u64(12345);
    grid.borders();
    grid.random_lines(60, &mut rng);
    grid
}

/// Measures strand tracing cost as knot size grows
fn bench_trace_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_paths");

    for size in &[5, 10, 20, 40] {
        let grid = randomized_grid(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let paths = trace_paths(black_box(&grid));
                black_box(paths.loop_count());
            });
        });
    }

    group.finish();
}

/// Measures a full analysis pass on a mid-sized randomized knot
fn bench_full_analysis(c: &mut Criterion) {
    c.bench_function("full_analysis_20x20", |b| {
        let grid = randomized_grid(20);
        b.iter(|| {
            black_box(region_count(black_box(&grid)));
            black_box(loop_count(black_box(&grid)));
        });
    });
}

criterion_group!(benches, bench_trace_paths, bench_full_analysis);
criterion_main!(benches);
