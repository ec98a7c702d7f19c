//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation process (diagonal seeding, backtracking
//! completion, and clue removal) for both difficulty tiers.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while covering multiple
//! search shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use ninefold_generator::{Difficulty, PuzzleGenerator};

const SEEDS: [u64; 3] = [42, 0x5eed_cafe, 0x0123_4567_89ab_cdef];

fn bench_generate_easy(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generate_easy", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(Difficulty::Easy, hint::black_box(seed))
                        .unwrap()
                });
            },
        );
    }
}

fn bench_generate_hard(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("generate_hard", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    generator
                        .generate_with_seed(Difficulty::Hard, hint::black_box(seed))
                        .unwrap()
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_generate_easy,
        bench_generate_hard
);
criterion_main!(benches);
