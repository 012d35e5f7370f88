//! Benchmarks for solved checking and exhaustive search.
//!
//! # Benchmarks
//!
//! - **`is_solved`**: Checks a solved three-disc puzzle. Measures target
//!   resolution across the whole chain.
//! - **`brute_force`**: Walks every rotation combination of a scrambled
//!   three-disc puzzle until the solution is found.
//!
//! # Test Data
//!
//! Uses three fixed seeds so each run measures the same solutions.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench puzzle
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use stonelock_core::{Disc, StoneType};
use stonelock_puzzle::{PuzzleFactory, StonePuzzle};

const SEEDS: [u64; 3] = [0x5eed, 42, 0xc0ffee];

fn brute_force(puzzle: &mut StonePuzzle) -> bool {
    let lens = puzzle.discs().iter().map(Disc::len).collect::<Vec<_>>();
    for n in 0..lens.iter().product::<usize>() {
        let mut rest = n;
        for (stone, len) in StoneType::ALL.into_iter().zip(&lens) {
            let disc = puzzle.disc_mut(stone).unwrap();
            disc.reset();
            disc.rotate(isize::try_from(rest % len).unwrap());
            rest /= len;
        }
        if puzzle.is_solved() {
            return true;
        }
    }
    false
}

fn bench_is_solved(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(seed);
        let mut puzzle = factory.create_full_puzzle();
        puzzle.apply_solution();
        c.bench_with_input(
            BenchmarkId::new("is_solved", format!("seed_{i}")),
            &puzzle,
            |b, puzzle| b.iter(|| hint::black_box(puzzle).is_solved()),
        );
    }
}

fn bench_brute_force(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(seed);
        let puzzle = factory.create_full_puzzle();
        c.bench_with_input(
            BenchmarkId::new("brute_force", format!("seed_{i}")),
            &puzzle,
            |b, puzzle| {
                b.iter_batched(
                    || hint::black_box(puzzle.clone()),
                    |mut puzzle| assert!(brute_force(&mut puzzle)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .plotting_backend(PlottingBackend::Plotters)
        .measurement_time(Duration::from_secs(5));
    targets = bench_is_solved, bench_brute_force
);
criterion_main!(benches);
