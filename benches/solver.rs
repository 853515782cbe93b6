//! Benchmarks for the sliding-tile solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle::{Board, Dedup, Heuristic, Solver, SolverOptions};

/// 14 moves from the goal.
fn medium_3x3() -> Board {
    Board::new(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap()
}

/// Benchmark solving with the default ancestor-only duplicate check.
fn bench_solve_ancestors(c: &mut Criterion) {
    let board = medium_3x3();

    c.bench_function("solve_3x3_ancestors", |b| {
        b.iter(|| Solver::new(black_box(&board)))
    });
}

/// Benchmark solving with a closed set, for both heuristics.
fn bench_solve_closed(c: &mut Criterion) {
    let board = medium_3x3();
    let mut group = c.benchmark_group("solve_3x3_closed");

    for (name, heuristic) in [
        ("manhattan", Heuristic::Manhattan),
        ("hamming", Heuristic::Hamming),
    ] {
        let options = SolverOptions {
            heuristic,
            dedup: Dedup::Closed,
        };
        group.bench_function(name, |b| {
            b.iter(|| Solver::with_options(black_box(&board), options))
        });
    }
    group.finish();
}

/// Benchmark detecting an unsolvable board through the twin search.
fn bench_unsolvable(c: &mut Criterion) {
    let board = Board::new(&[[1, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();

    c.bench_function("unsolvable_3x3", |b| {
        b.iter(|| Solver::new(black_box(&board)))
    });
}

/// Benchmark the heuristic and neighbor generation on a 4x4 board.
fn bench_board_ops(c: &mut Criterion) {
    let board = Board::new(&[
        [5, 1, 3, 4],
        [9, 2, 7, 8],
        [0, 6, 11, 12],
        [13, 10, 14, 15],
    ])
    .unwrap();

    c.bench_function("manhattan_4x4", |b| {
        b.iter(|| black_box(&board).manhattan())
    });
    c.bench_function("neighbors_4x4", |b| {
        b.iter(|| black_box(&board).neighbors().count())
    });
}

criterion_group!(
    benches,
    bench_solve_ancestors,
    bench_solve_closed,
    bench_unsolvable,
    bench_board_ops
);
criterion_main!(benches);
