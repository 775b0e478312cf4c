use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tictactoe::eval::{evaluate, CombinationMap};
use tictactoe::{Board, Evaluator, Heuristic, Mark, Searcher};

/// Mid-game 4x4 position, X to move
fn midgame() -> Board {
    "X.O./.X../..O./...."
        .parse::<Board>()
        .expect("valid board")
        .with_win_length(3)
}

/// Full solve of the classic grid from the empty board
fn bench_classic_solve(c: &mut Criterion) {
    let board = Board::new(3, 3, 3);
    let mut searcher = Searcher::new();

    c.bench_function("solve_3x3", |b| {
        b.iter(|| black_box(searcher.search(black_box(&board), Mark::X, 9)))
    });
}

/// Search time against depth on a 4x4 board
fn bench_depth_scaling(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("search_4x4");

    for heuristic in [Heuristic::LineSquares, Heuristic::Combinations] {
        let mut searcher = Searcher::with_evaluator(Evaluator::for_board(heuristic, &board));
        for depth in 1..=4 {
            group.bench_with_input(
                BenchmarkId::new(format!("{heuristic:?}"), depth),
                &depth,
                |b, &depth| b.iter(|| black_box(searcher.search(black_box(&board), Mark::X, depth))),
            );
        }
    }

    group.finish();
}

/// Pruned against plain minimax at the same depth
fn bench_pruning(c: &mut Criterion) {
    let board = midgame();
    let mut pruned = Searcher::new();
    let mut plain = Searcher::new().without_pruning();

    let mut group = c.benchmark_group("pruning_4x4_depth3");
    group.bench_function("alpha_beta", |b| {
        b.iter(|| black_box(pruned.search(black_box(&board), Mark::X, 3)))
    });
    group.bench_function("minimax", |b| {
        b.iter(|| black_box(plain.search(black_box(&board), Mark::X, 3)))
    });
    group.finish();
}

/// Static evaluation cost on a larger board
fn bench_evaluators(c: &mut Criterion) {
    let board = "XO.X..X/.OXO.../..X.O../...XO../.O...X./......./X.....O"
        .parse::<Board>()
        .expect("valid board")
        .with_win_length(4);
    let map = CombinationMap::for_board(&board);

    let mut group = c.benchmark_group("evaluate_7x7");
    group.bench_function("line_squares", |b| b.iter(|| black_box(evaluate(black_box(&board)))));
    group.bench_function("combinations", |b| b.iter(|| black_box(map.evaluate(black_box(&board)))));
    group.finish();
}

criterion_group!(
    benches,
    bench_classic_solve,
    bench_depth_scaling,
    bench_pruning,
    bench_evaluators
);
criterion_main!(benches);
