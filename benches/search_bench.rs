use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gomoku::board::{Board, Stone};
use gomoku::eval::{evaluate, ScoreTable};
use gomoku::search::Searcher;

/// Small midgame position around the center
fn midgame() -> Board {
    let mut board = Board::default();
    for &(r, c) in &[(7, 7), (8, 8), (6, 8), (7, 9)] {
        board.apply_move(r, c, Stone::Black);
    }
    for &(r, c) in &[(7, 8), (6, 7), (8, 6)] {
        board.apply_move(r, c, Stone::White);
    }
    board
}

/// Search time per depth on the midgame position
fn bench_search_depth(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("search_midgame");
    group.sample_size(10);

    for depth in 1..=4u8 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::new(Stone::White, ScoreTable::default());
            b.iter(|| black_box(searcher.search(black_box(&board), depth)));
        });
    }

    group.finish();
}

/// Pruned versus plain minimax at a fixed depth
fn bench_pruning(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("pruning_depth3");
    group.sample_size(10);

    for pruning in [true, false] {
        group.bench_with_input(BenchmarkId::new("pruning", pruning), &pruning, |b, &pruning| {
            let mut searcher =
                Searcher::new(Stone::White, ScoreTable::default()).with_pruning(pruning);
            b.iter(|| black_box(searcher.search(black_box(&board), 3)));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame();
    let table = ScoreTable::default();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| black_box(evaluate(black_box(&board), Stone::White, &table)));
    });
}

criterion_group!(benches, bench_search_depth, bench_pruning, bench_evaluate);
criterion_main!(benches);
