use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku::board::{Board, Pos, Stone};
use gomoku::config::SearchConfig;
use gomoku::eval::evaluate;
use gomoku::search::{generate_moves, Searcher};

fn midgame() -> Board {
    let mut board = Board::new(15);
    let black = [(7, 7), (8, 8), (6, 8), (8, 6)];
    let white = [(7, 8), (9, 9), (6, 6), (7, 6)];
    for (r, c) in black {
        board.place_stone(Pos::new(r, c), Stone::Black);
    }
    for (r, c) in white {
        board.place_stone(Pos::new(r, c), Stone::White);
    }
    board
}

fn criterion_benchmark(c: &mut Criterion) {
    let board = midgame();

    c.bench_function("evaluate midgame", |b| {
        b.iter(|| evaluate(black_box(&board), Stone::Black, 5))
    });
    c.bench_function("generate moves midgame", |b| {
        b.iter(|| generate_moves(black_box(&board)))
    });

    let plain = Searcher::new(SearchConfig::plain(2), 5);
    c.bench_function("minimax depth 2", |b| {
        b.iter(|| plain.search(black_box(&board), Stone::Black))
    });

    let pruned = Searcher::new(SearchConfig::alpha_beta(3), 5);
    c.bench_function("alpha-beta depth 3", |b| {
        b.iter(|| pruned.search(black_box(&board), Stone::Black))
    });

    let parallel = Searcher::new(SearchConfig::alpha_beta(3).with_parallel(true), 5);
    c.bench_function("parallel alpha-beta depth 3", |b| {
        b.iter(|| parallel.search(black_box(&board), Stone::Black))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark
}
criterion_main!(benches);
