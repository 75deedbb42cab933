//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gambit::board::{find_best_move, Board, Color, SearchParams};

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves_for(Color::White)))
    });

    // An opened position with more mobility
    let mut open = Board::new();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        let mut mv = open
            .generate_piece_moves(from.parse().unwrap())
            .into_iter()
            .find(|m| m.to_square() == to.parse().unwrap())
            .expect("opening move");
        open.make_move(&mut mv);
    }
    group.bench_function("open_game", |b| {
        b.iter(|| black_box(open.generate_moves_for(Color::White)))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("eval_startpos", |b| {
        b.iter(|| black_box(board.evaluate(Color::Black)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let mut board = Board::new();
    for depth in 1..=3u32 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let params = SearchParams { depth };
            b.iter(|| black_box(find_best_move(&mut board, Color::Black, &params)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_eval, bench_search);
criterion_main!(benches);
