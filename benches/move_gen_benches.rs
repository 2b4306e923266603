use criterion::{black_box, Criterion};
use std::time::Duration;

use bitsearch::board::movegen::MoveGen;
use bitsearch::board::random::RandBoard;
use bitsearch::core::attacks;
use bitsearch::{Board, PieceType};

use super::board_benches::SEED;

lazy_static! {
    pub static ref MOVEGEN_BOARDS: Vec<Board> = RandBoard::default()
        .pseudo_random(SEED ^ 0x9E37_79B9)
        .min_moves(8)
        .many(100);
}

fn bench_movegen_current(c: &mut Criterion) {
    lazy_static::initialize(&MOVEGEN_BOARDS);
    c.bench_function("MoveGen Side To Move", |b| {
        b.iter(|| {
            for board in MOVEGEN_BOARDS.iter() {
                black_box(board.generate_moves());
            }
        })
    });
}

fn bench_movegen_opponent(c: &mut Criterion) {
    lazy_static::initialize(&MOVEGEN_BOARDS);
    c.bench_function("MoveGen Opponent", |b| {
        b.iter(|| {
            for board in MOVEGEN_BOARDS.iter() {
                black_box(MoveGen::generate(board, !board.turn()));
            }
        })
    });
}

fn bench_slider_attacks(c: &mut Criterion) {
    lazy_static::initialize(&MOVEGEN_BOARDS);
    c.bench_function("Queen Attacks", |b| {
        b.iter(|| {
            for board in MOVEGEN_BOARDS.iter() {
                let us = board.turn();
                black_box(attacks::queen_attacks(
                    board.piece_bb(us, PieceType::Q) | board.piece_bb(us, PieceType::B),
                    board.occupied(),
                    board.get_occupied_player(us),
                ));
            }
        })
    });
}

criterion_group!(name = movegen_benches;
    config = Criterion::default().sample_size(50).warm_up_time(Duration::from_millis(100));
    targets = bench_movegen_current, bench_movegen_opponent, bench_slider_attacks
);
