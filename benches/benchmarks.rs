use criterion::{black_box, criterion_group, criterion_main, Criterion};

use local_chess::board::Board;
use local_chess::movegen::valid_moves;
use local_chess::session::Session;
use local_chess::types::{Color, Piece, PieceKind, Square};

pub fn bench_moves_from_start(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("valid moves for every piece from start", |b| {
        b.iter(|| {
            for row in 0..8u8 {
                for col in 0..8u8 {
                    valid_moves(black_box(&board), Square::new(row, col));
                }
            }
        })
    });
}

pub fn bench_queen_on_open_board(c: &mut Criterion) {
    let mut board = Board::empty();
    board.set_piece(
        Square::new(4, 4),
        Piece::new(Color::White, PieceKind::Queen),
    );
    c.bench_function("queen moves on open board", |b| {
        b.iter(|| valid_moves(black_box(&board), Square::new(4, 4)))
    });
}

pub fn bench_scripted_opening(c: &mut Criterion) {
    c.bench_function("four scripted opening moves", |b| {
        b.iter(|| {
            let mut session = Session::new();
            for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
                session.handle_click(Square::from_algebraic(from).unwrap());
                session.handle_click(Square::from_algebraic(to).unwrap());
            }
            black_box(session.side_to_move())
        })
    });
}

criterion_group!(
    benches,
    bench_moves_from_start,
    bench_queen_on_open_board,
    bench_scripted_opening
);
criterion_main!(benches);
