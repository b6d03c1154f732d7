//! Candidate destination generation for each piece kind.
//!
//! `valid_moves` is a pure function of the board contents: no mutation, no
//! knowledge of whose turn it is. Checks, pins and king safety are out of
//! scope; the session applies whatever the player picks from this list.

use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Every square the piece at `from` may move to. Empty if `from` is off the
/// board or unoccupied.
pub fn valid_moves(board: &Board, from: Square) -> Vec<Square> {
    if !from.on_board() {
        return Vec::new();
    }
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(board, from, piece.color, &DIAGONAL_DIRECTIONS),
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ORTHOGONAL_DIRECTIONS),
        PieceKind::Queen => sliding_moves(board, from, piece.color, &ALL_DIRECTIONS),
        PieceKind::King => king_moves(board, from, piece.color),
    }
}

/// Shared legality filter: a destination is out immediately if it holds a
/// piece of the mover's own color. Off-board destinations never get here
/// because `Square::offset` already rejects them.
fn can_land(board: &Board, mover: Color, square: Square) -> bool {
    match board.piece_at(square) {
        Some(occupant) => occupant.color != mover,
        None => true,
    }
}

/// One independently filtered destination per offset (knight, king ring).
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&square| can_land(board, color, square))
        .collect()
}

/// Walk each ray until the board edge or the first occupied square, which
/// is included iff it holds an enemy piece.
fn sliding_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);
        while let Some(square) = current {
            if !can_land(board, color, square) {
                break;
            }
            moves.push(square);
            if board.piece_at(square).is_some() {
                break;
            }
            current = square.offset(d_row, d_col);
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let direction: i8 = if color == Color::White { -1 } else { 1 };
    let home_rank: u8 = if color == Color::White { 6 } else { 1 };

    // Double step from the home rank, both squares free. Eligibility is the
    // rank itself, not a has-moved flag.
    if from.row == home_rank {
        if let (Some(two_ahead), Some(one_ahead)) =
            (from.offset(2 * direction, 0), from.offset(direction, 0))
        {
            if board.piece_at(two_ahead).is_none() && board.piece_at(one_ahead).is_none() {
                moves.push(two_ahead);
            }
        }
    }

    if let Some(one_ahead) = from.offset(direction, 0) {
        if board.piece_at(one_ahead).is_none() {
            moves.push(one_ahead);
        }
        // Diagonal steps only capture, never advance onto empty squares.
        for d_col in [-1, 1] {
            if let Some(diagonal) = from.offset(direction, d_col) {
                if board
                    .piece_at(diagonal)
                    .is_some_and(|occupant| occupant.color != color)
                {
                    moves.push(diagonal);
                }
            }
        }
    }
    moves
}

fn king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();

    // Kingside castle offer: king on its home square, own rook on column 7,
    // the two squares between them empty. Eligibility is structural, so a
    // king or rook that left home and came back still qualifies; the move
    // only relocates the king, the rook stays put.
    let home = match color {
        Color::White => Square::new(7, 4),
        Color::Black => Square::new(0, 4),
    };
    if from == home {
        let rook_home = Square::new(from.row, 7);
        if board.piece_at(rook_home) == Some(Piece::new(color, PieceKind::Rook))
            && board.piece_at(Square::new(from.row, 5)).is_none()
            && board.piece_at(Square::new(from.row, 6)).is_none()
        {
            moves.push(Square::new(from.row, 6));
        }
    }

    moves.extend(step_moves(board, from, color, &ALL_DIRECTIONS));
    moves
}
