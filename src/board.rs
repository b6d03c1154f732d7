//! The 8x8 board: piece storage, move application and promotion lookup.
//!
//! The board does no legality checking of its own. `apply_move` trusts that
//! the caller already ran the destination through the move generator; the
//! session is the only caller that mutates a live game.

use itertools::iproduct;

use crate::types::{Color, Piece, PieceKind, Square};

pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// Back-rank piece kinds from column 0 to column 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard initial position. Black occupies rows 0 and 1, White
    /// rows 6 and 7.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set_piece(Square::new(0, col), Piece::new(Color::Black, *kind));
            board.set_piece(Square::new(1, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.set_piece(Square::new(6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square::new(7, col), Piece::new(Color::White, *kind));
        }
        board
    }

    pub fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        debug_assert!(square.on_board());
        self.squares[square.row as usize][square.col as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        debug_assert!(square.on_board());
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Relocate the piece at `src` to `dest`, capturing whatever was there.
    /// Legality is the caller's concern; calling this with an empty `src`
    /// is a logic error.
    pub fn apply_move(&mut self, src: Square, dest: Square) {
        debug_assert!(src.on_board() && dest.on_board());
        let piece = self.squares[src.row as usize][src.col as usize].take();
        debug_assert!(piece.is_some(), "apply_move called with empty source square");
        self.squares[dest.row as usize][dest.col as usize] = piece;
    }

    /// Find a pawn of `color` sitting on either back rank. Scans columns
    /// left to right, checking row 0 before row 7 within each column.
    pub fn promotion_needed(&self, color: Color) -> Option<Square> {
        for (col, row) in iproduct!(0..8u8, [0u8, 7u8]) {
            let square = Square::new(row, col);
            if self.piece_at(square) == Some(Piece::new(color, PieceKind::Pawn)) {
                return Some(square);
            }
        }
        None
    }

    /// All occupied squares with their pieces, for rendering.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        iproduct!(0..8u8, 0..8u8).filter_map(|(row, col)| {
            let square = Square::new(row, col);
            self.piece_at(square).map(|piece| (square, piece))
        })
    }

    pub fn draw_board(&self) -> String {
        let mut string = String::new();
        for row in 0..8u8 {
            for col in 0..8u8 {
                string = format!(
                    "{} {}",
                    string,
                    match self.piece_at(Square::new(row, col)) {
                        Some(piece) => piece.to_symbol(),
                        None => ".",
                    }
                );
            }
            string = format!("{}\n", string);
        }
        string
    }

    pub fn draw_to_terminal(&self) {
        println!("{}", self.draw_board());
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
