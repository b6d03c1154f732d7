//! Value types shared by the board, the move generator and the session:
//! squares, colors, piece kinds and pieces.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other_color(&self) -> Color {
        if *self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Can the piece move multiple squares in a given direction?
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    pub fn to_human(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// The four kinds a pawn may promote to, in the order the menu offers them.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A board coordinate. Row 0 is Black's back rank (the top of the screen),
/// row 7 is White's; columns run left to right from White's point of view.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    pub fn on_board(&self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// The square `d_row`/`d_col` away, or None if that falls off the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse a square like "e2". The rank digit counts up from White's side,
    /// so "a8" is row 0, col 0.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return None;
        }
        let col = file_char as u8 - b'a';
        let row = 8 - (rank_char as u8 - b'0');
        Some(Square { row, col })
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (self.col + b'a') as char, 8 - self.row)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Unicode figurine. The glyphs are literals, so the borrow is not tied
    /// to the piece; callers often render pieces returned by value.
    pub fn to_symbol(&self) -> &'static str {
        let is_white = self.color == Color::White;
        match self.kind {
            PieceKind::Pawn => {
                if is_white {
                    "♙"
                } else {
                    "♟︎"
                }
            }
            PieceKind::Knight => {
                if is_white {
                    "♘"
                } else {
                    "♞"
                }
            }
            PieceKind::Bishop => {
                if is_white {
                    "♗"
                } else {
                    "♝"
                }
            }
            PieceKind::Rook => {
                if is_white {
                    "♖"
                } else {
                    "♜"
                }
            }
            PieceKind::Queen => {
                if is_white {
                    "♕"
                } else {
                    "♛"
                }
            }
            PieceKind::King => {
                if is_white {
                    "♔"
                } else {
                    "♚"
                }
            }
        }
    }

    /// Single ASCII letter, uppercase for White, lowercase for Black.
    pub fn to_letter(&self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}
