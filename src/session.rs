//! The game session: board ownership, strict turn alternation and the
//! selection state machine.
//!
//! The session reacts to two external events, a clicked square and a chosen
//! promotion kind, and reports what happened as a list of [`Effect`]s for
//! the front-end to render. It never reaches back into the input layer.

use crate::board::Board;
use crate::movegen::valid_moves;
use crate::types::{Color, Piece, PieceKind, Square, PROMOTION_CHOICES};

/// Where the session is within a single move.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    PieceSelected {
        from: Square,
        destinations: Vec<Square>,
    },
    AwaitingPromotion {
        square: Square,
        color: Color,
    },
}

/// What a single event did, for the front-end to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A piece of the side to move was selected.
    Selected { square: Square },
    /// The selection was dropped without touching the board.
    Deselected,
    /// A piece was relocated (and possibly captured something).
    MoveApplied { from: Square, to: Square },
    /// A pawn reached the far rank; the side does not switch until the
    /// promotion kind arrives.
    PromotionPending { square: Square, color: Color },
    /// The promoted piece replaced the pawn.
    PromotionResolved { square: Square, kind: PieceKind },
    /// The other side is now to move.
    TurnPassed { side_to_move: Color },
}

pub struct Session {
    board: Board,
    side_to_move: Color,
    phase: Phase,
}

impl Session {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Session {
        Session {
            board: Board::new(),
            side_to_move: Color::White,
            phase: Phase::Idle,
        }
    }

    /// A session over a constructed position, for tests and problems.
    pub fn with_board(board: Board, side_to_move: Color) -> Session {
        Session {
            board,
            side_to_move,
            phase: Phase::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The selected square and its legal destinations, if a piece is
    /// currently selected. For highlighting.
    pub fn selection(&self) -> Option<(Square, &[Square])> {
        match &self.phase {
            Phase::PieceSelected { from, destinations } => Some((*from, destinations.as_slice())),
            _ => None,
        }
    }

    /// The square and color of a promotion waiting for a choice.
    pub fn pending_promotion(&self) -> Option<(Square, Color)> {
        match self.phase {
            Phase::AwaitingPromotion { square, color } => Some((square, color)),
            _ => None,
        }
    }

    /// Feed one clicked square into the state machine.
    ///
    /// Clicks outside the board are dropped. While a promotion is pending,
    /// board clicks are ignored entirely; only `choose_promotion` advances
    /// the game.
    pub fn handle_click(&mut self, square: Square) -> Vec<Effect> {
        if !square.on_board() {
            return Vec::new();
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => self.try_select(square),
            Phase::PieceSelected { from, destinations } => {
                if destinations.contains(&square) {
                    self.apply_selected_move(from, square)
                } else {
                    // Any other click deselects, even one on a second piece
                    // of the same side.
                    vec![Effect::Deselected]
                }
            }
            awaiting @ Phase::AwaitingPromotion { .. } => {
                self.phase = awaiting;
                Vec::new()
            }
        }
    }

    /// Resolve a pending promotion with the chosen piece kind, then hand
    /// the turn to the other side. A no-op unless a promotion is pending.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Vec<Effect> {
        debug_assert!(
            PROMOTION_CHOICES.contains(&kind),
            "cannot promote to a {}",
            kind.to_human()
        );
        match self.phase {
            Phase::AwaitingPromotion { square, color } => {
                self.board.set_piece(square, Piece::new(color, kind));
                self.phase = Phase::Idle;
                vec![
                    Effect::PromotionResolved { square, kind },
                    self.pass_turn(),
                ]
            }
            _ => Vec::new(),
        }
    }

    fn try_select(&mut self, square: Square) -> Vec<Effect> {
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move => {
                let destinations = valid_moves(&self.board, square);
                self.phase = Phase::PieceSelected {
                    from: square,
                    destinations,
                };
                vec![Effect::Selected { square }]
            }
            // Empty square or opponent piece: stay idle.
            _ => Vec::new(),
        }
    }

    fn apply_selected_move(&mut self, from: Square, to: Square) -> Vec<Effect> {
        self.board.apply_move(from, to);
        let mut effects = vec![Effect::MoveApplied { from, to }];
        if let Some(square) = self.board.promotion_needed(self.side_to_move) {
            // The side switch waits for the promotion choice.
            self.phase = Phase::AwaitingPromotion {
                square,
                color: self.side_to_move,
            };
            effects.push(Effect::PromotionPending {
                square,
                color: self.side_to_move,
            });
        } else {
            effects.push(self.pass_turn());
        }
        effects
    }

    fn pass_turn(&mut self) -> Effect {
        self.side_to_move = self.side_to_move.other_color();
        Effect::TurnPassed {
            side_to_move: self.side_to_move,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
