//! Per-color attack counts.
//!
//! An `AttackMap` counts, for every square, how many pieces of one color
//! threaten it. Only `is_attacked` matters for check detection; the counts are
//! kept for diagnostics (`render_attack_map`).

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Square};
use crate::moves::piece_catalog::MoveIntent;
use crate::moves::reachable_squares::piece_reachable_squares;
use crate::moves::square_set::SquareSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackMap {
    color: Color,
    counts: [u8; 64],
}

impl AttackMap {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            counts: [0; 64],
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn count(&self, square: Square) -> u8 {
        self.counts[square.index()]
    }

    #[inline]
    pub fn is_attacked(&self, square: Square) -> bool {
        self.count(square) > 0
    }

    /// True when any square of `squares` has a positive count.
    pub fn attacks_any(&self, squares: SquareSet) -> bool {
        squares.iter().any(|sq| self.is_attacked(sq))
    }

    /// Every square with a positive count.
    pub fn attacked_squares(&self) -> SquareSet {
        Square::all().filter(|sq| self.is_attacked(*sq)).collect()
    }

    /// Add one to every square of `squares`.
    pub fn accumulate(&mut self, squares: SquareSet) {
        for sq in squares {
            self.counts[sq.index()] = self.counts[sq.index()].saturating_add(1);
        }
    }
}

/// Attack map of every `color` piece on `board`.
pub fn attack_map(board: &Board, color: Color) -> AttackMap {
    let mut map = AttackMap::new(color);
    for (origin, piece) in board.pieces_of(color) {
        map.accumulate(piece_reachable_squares(origin, piece, board, MoveIntent::Threat));
    }
    map
}
