//! Static movement tables per piece.
//!
//! Each piece kind owns a fixed list of displacement vectors and a step range.
//! Sliding kinds repeat their vector up to seven times, everything else moves
//! once. Pawns are the only kind whose vectors depend on color and on the
//! `MoveIntent`: they threaten the two forward diagonals but relocate one
//! square straight ahead. White advances toward row 0, black toward row 7.

use std::ops::RangeInclusive;

use crate::board_state::chess_types::{Color, PieceKind};

/// Displacement applied once per step, in (row, col) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// Why a piece's reachable squares are being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveIntent {
    /// Squares the piece attacks; feeds the attack maps.
    Threat,
    /// Squares the piece may step onto to block or escape a check.
    Relocate,
}

/// The eight unit vectors, clockwise from up-left.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(0, -1),
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, 1),
    Direction::new(1, -1),
];

pub const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
    Direction::new(1, 2),
    Direction::new(2, 1),
    Direction::new(2, -1),
    Direction::new(1, -2),
    Direction::new(-1, -2),
];

pub const WHITE_PAWN_CAPTURES: [Direction; 2] = [Direction::new(-1, -1), Direction::new(-1, 1)];
pub const BLACK_PAWN_CAPTURES: [Direction; 2] = [Direction::new(1, -1), Direction::new(1, 1)];
pub const WHITE_PAWN_PUSH: [Direction; 1] = [Direction::new(-1, 0)];
pub const BLACK_PAWN_PUSH: [Direction; 1] = [Direction::new(1, 0)];

/// Vectors walked by a `kind` piece of `color` for the given `intent`.
pub fn directions(kind: PieceKind, color: Color, intent: MoveIntent) -> &'static [Direction] {
    match (kind, color, intent) {
        (PieceKind::King | PieceKind::Queen, _, _) => &ALL_DIRECTIONS,
        (PieceKind::Rook, _, _) => &ORTHOGONAL_DIRECTIONS,
        (PieceKind::Bishop, _, _) => &DIAGONAL_DIRECTIONS,
        (PieceKind::Knight, _, _) => &KNIGHT_JUMPS,
        (PieceKind::Pawn, Color::White, MoveIntent::Threat) => &WHITE_PAWN_CAPTURES,
        (PieceKind::Pawn, Color::Black, MoveIntent::Threat) => &BLACK_PAWN_CAPTURES,
        (PieceKind::Pawn, Color::White, MoveIntent::Relocate) => &WHITE_PAWN_PUSH,
        (PieceKind::Pawn, Color::Black, MoveIntent::Relocate) => &BLACK_PAWN_PUSH,
    }
}

/// Inclusive number of times a direction vector may be applied.
pub fn step_range(kind: PieceKind) -> RangeInclusive<u8> {
    if kind.is_sliding() {
        1..=7
    } else {
        1..=1
    }
}
