//! Seedable random position generator.
//!
//! Produces single-king-per-side boards for property tests, benchmarks and the
//! `--random` CLI mode. Positions are not guaranteed to be legal chess
//! positions (either king may already be attacked), which is exactly the input
//! space the analysis has to cope with.

use rand::Rng;

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, PieceKind, Square};

const NON_KING_KINDS: [PieceKind; 5] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

/// Thirty non-king pieces plus two kings fills a full chess set.
pub const MAX_EXTRA_PIECES: usize = 30;

/// One king per side on distinct squares plus up to `extra_pieces` other
/// pieces (capped at `MAX_EXTRA_PIECES`) on empty squares. Pawns are kept off
/// the first and last rows.
pub fn random_board<R: Rng>(rng: &mut R, extra_pieces: usize) -> Board {
    let mut board = Board::new_empty();

    for color in [Color::White, Color::Black] {
        let square = random_empty_square(rng, &board, false);
        board.place(square, Piece::new(color, PieceKind::King));
    }

    for _ in 0..extra_pieces.min(MAX_EXTRA_PIECES) {
        let color = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        let kind = NON_KING_KINDS[rng.random_range(0..NON_KING_KINDS.len())];
        let square = random_empty_square(rng, &board, kind == PieceKind::Pawn);
        board.place(square, Piece::new(color, kind));
    }

    board
}

fn random_empty_square<R: Rng>(rng: &mut R, board: &Board, pawn: bool) -> Square {
    let rows = if pawn { 1u8..7 } else { 0u8..8 };
    loop {
        let row = rng.random_range(rows.clone());
        let col = rng.random_range(0u8..8);
        if let Some(square) = Square::new(row, col) {
            if board.is_empty(square) {
                return square;
            }
        }
    }
}
