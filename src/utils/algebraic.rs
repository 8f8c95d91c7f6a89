//! Square conversions for algebraic coordinates.
//!
//! The board grid is read the way a diagram is printed: row 0 is rank 8 and
//! column 0 is file a, so `a8` is (0, 0) and `h1` is (7, 7).

use crate::board_state::chess_types::Square;
use crate::check_errors::InvalidBoard;

/// Convert an algebraic coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, InvalidBoard> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(InvalidBoard::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(InvalidBoard::InvalidSquare(square.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a').ok_or_else(|| InvalidBoard::InvalidSquare(square.to_owned()))
}

/// Convert a square to its algebraic coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
