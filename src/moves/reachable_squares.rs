//! Ray-walking move generator.
//!
//! Every piece kind is handled by the same walk: for each direction, step
//! outward until the edge of the board, a friendly piece (not marked), or an
//! opposing piece (marked, then stop). Non-sliding kinds simply have a step
//! range of one.

use std::ops::RangeInclusive;

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, Square};
use crate::moves::piece_catalog::{directions, step_range, Direction, MoveIntent};
use crate::moves::square_set::SquareSet;

/// Squares reachable from `origin` along `directions`, stepping through
/// `steps` in increasing order. Pieces of `friendly` block without being
/// marked; any other piece is marked and ends the ray.
pub fn reachable_squares(
    origin: Square,
    board: &Board,
    friendly: Color,
    directions: &[Direction],
    steps: RangeInclusive<u8>,
) -> SquareSet {
    let mut reachable = SquareSet::EMPTY;

    for direction in directions {
        for step in steps.clone() {
            let scale = step as i8;
            let Some(target) = origin.offset(direction.d_row * scale, direction.d_col * scale) else {
                break;
            };

            match board.piece_at(target) {
                Some(occupant) if occupant.color == friendly => break,
                Some(_) => {
                    reachable.insert(target);
                    break;
                }
                None => reachable.insert(target),
            }
        }
    }

    reachable
}

/// Catalog-driven wrapper: squares `piece` on `origin` reaches for `intent`.
#[inline]
pub fn piece_reachable_squares(
    origin: Square,
    piece: Piece,
    board: &Board,
    intent: MoveIntent,
) -> SquareSet {
    reachable_squares(
        origin,
        board,
        piece.color,
        directions(piece.kind, piece.color, intent),
        step_range(piece.kind),
    )
}
