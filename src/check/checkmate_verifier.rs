//! Exhaustive search for a reply that lifts a check.
//!
//! Every piece of the attacked side is offered each square it can relocate to
//! (`MoveIntent::Relocate`, so pawns push instead of capturing diagonally).
//! Each candidate is played on a private copy of the board and the check
//! detector is re-run. The first candidate that leaves the king unattacked
//! ends the search with `MateSearch::Resolved`; exhausting every candidate
//! yields `MateSearch::Mate`.
//!
//! Pieces are visited in row-major order, and so are the destinations of each
//! piece, which makes the reported resolving move deterministic.
//!
//! Known limitation: a candidate is judged only by whether the attacked king
//! is still in check afterwards. It is not examined for any other exposure
//! it might create, and captures are modelled by overwriting the destination.

use log::{debug, trace};

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, Square};
use crate::check::check_detector::{detect_check, CheckStatus};
use crate::check_errors::{AnalysisError, AnalysisResult};
use crate::moves::piece_catalog::MoveIntent;
use crate::moves::reachable_squares::piece_reachable_squares;
use crate::utils::algebraic::square_to_algebraic;

/// A relocation of one piece considered as a defence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl CandidateMove {
    /// Long-algebraic text, e.g. `e1d1`.
    pub fn to_long_algebraic(self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

/// Terminal state of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MateSearch {
    /// This move leaves the attacked king safe.
    Resolved(CandidateMove),
    /// No candidate lifts the check.
    Mate,
}

impl MateSearch {
    #[inline]
    pub const fn is_mate(self) -> bool {
        matches!(self, MateSearch::Mate)
    }
}

/// Every defensive relocation available to `color`, in search order.
pub fn candidate_moves(board: &Board, color: Color) -> Vec<CandidateMove> {
    let mut candidates = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        for to in piece_reachable_squares(from, piece, board, MoveIntent::Relocate) {
            candidates.push(CandidateMove { piece, from, to });
        }
    }
    candidates
}

/// Search for a move of `attacked` that clears its check.
///
/// `status` must report `attacked`'s king as attacked; otherwise the query is
/// meaningless and `AnalysisError::PreconditionViolated` is returned.
pub fn search_check_resolution(
    board: &Board,
    status: CheckStatus,
    attacked: Color,
) -> AnalysisResult<MateSearch> {
    if !status.is_attacked(attacked) {
        return Err(AnalysisError::PreconditionViolated { color: attacked });
    }

    for candidate in candidate_moves(board, attacked) {
        let after = board.with_move(candidate.from, candidate.to);
        let still_attacked = detect_check(&after).is_attacked(attacked);
        trace!(
            "{attacked:?} candidate {} still attacked: {still_attacked}",
            candidate.to_long_algebraic()
        );

        if !still_attacked {
            debug!(
                "{attacked:?} check resolved by {}",
                candidate.to_long_algebraic()
            );
            return Ok(MateSearch::Resolved(candidate));
        }
    }

    debug!("{attacked:?} has no move that resolves the check");
    Ok(MateSearch::Mate)
}

/// True when no relocation of an `attacked` piece clears the check.
pub fn is_checkmate(board: &Board, status: CheckStatus, attacked: Color) -> AnalysisResult<bool> {
    search_check_resolution(board, status, attacked).map(MateSearch::is_mate)
}
