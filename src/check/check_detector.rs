//! King-safety detection for both sides at once.
//!
//! Both attack maps are built fresh on every call and each king is tested
//! against the opposing map. The two flags are independent: a position with
//! both kings attacked is reported as such rather than rejected, since no
//! legality validation is performed on the input board.
//!
//! King lookup follows the board as given. A side with no king is never
//! reported as attacked; a side with several kings is reported as attacked
//! when any of them is. Callers that need meaningful answers must supply one
//! king per side.

use log::trace;

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::check::attack_map::{attack_map, AttackMap};

/// Which kings are currently attacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CheckStatus {
    pub white_king_attacked: bool,
    pub black_king_attacked: bool,
}

/// The four outcomes a `CheckStatus` can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckOutcome {
    Neither,
    WhiteAttacked,
    BlackAttacked,
    /// Not reachable in legal play, but representable.
    BothAttacked,
}

impl CheckStatus {
    #[inline]
    pub const fn is_attacked(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_attacked,
            Color::Black => self.black_king_attacked,
        }
    }

    pub const fn outcome(self) -> CheckOutcome {
        match (self.white_king_attacked, self.black_king_attacked) {
            (false, false) => CheckOutcome::Neither,
            (true, false) => CheckOutcome::WhiteAttacked,
            (false, true) => CheckOutcome::BlackAttacked,
            (true, true) => CheckOutcome::BothAttacked,
        }
    }

    /// The attacked color when exactly one king is attacked.
    pub const fn single_attacked(self) -> Option<Color> {
        match self.outcome() {
            CheckOutcome::WhiteAttacked => Some(Color::White),
            CheckOutcome::BlackAttacked => Some(Color::Black),
            CheckOutcome::Neither | CheckOutcome::BothAttacked => None,
        }
    }

    /// Status with colors exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            white_king_attacked: self.black_king_attacked,
            black_king_attacked: self.white_king_attacked,
        }
    }
}

/// Both attack maps of a board, white first.
pub fn attack_maps(board: &Board) -> [AttackMap; 2] {
    [attack_map(board, Color::White), attack_map(board, Color::Black)]
}

/// Whether the `color` king stands on a square of `opposing`.
#[inline]
pub fn is_king_attacked(board: &Board, color: Color, opposing: &AttackMap) -> bool {
    opposing.attacks_any(board.king_squares(color))
}

pub fn detect_check(board: &Board) -> CheckStatus {
    let [white_map, black_map] = attack_maps(board);
    let status = CheckStatus {
        white_king_attacked: is_king_attacked(board, Color::White, &black_map),
        black_king_attacked: is_king_attacked(board, Color::Black, &white_map),
    };
    trace!("detect_check: {:?}", status.outcome());
    status
}
