//! One-call analysis of a position: check status plus, when exactly one king
//! is attacked, the checkmate verdict for that side.

use log::debug;

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::check::check_detector::{detect_check, CheckOutcome, CheckStatus};
use crate::check::checkmate_verifier::{search_check_resolution, CandidateMove, MateSearch};
use crate::check_errors::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReport {
    pub status: CheckStatus,
    /// Present only when exactly one king is attacked.
    pub mate_search: Option<MateSearch>,
}

impl PositionReport {
    #[inline]
    pub fn outcome(&self) -> CheckOutcome {
        self.status.outcome()
    }

    /// Side whose king is attacked, when that is unambiguous.
    #[inline]
    pub fn attacked_color(&self) -> Option<Color> {
        self.status.single_attacked()
    }

    /// Side delivering the check, when that is unambiguous.
    #[inline]
    pub fn checking_color(&self) -> Option<Color> {
        self.attacked_color().map(Color::opposite)
    }

    pub fn is_checkmate(&self) -> Option<bool> {
        self.mate_search.map(MateSearch::is_mate)
    }

    pub fn resolving_move(&self) -> Option<CandidateMove> {
        match self.mate_search {
            Some(MateSearch::Resolved(mv)) => Some(mv),
            _ => None,
        }
    }
}

pub fn analyze_position(board: &Board) -> AnalysisResult<PositionReport> {
    let status = detect_check(board);
    let mate_search = status
        .single_attacked()
        .map(|color| search_check_resolution(board, status, color))
        .transpose()?;

    let report = PositionReport {
        status,
        mate_search,
    };
    debug!(
        "analyze_position: {:?}, checkmate: {:?}",
        report.outcome(),
        report.is_checkmate()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::analyze_position;
    use crate::board_state::board::Board;
    use crate::board_state::chess_types::{Color, Piece, Square};
    use crate::check::check_detector::{detect_check, CheckOutcome};
    use crate::check::checkmate_verifier::is_checkmate;
    use crate::moves::piece_catalog::MoveIntent;
    use crate::moves::reachable_squares::piece_reachable_squares;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::random_board::random_board;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn board_with(pieces: &[(&str, char)]) -> Board {
        let mut board = Board::new_empty();
        for (name, code) in pieces {
            board.place(sq(name), Piece::from_code(*code).expect("test piece code"));
        }
        board
    }

    #[test]
    fn scenario_lone_kings() {
        let board = board_with(&[("d1", 'K'), ("d8", 'k')]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::Neither);
        assert_eq!(report.is_checkmate(), None);
    }

    #[test]
    fn scenario_rook_check_with_escape() {
        let board = board_with(&[("e1", 'K'), ("e8", 'r')]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::WhiteAttacked);
        assert_eq!(report.checking_color(), Some(Color::Black));
        assert_eq!(report.is_checkmate(), Some(false));

        let escape = report.resolving_move().expect("king should escape");
        assert_eq!(escape.from, sq("e1"));
        for name in ["d1", "f1"] {
            let after = board.with_move(sq("e1"), sq(name));
            assert!(!detect_check(&after).white_king_attacked, "{name}");
        }
    }

    #[test]
    fn scenario_king_boxed_in_corner() {
        let board = board_with(&[("a1", 'K'), ("a2", 'r'), ("b1", 'r'), ("b2", 'r')]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::WhiteAttacked);
        assert_eq!(report.is_checkmate(), Some(true));
        assert_eq!(report.resolving_move(), None);
    }

    #[test]
    fn scenario_rook_interposes_on_e_file() {
        let board = board_with(&[
            ("e1", 'K'),
            ("e8", 'r'),
            ("d8", 'r'),
            ("f8", 'r'),
            ("a5", 'R'),
        ]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::WhiteAttacked);
        assert_eq!(report.is_checkmate(), Some(false));

        let block = report.resolving_move().expect("rook should block");
        assert_eq!(block.to_long_algebraic(), "a5e5");

        let without_rook = board_with(&[("e1", 'K'), ("e8", 'r'), ("d8", 'r'), ("f8", 'r')]);
        let status = detect_check(&without_rook);
        assert_eq!(is_checkmate(&without_rook, status, Color::White), Ok(true));
    }

    #[test]
    fn black_can_be_mated_too() {
        let board = board_with(&[("h8", 'k'), ("g7", 'Q'), ("f6", 'K')]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::BlackAttacked);
        assert_eq!(report.checking_color(), Some(Color::White));
        assert_eq!(report.is_checkmate(), Some(true));
    }

    #[test]
    fn double_attack_skips_the_verdict() {
        let board = board_with(&[("e1", 'K'), ("e8", 'k'), ("a1", 'r'), ("a8", 'R')]);
        let report = analyze_position(&board).expect("analysis should run");
        assert_eq!(report.outcome(), CheckOutcome::BothAttacked);
        assert_eq!(report.mate_search, None);
    }

    #[test]
    fn analysis_is_deterministic_and_non_mutating() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..300 {
            let board = random_board(&mut rng, 10);
            let before = board.clone();

            let first = analyze_position(&board).expect("analysis should run");
            let second = analyze_position(&board).expect("analysis should run");

            assert_eq!(first, second);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn color_swapping_reflection_swaps_check_status() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..300 {
            let board = random_board(&mut rng, 12);
            let mirrored = board.mirror_rows_swap_colors();

            let status = detect_check(&board);
            assert_eq!(detect_check(&mirrored), status.swapped());

            let report = analyze_position(&board).expect("analysis should run");
            let mirrored_report = analyze_position(&mirrored).expect("analysis should run");
            assert_eq!(report.is_checkmate(), mirrored_report.is_checkmate());
        }
    }

    #[test]
    fn file_reflection_keeps_check_status() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..300 {
            let board = random_board(&mut rng, 12);
            assert_eq!(detect_check(&board.mirror_files()), detect_check(&board));
        }
    }

    #[test]
    fn reachable_sets_respect_blocking_rules() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let board = random_board(&mut rng, 20);
            for (origin, piece) in board.occupied() {
                for intent in [MoveIntent::Threat, MoveIntent::Relocate] {
                    let reach = piece_reachable_squares(origin, piece, &board, intent);
                    for target in reach {
                        let occupant = board.piece_at(target);
                        assert!(occupant.map_or(true, |p| p.color != piece.color));
                    }
                    if piece.kind.is_sliding() {
                        assert_first_obstruction_rule(&board, origin, piece, reach);
                    }
                }
            }
        }
    }

    fn assert_first_obstruction_rule(
        board: &Board,
        origin: Square,
        piece: Piece,
        reach: crate::moves::square_set::SquareSet,
    ) {
        let dirs = crate::moves::piece_catalog::directions(piece.kind, piece.color, MoveIntent::Threat);
        for d in dirs {
            let mut blocked = false;
            for step in 1..=7i8 {
                let Some(target) = origin.offset(d.d_row * step, d.d_col * step) else {
                    break;
                };
                if blocked {
                    assert!(!reach.contains(target), "saw past a blocker");
                    continue;
                }
                match board.piece_at(target) {
                    Some(p) => {
                        assert_eq!(reach.contains(target), p.color != piece.color);
                        blocked = true;
                    }
                    None => assert!(reach.contains(target)),
                }
            }
        }
    }
}
