//! Three-line verdict text.
//!
//! ```text
//! 4k3/8/8/8/8/8/8/4K2r   placement
//! B                      side giving check: W, B, or - (none or both)
//! 0                      1 mate, 0 not mate, empty without a single check
//! ```

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::check::position_analysis::PositionReport;
use crate::utils::fen_generator::generate_fen_placement;

/// `W` or `B` for the side giving check, `-` when no single side is.
pub fn checking_side_code(report: &PositionReport) -> char {
    match report.checking_color() {
        Some(Color::White) => 'W',
        Some(Color::Black) => 'B',
        None => '-',
    }
}

pub fn mate_code(report: &PositionReport) -> &'static str {
    match report.is_checkmate() {
        Some(true) => "1",
        Some(false) => "0",
        None => "",
    }
}

pub fn render_verdict(board: &Board, report: &PositionReport) -> String {
    format!(
        "{}\n{}\n{}",
        generate_fen_placement(board),
        checking_side_code(report),
        mate_code(report)
    )
}
