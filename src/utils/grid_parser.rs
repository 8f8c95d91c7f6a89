//! Text grid input: eight lines of eight piece codes.
//!
//! This is the matrix produced by board recognition, one character per square
//! with `#` (or `.`) for an empty square. Blank lines and whitespace around
//! each line are ignored; whitespace between squares is not allowed.

use crate::board_state::board::Board;
use crate::check_errors::InvalidBoard;
use crate::utils::fen_parser::parse_fen_placement;

pub fn parse_grid(text: &str) -> Result<Board, InvalidBoard> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.is_empty() {
        return Err(InvalidBoard::Empty);
    }

    Board::from_codes(rows.as_slice())
}

/// How to interpret board text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardFormat {
    /// A single non-blank line containing `/` is FEN, anything else a grid.
    #[default]
    Auto,
    Grid,
    Fen,
}

pub fn parse_board_text(text: &str, format: BoardFormat) -> Result<Board, InvalidBoard> {
    match format {
        BoardFormat::Grid => parse_grid(text),
        BoardFormat::Fen => parse_fen_placement(text),
        BoardFormat::Auto => {
            let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
            match (lines.next(), lines.next()) {
                (Some(line), None) if line.contains('/') => parse_fen_placement(line),
                _ => parse_grid(text),
            }
        }
    }
}
