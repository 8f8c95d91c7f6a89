//! Square-addressed board model.
//!
//! `Board` is a plain value: 64 optional pieces in row-major order. Every
//! analysis pass reads it through a shared reference, and the checkmate
//! verifier derives hypothetical positions with `with_move`, which returns a
//! fresh copy and leaves the original untouched.

use crate::board_state::chess_types::*;
use crate::check_errors::InvalidBoard;
use crate::moves::square_set::SquareSet;

/// Characters accepted as an empty square in matrix and grid input.
pub const EMPTY_SQUARE_CODES: [char; 2] = ['#', '.'];

/// Sentinel written for empty squares when rendering piece codes.
pub const EMPTY_SQUARE_CODE: char = '#';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Build a board from an 8x8 matrix of piece codes.
    pub fn from_rows(rows: &[[char; 8]; 8]) -> Result<Self, InvalidBoard> {
        let mut board = Self::new_empty();
        for (row, codes) in rows.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                board.squares[row * 8 + col] = square_from_code(row, col, code)?;
            }
        }
        Ok(board)
    }

    /// Build a board from eight strings of eight piece codes each.
    pub fn from_codes<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidBoard> {
        if rows.len() != 8 {
            return Err(InvalidBoard::RowCount { found: rows.len() });
        }

        let mut board = Self::new_empty();
        for (row, text) in rows.iter().enumerate() {
            let codes: Vec<char> = text.as_ref().chars().collect();
            if codes.len() != 8 {
                return Err(InvalidBoard::RowWidth {
                    row,
                    found: codes.len(),
                });
            }
            for (col, code) in codes.into_iter().enumerate() {
                board.squares[row * 8 + col] = square_from_code(row, col, code)?;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Put `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    /// Clear `square`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Copy of this board with the piece on `from` moved to `to`.
    ///
    /// Whatever stood on `to` is overwritten, which is how captures are
    /// modelled. Moving from an empty square yields an unchanged copy.
    pub fn with_move(&self, from: Square, to: Square) -> Self {
        let mut next = self.clone();
        if let Some(piece) = next.remove(from) {
            next.place(to, piece);
        }
        next
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding a piece of `color`, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// Squares holding a king of `color`. Well-formed boards have exactly one.
    pub fn king_squares(&self, color: Color) -> SquareSet {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .filter(|(_, piece)| *piece == king)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Piece code per square, `EMPTY_SQUARE_CODE` for empty squares.
    pub fn to_rows(&self) -> [[char; 8]; 8] {
        let mut rows = [[EMPTY_SQUARE_CODE; 8]; 8];
        for (sq, piece) in self.occupied() {
            rows[sq.row() as usize][sq.col() as usize] = piece.code();
        }
        rows
    }

    /// Left-right reflection; colors are kept.
    pub fn mirror_files(&self) -> Self {
        let mut out = Self::new_empty();
        for (sq, piece) in self.occupied() {
            out.place(sq.mirror_files(), piece);
        }
        out
    }

    /// Top-bottom reflection with every piece changing sides.
    pub fn mirror_rows_swap_colors(&self) -> Self {
        let mut out = Self::new_empty();
        for (sq, piece) in self.occupied() {
            out.place(
                sq.mirror_rows(),
                Piece::new(piece.color.opposite(), piece.kind),
            );
        }
        out
    }
}

fn square_from_code(row: usize, col: usize, code: char) -> Result<Option<Piece>, InvalidBoard> {
    if EMPTY_SQUARE_CODES.contains(&code) {
        return Ok(None);
    }

    Piece::from_code(code)
        .map(Some)
        .ok_or(InvalidBoard::PieceCode { row, col, code })
}
