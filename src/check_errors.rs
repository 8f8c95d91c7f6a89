//! Errors used throughout the check analysis crate.
//!
//! Two error types cover the whole surface:
//! - `InvalidBoard` is returned while building a `Board` from an external
//!   representation (character matrix, text grid, FEN placement, algebraic
//!   coordinates). Each variant carries enough location context to point at
//!   the offending row or character.
//! - `AnalysisError` is returned by analysis entry points. Besides wrapping
//!   `InvalidBoard`, it reports a checkmate query issued for a color whose king
//!   is not under attack.
//!
//! Every analysis is a pure function of its board, so none of these errors is
//! transient: the only recovery is to build a corrected board and query again.

use thiserror::Error;

use crate::board_state::chess_types::Color;

/// The supplied board representation could not be turned into a `Board`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBoard {
    /// The grid did not contain exactly eight rows.
    #[error("board must have 8 rows, found {found}")]
    RowCount { found: usize },

    /// A grid row did not contain exactly eight squares.
    #[error("row {row} must have 8 squares, found {found}")]
    RowWidth { row: usize, found: usize },

    /// A square held a character that is neither a piece letter nor an empty
    /// marker.
    #[error("invalid piece code '{code}' at row {row}, column {col}")]
    PieceCode { row: usize, col: usize, code: char },

    /// A FEN placement field did not contain exactly eight ranks.
    #[error("FEN placement must contain 8 ranks, found {found}")]
    FenRankCount { found: usize },

    /// A FEN rank did not add up to eight files.
    #[error("FEN rank {rank} covers {files} files instead of 8")]
    FenRankWidth { rank: usize, files: usize },

    /// The input was empty.
    #[error("board input is empty")]
    Empty,

    /// An algebraic coordinate such as `e4` failed to parse.
    #[error("invalid algebraic square '{0}'")]
    InvalidSquare(String),
}

/// Failure of an analysis query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoard),

    /// A checkmate query was issued for a color whose king the supplied status
    /// does not report as attacked.
    #[error("checkmate query for {color:?}, but that king is not in check")]
    PreconditionViolated { color: Color },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
