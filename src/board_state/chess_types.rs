//! Core value types shared by every analysis pass.
//!
//! Colors, piece kinds and squares are small `Copy` values. Squares are
//! addressed by (row, col) in input-grid order: row 0 is the first row of the
//! grid (rank 8 in diagram terms) and col 0 is file a.

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Queen, rook and bishop travel along a ray until blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }
}

/// One of the twelve colored pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parse a single algebraic piece letter; upper case is white.
    pub fn from_code(code: char) -> Option<Self> {
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else if code.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match code.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };

        Some(Self { color, kind })
    }

    pub const fn code(self) -> char {
        let base = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };

        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

/// Board coordinate, `row` and `col` both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Packed index `row * 8 + col`; `index` must be below 64.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    /// Square displaced by `(d_row, d_col)`, or `None` if that leaves the grid.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Same row, column reflected (a-file <-> h-file).
    #[inline]
    pub const fn mirror_files(self) -> Self {
        Self {
            row: self.row,
            col: 7 - self.col,
        }
    }

    /// Same column, row reflected (rank 1 <-> rank 8).
    #[inline]
    pub const fn mirror_rows(self) -> Self {
        Self {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|index| Square {
            row: index / 8,
            col: index % 8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, Square};

    #[test]
    fn piece_codes_cover_all_twelve_pieces() {
        for code in "KQRBNPkqrbnp".chars() {
            let piece = Piece::from_code(code).expect("letter should map to a piece");
            assert_eq!(piece.code(), code);
        }
        assert_eq!(
            Piece::from_code('n'),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        assert_eq!(Piece::from_code('#'), None);
        assert_eq!(Piece::from_code('x'), None);
    }

    #[test]
    fn offset_stops_at_grid_edge() {
        let a8 = Square::new(0, 0).expect("corner should exist");
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 2), Square::new(1, 2));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[9], Square::new(1, 1).expect("b7 should exist"));
        assert!(squares.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
    }
}
