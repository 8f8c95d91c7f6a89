//! FEN placement-field parser.
//!
//! Only the piece placement matters for check analysis, so a full FEN string
//! is accepted but everything after the first field is ignored. Ranks are
//! listed from rank 8 down to rank 1, which is also grid row order.

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Piece, Square};
use crate::check_errors::InvalidBoard;

pub fn parse_fen_placement(fen: &str) -> Result<Board, InvalidBoard> {
    let board_part = fen.split_whitespace().next().ok_or(InvalidBoard::Empty)?;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(InvalidBoard::FenRankCount { found: ranks.len() });
    }

    let mut board = Board::new_empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut files = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(InvalidBoard::PieceCode {
                        row,
                        col: files,
                        code: ch,
                    });
                }
                files += empty_count as usize;
                continue;
            }

            let piece = Piece::from_code(ch).ok_or(InvalidBoard::PieceCode {
                row,
                col: files,
                code: ch,
            })?;

            // Overlong ranks fall through to the width check below.
            if let Some(square) = Square::new(row as u8, files as u8) {
                board.place(square, piece);
            }
            files += 1;
        }

        if files != 8 {
            return Err(InvalidBoard::FenRankWidth { rank: 8 - row, files });
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::parse_fen_placement;
    use crate::board_state::chess_types::{Color, Piece, PieceKind};
    use crate::check_errors::InvalidBoard;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn parses_starting_placement() {
        let board = parse_fen_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("starting FEN should parse");

        assert_eq!(board.occupied().count(), 32);
        let e1 = algebraic_to_square("e1").expect("e1");
        assert_eq!(
            board.piece_at(e1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        let d8 = algebraic_to_square("d8").expect("d8");
        assert_eq!(
            board.piece_at(d8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn rejects_malformed_placements() {
        assert_eq!(parse_fen_placement("   "), Err(InvalidBoard::Empty));
        assert_eq!(
            parse_fen_placement("8/8/8/8/8/8/8"),
            Err(InvalidBoard::FenRankCount { found: 7 })
        );
        assert_eq!(
            parse_fen_placement("8/8/8/8/8/8/8/7"),
            Err(InvalidBoard::FenRankWidth { rank: 1, files: 7 })
        );
        assert_eq!(
            parse_fen_placement("8/8/8/8/8/8/8/K8"),
            Err(InvalidBoard::FenRankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            parse_fen_placement("8/8/8/3x4/8/8/8/8"),
            Err(InvalidBoard::PieceCode {
                row: 3,
                col: 3,
                code: 'x'
            })
        );
        assert!(matches!(
            parse_fen_placement("8/8/8/9/8/8/8/8"),
            Err(InvalidBoard::PieceCode { code: '9', .. })
        ));
    }
}
