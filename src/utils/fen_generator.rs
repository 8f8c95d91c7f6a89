//! FEN placement writer.
//!
//! Emits ranks 8 to 1 (grid rows 0 to 7) with runs of empty squares collapsed
//! to a digit, the same form the text parsers accept.

use crate::board_state::board::Board;
use crate::board_state::chess_types::Square;

/// FEN piece placement field for `board`, e.g. `4k3/8/8/8/8/8/8/4K3`.
pub fn generate_fen_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            let piece = Square::new(row, col).and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.code());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::generate_fen_placement;
    use crate::board_state::board::Board;
    use crate::utils::fen_parser::parse_fen_placement;
    use crate::utils::random_board::random_board;

    #[test]
    fn empty_board_is_all_eights() {
        assert_eq!(generate_fen_placement(&Board::new_empty()), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn runs_collapse_between_pieces() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        let board = parse_fen_placement(fen).expect("placement should parse");
        assert_eq!(generate_fen_placement(&board), fen);
    }

    #[test]
    fn random_boards_survive_a_text_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let board = random_board(&mut rng, 16);
            let text = generate_fen_placement(&board);
            assert_eq!(parse_fen_placement(&text), Ok(board));
        }
    }
}
