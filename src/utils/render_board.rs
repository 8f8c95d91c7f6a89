//! Terminal-oriented board and attack-map renderers.
//!
//! Diagrams are printed top row first, which for grid input is rank 8, with
//! file letters above and below and rank numbers on both sides.

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::check::attack_map::AttackMap;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    render_grid(|sq| match board.piece_at(sq) {
        Some(piece) => piece_to_unicode(piece),
        None => '·',
    })
}

/// Render attack counts; counts above 9 are shown as `+`.
pub fn render_attack_map(map: &AttackMap) -> String {
    let mut out = format!("{:?} attacks\n", map.color());
    out.push_str(&render_grid(|sq| match map.count(sq) {
        0 => '·',
        n @ 1..=9 => char::from(b'0' + n),
        _ => '+',
    }));
    out
}

fn render_grid(cell: impl Fn(Square) -> char) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            if let Some(sq) = Square::new(row, col) {
                out.push(cell(sq));
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_attack_map, render_board};
    use crate::board_state::chess_types::Color;
    use crate::check::attack_map::attack_map;
    use crate::utils::fen_parser::parse_fen_placement;

    #[test]
    fn board_diagram_has_rank_eight_on_top() {
        let board = parse_fen_placement("4k3/8/8/8/8/8/8/4K3").expect("placement should parse");
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        println!("\n{text}");
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 · · · · ♚ · · · 8");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
    }

    #[test]
    fn attack_map_shows_counts() {
        let board = parse_fen_placement("8/8/8/8/8/8/8/R6R").expect("placement should parse");
        let text = render_attack_map(&attack_map(&board, Color::White));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "White attacks");
        assert_eq!(lines[2], "8 1 · · · · · · 1 8");
        assert_eq!(lines[9], "1 · 2 2 2 2 2 2 · 1");
    }
}
