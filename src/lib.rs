//! Crate root module declarations for the Plum Checkmate analyzer.
//!
//! This file exposes the board model, the per-piece movement tables and move
//! generator, the check/checkmate analysis passes, and the text helpers used
//! by the command-line front end, so binaries, benches and tests can import
//! stable module paths.

pub mod board_state {
    pub mod board;
    pub mod chess_types;
}

pub mod moves {
    pub mod piece_catalog;
    pub mod reachable_squares;
    pub mod square_set;
}

pub mod check {
    pub mod attack_map;
    pub mod check_detector;
    pub mod checkmate_verifier;
    pub mod position_analysis;
}

pub mod check_errors;

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod grid_parser;
    pub mod random_board;
    pub mod render_board;
    pub mod render_verdict;
}
