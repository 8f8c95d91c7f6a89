//! Command-line front end: read a board, print the check/checkmate verdict.
//!
//! Usage:
//! `plum_checkmate board.txt`
//! `echo "4k3/8/8/8/8/8/8/4K2r" | plum_checkmate --render`
//! `plum_checkmate --random 7 --attack-maps`

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use plum_checkmate::board_state::board::Board;
use plum_checkmate::check::check_detector::attack_maps;
use plum_checkmate::check::position_analysis::analyze_position;
use plum_checkmate::utils::grid_parser::{parse_board_text, BoardFormat};
use plum_checkmate::utils::random_board::random_board;
use plum_checkmate::utils::render_board::{render_attack_map, render_board};
use plum_checkmate::utils::render_verdict::render_verdict;

/// Pieces added to the two kings in `--random` mode.
const RANDOM_EXTRA_PIECES: usize = 10;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    Grid,
    Fen,
}

impl From<FormatArg> for BoardFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Auto => BoardFormat::Auto,
            FormatArg::Grid => BoardFormat::Grid,
            FormatArg::Fen => BoardFormat::Fen,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "plum_checkmate")]
#[command(about = "Report which king is in check and whether it is checkmate")]
struct Cli {
    /// Board file: 8 rows of piece codes ('#' or '.' empty) or a FEN placement.
    /// Reads stdin when omitted or '-'.
    input: Option<PathBuf>,

    /// How to read the input.
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Print a board diagram to stderr.
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Print both attack maps to stderr.
    #[arg(long, default_value_t = false)]
    attack_maps: bool,

    /// Analyze a random board from this seed instead of reading input.
    #[arg(long)]
    random: Option<u64>,

    /// Log analysis steps at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let board = load_board(&cli)?;
    info!("loaded board with {} pieces", board.occupied().count());

    if cli.render {
        eprintln!("{}", render_board(&board));
    }
    if cli.attack_maps {
        for map in attack_maps(&board) {
            eprintln!("{}", render_attack_map(&map));
        }
    }

    let report = analyze_position(&board)?;
    println!("{}", render_verdict(&board, &report));

    if let Some(mv) = report.resolving_move() {
        info!("check can be answered by {}", mv.to_long_algebraic());
    }

    Ok(())
}

fn load_board(cli: &Cli) -> Result<Board> {
    if let Some(seed) = cli.random {
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(random_board(&mut rng, RANDOM_EXTRA_PIECES));
    }

    let text = match &cli.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read board from stdin")?;
            buf
        }
    };

    parse_board_text(&text, cli.format.into()).context("invalid board input")
}
