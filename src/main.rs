use anyhow::Result;
use clap::{Parser, ValueEnum};

use cinder::board::Board;
use cinder::driver;
use cinder::types::DEFAULT_DEPTH;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Player vs engine: you enter moves in UCI notation
    Pve,
    /// Engine vs engine: auto play
    Eve,
}

#[derive(Parser, Debug)]
#[command(version, about = "Classical alpha-beta chess engine")]
struct Args {
    /// Input mode
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Maximum search depth
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// Maximum game length in half-moves (default: unlimited)
    #[arg(short, long)]
    length: Option<u32>,

    /// Starting position as a FEN string (default: the standard start)
    #[arg(short, long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let args = Args::parse();

    cinder::board::init();
    let mut board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::new(),
    };
    let max_plies = args.length.unwrap_or(u32::MAX);

    match args.mode {
        Mode::Pve => driver::pve(&mut board, args.depth, max_plies)?,
        Mode::Eve => driver::eve(&mut board, args.depth, max_plies)?,
    }

    Ok(())
}
