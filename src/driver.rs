//! Interactive game loops: player vs engine and engine vs engine.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color};
use crate::pgn::PgnExporter;
use crate::search::Search;

enum GameEnd {
    Checkmate(Color), // winner
    Stalemate,
    FiftyMoves,
    Repetition,
    LengthLimit,
    NoInput,
}

/// Player vs engine: the player moves first from the given position,
/// entering moves in UCI notation. Illegal or unparsable input is
/// rejected and re-prompted without costing a turn.
pub fn pve(board: &mut Board, depth: u32, max_plies: u32) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut engine = Search::new(depth);
    let mut pgn = PgnExporter::new();
    pgn.set_tag("White", "Player");
    pgn.set_tag("Black", "cinder");

    println!("{}", board.pretty());

    let mut plies = 0u32;
    let end = loop {
        if plies >= max_plies {
            break GameEnd::LengthLimit;
        }
        if let Some(end) = game_over(board) {
            break end;
        }

        if plies % 2 == 0 {
            // player turn
            print!("Enter move in UCI format: ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break GameEnd::NoInput,
            };
            let token = line.trim();
            if token.is_empty() {
                continue;
            }

            let m = match board.from_uci(token) {
                Ok(m) => m,
                Err(e) => {
                    println!("{e}, try again!");
                    continue;
                }
            };
            if !board.generate_legal().contains(&m) {
                println!("Not legal, try again!");
                continue;
            }

            pgn.record(board, m);
            board.make_move(m);
            println!("{}", board.pretty());
        } else {
            match engine.best_move(board) {
                Some((m, eval)) => {
                    log::info!("engine evaluation {eval:+.2}");
                    println!("Engine played {}", m.uci());
                    pgn.record(board, m);
                    board.make_move(m);
                    println!("{}", board.pretty());
                }
                None => break GameEnd::Stalemate, // unreachable after game_over
            }
        }
        plies += 1;
    };

    finish(&mut pgn, end);
    Ok(())
}

/// Engine vs engine: one engine plays both sides, printing the
/// evaluation (White-positive, in pawns) before each move.
pub fn eve(board: &mut Board, depth: u32, max_plies: u32) -> io::Result<()> {
    let mut engine = Search::new(depth);
    let mut pgn = PgnExporter::new();
    pgn.set_tag("White", "cinder");
    pgn.set_tag("Black", "cinder");

    println!("{}", board.pretty());

    let mut plies = 0u32;
    let end = loop {
        if plies >= max_plies {
            break GameEnd::LengthLimit;
        }
        if let Some(end) = game_over(board) {
            break end;
        }

        match engine.best_move(board) {
            Some((m, eval)) => {
                println!("{eval:+.2}: {}", m.uci());
                pgn.record(board, m);
                board.make_move(m);
                println!("{}", board.pretty());
            }
            None => break GameEnd::Stalemate, // unreachable after game_over
        }
        plies += 1;
    };

    finish(&mut pgn, end);
    Ok(())
}

fn game_over(board: &mut Board) -> Option<GameEnd> {
    if board.generate_legal().is_empty() {
        return if board.in_check() {
            Some(GameEnd::Checkmate(!board.side_to_move()))
        } else {
            Some(GameEnd::Stalemate)
        };
    }
    if board.is_fifty_move_rule() {
        return Some(GameEnd::FiftyMoves);
    }
    if board.is_repetition() {
        return Some(GameEnd::Repetition);
    }
    None
}

fn finish(pgn: &mut PgnExporter, end: GameEnd) {
    let (message, result) = match end {
        GameEnd::Checkmate(Color::White) => ("Checkmate, White wins.", "1-0"),
        GameEnd::Checkmate(Color::Black) => ("Checkmate, Black wins.", "0-1"),
        GameEnd::Stalemate => ("Stalemate.", "1/2-1/2"),
        GameEnd::FiftyMoves => ("Draw by the fifty-move rule.", "1/2-1/2"),
        GameEnd::Repetition => ("Draw by repetition.", "1/2-1/2"),
        GameEnd::LengthLimit => ("Move limit reached.", "*"),
        GameEnd::NoInput => ("Input closed.", "*"),
    };
    println!("{message}");
    pgn.set_result(result);
    println!("{}", pgn.render());
}
