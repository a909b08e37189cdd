//! PGN game records: the seven-tag roster plus SAN movetext.

use crate::board::{Board, Color, Move, Piece};

/// Collects a game move by move and renders it as PGN. Moves must be
/// recorded against the position they are played from, before the
/// driver makes them on its board.
pub struct PgnExporter {
    tags: Vec<(String, String)>,
    moves: Vec<String>,
}

impl PgnExporter {
    pub fn new() -> Self {
        let tags = [
            ("Event", "?"),
            ("Site", "?"),
            ("Date", "????.??.??"),
            ("Round", "?"),
            ("White", "?"),
            ("Black", "?"),
            ("Result", "*"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        PgnExporter {
            tags,
            moves: Vec::new(),
        }
    }

    /// Overwrite a roster tag or append a custom one.
    pub fn set_tag(&mut self, key: &str, value: &str) {
        for (k, v) in self.tags.iter_mut() {
            if k == key {
                *v = value.to_string();
                return;
            }
        }
        self.tags.push((key.to_string(), value.to_string()));
    }

    pub fn set_result(&mut self, result: &str) {
        self.set_tag("Result", result);
    }

    /// Record `m` as played from the current position of `board`.
    /// The board is borrowed mutably for SAN resolution but handed back
    /// unchanged.
    pub fn record(&mut self, board: &mut Board, m: Move) {
        if board.side_to_move() == Color::White {
            self.moves.push(format!("{}.", board.fullmove_number()));
        }
        let san = to_san(board, m);
        self.moves.push(san);
    }

    /// The complete PGN: tag pairs, a blank line, wrapped movetext, and
    /// the result token.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.tags {
            out.push_str(&format!("[{key} \"{value}\"]\n"));
        }
        out.push('\n');

        let result = self
            .tags
            .iter()
            .find(|(k, _)| k == "Result")
            .map(|(_, v)| v.as_str())
            .unwrap_or("*");

        let mut line_len = 0;
        for (i, token) in self.moves.iter().enumerate() {
            if i > 0 {
                if line_len + 1 + token.len() > 80 {
                    out.push('\n');
                    line_len = 0;
                } else {
                    out.push(' ');
                    line_len += 1;
                }
            }
            out.push_str(token);
            line_len += token.len();
        }

        if !self.moves.is_empty() {
            out.push(' ');
        }
        out.push_str(result);
        out.push('\n');
        out
    }
}

impl Default for PgnExporter {
    fn default() -> Self {
        PgnExporter::new()
    }
}

/// Standard algebraic notation for `m` in the position on `board`.
pub fn to_san(board: &mut Board, m: Move) -> String {
    let mut san = String::new();

    if m.is_king_castle() {
        san.push_str("O-O");
    } else if m.is_queen_castle() {
        san.push_str("O-O-O");
    } else {
        if m.piece != Piece::Pawn {
            san.push(m.piece.letter().to_ascii_uppercase());
            san.push_str(&disambiguation(board, m));
        }

        if m.is_capture() {
            if m.piece == Piece::Pawn {
                san.push((b'a' + m.from.file()) as char);
            }
            san.push('x');
        }

        san.push_str(&m.to.to_string());

        if let Some(promo) = m.promo {
            san.push('=');
            san.push(promo.letter().to_ascii_uppercase());
        }
    }

    // check and mate suffixes come from the position after the move
    board.make_move(m);
    if board.in_check() {
        san.push(if board.generate_legal().is_empty() { '#' } else { '+' });
    }
    board.unmake_move();

    san
}

/// File and/or rank of origin when another piece of the same type could
/// also reach the destination.
fn disambiguation(board: &mut Board, m: Move) -> String {
    let mut need_file = false;
    let mut need_rank = false;
    let mut ambiguous = false;

    for other in board.generate_legal() {
        if other.piece == m.piece && other.to == m.to && other.from != m.from {
            ambiguous = true;
            if other.from.file() == m.from.file() {
                need_rank = true;
            }
            if other.from.rank() == m.from.rank() {
                need_file = true;
            }
        }
    }

    if !ambiguous {
        return String::new();
    }
    if !need_file && !need_rank {
        need_file = true;
    }

    let mut out = String::new();
    if need_file {
        out.push((b'a' + m.from.file()) as char);
    }
    if need_rank {
        out.push((b'1' + m.from.rank()) as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_of(fen: &str, uci: &str) -> String {
        let mut board = Board::from_fen(fen).unwrap();
        let m = board.from_uci(uci).unwrap();
        to_san(&mut board, m)
    }

    #[test]
    fn pawn_and_piece_moves() {
        let mut board = Board::new();
        let e4 = board.from_uci("e2e4").unwrap();
        assert_eq!(to_san(&mut board, e4), "e4");
        let nf3 = board.from_uci("g1f3").unwrap();
        assert_eq!(to_san(&mut board, nf3), "Nf3");
    }

    #[test]
    fn captures() {
        assert_eq!(
            san_of("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2", "e4d5"),
            "exd5"
        );
        assert_eq!(
            san_of("rnbqkbnr/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2", "e5d4"),
            "exd4"
        );
    }

    #[test]
    fn castling_notation() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, "e1g1"), "O-O");
        assert_eq!(san_of(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn promotion_notation() {
        // the new queen also checks the king down the a-file
        assert_eq!(san_of("8/P7/8/8/8/8/8/k6K w - - 0 1", "a7a8q"), "a8=Q+");
    }

    #[test]
    fn check_and_mate_suffixes() {
        assert_eq!(
            san_of("1k1r4/pp1b1R2/3q2pp/4p3/2B5/4Q3/PPP2B2/2K5 b - - 0 1", "d6d1"),
            "Qd1+"
        );
        assert_eq!(
            san_of("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", "a1a8"),
            "Ra8#"
        );
    }

    #[test]
    fn file_disambiguation() {
        // two knights can reach d2
        assert_eq!(
            san_of("k7/8/8/8/8/8/8/KN3N2 w - - 0 1", "b1d2"),
            "Nbd2"
        );
    }

    #[test]
    fn rank_disambiguation() {
        // rooks doubled on the a-file, both reaching a5
        assert_eq!(
            san_of("7K/8/R7/8/8/R7/8/7k w - - 0 1", "a3a5"),
            "R3a5"
        );
    }

    #[test]
    fn full_game_rendering() {
        let mut board = Board::new();
        let mut pgn = PgnExporter::new();
        pgn.set_tag("White", "Player");
        pgn.set_tag("Black", "Engine");

        for uci in ["e2e4", "e7e5", "g1f3"] {
            let m = board.from_uci(uci).unwrap();
            pgn.record(&mut board, m);
            board.make_move(m);
        }
        pgn.set_result("*");

        let out = pgn.render();
        assert!(out.contains("[White \"Player\"]"));
        assert!(out.contains("[Result \"*\"]"));
        assert!(out.contains("1. e4 e5 2. Nf3 *"));
    }

    #[test]
    fn record_leaves_board_unchanged() {
        let mut board = Board::new();
        let reference = board.clone();
        let mut pgn = PgnExporter::new();
        let m = board.from_uci("d2d4").unwrap();
        pgn.record(&mut board, m);
        assert_eq!(board, reference);
    }
}
