//! Principal-variation search under iterative deepening.
//!
//! The engine owns its transposition table and killer slots; each
//! `best_move` call works on a private clone of the caller's board and
//! walks it with make/unmake only.

use crate::board::{Board, Color, Move, MoveList};
use crate::evaluation::evaluate;
use crate::ordering::order_moves;
use crate::pst::MATERIAL;
use crate::tt::{TTFlag, TranspositionTable};
use crate::types::{
    Score, ASPIRATION_MAX, ASPIRATION_WINDOW, DELTA_MARGIN, INFINITY, MATE, TT_CAPACITY,
};

pub struct Search {
    max_depth: i32,
    tt: TranspositionTable,
    killers: Vec<[Option<Move>; 2]>,
    nodes: u64,
}

impl Search {
    pub fn new(max_depth: u32) -> Self {
        let max_depth = max_depth.max(1) as i32;
        Search {
            max_depth,
            tt: TranspositionTable::new(TT_CAPACITY),
            killers: vec![[None; 2]; max_depth as usize + 1],
            nodes: 0,
        }
    }

    /// Pick a move for the side to move, searching to the configured
    /// depth. Returns the move and its score in pawns from White's
    /// point of view, or None when the position has no legal moves
    /// (the caller tells mate from stalemate via `Board::in_check`).
    pub fn best_move(&mut self, board: &Board) -> Option<(Move, f64)> {
        let mut board = board.clone();
        self.killers = vec![[None; 2]; self.max_depth as usize + 1];
        self.nodes = 0;

        let mut moves = board.generate_legal();
        if moves.is_empty() {
            return None;
        }

        let mut best_move = moves[0];
        let mut best_score = -INFINITY;

        for depth in 1..=self.max_depth {
            let pv_move = if depth == 1 { None } else { Some(best_move) };
            order_moves(&mut board, &mut moves, pv_move, None);

            let (score, mv) = if depth >= 2 && best_score.abs() < MATE - 100 {
                self.root_aspiration(&mut board, &moves, depth, best_score)
            } else {
                self.root_search(&mut board, &moves, depth, -INFINITY, INFINITY)
            };

            best_score = score;
            best_move = mv;

            log::debug!(
                "depth {depth}: best {best_move} score {best_score} ({} nodes)",
                self.nodes
            );
        }

        let white_score = match board.side_to_move() {
            Color::White => best_score,
            Color::Black => -best_score,
        };
        Some((best_move, white_score as f64 / 100.0))
    }

    /// Search the root window around the previous iteration's score,
    /// doubling the half-width on failure until the cap, then fall back
    /// to the full window.
    fn root_aspiration(
        &mut self,
        board: &mut Board,
        moves: &[Move],
        depth: i32,
        previous: Score,
    ) -> (Score, Move) {
        let mut window = ASPIRATION_WINDOW;
        loop {
            let alpha = previous - window;
            let beta = previous + window;
            let (score, mv) = self.root_search(board, moves, depth, alpha, beta);
            if score > alpha && score < beta {
                return (score, mv);
            }
            if window >= ASPIRATION_MAX {
                return self.root_search(board, moves, depth, -INFINITY, INFINITY);
            }
            window *= 2;
        }
    }

    fn root_search(
        &mut self,
        board: &mut Board,
        moves: &[Move],
        depth: i32,
        mut alpha: Score,
        beta: Score,
    ) -> (Score, Move) {
        let mut best_score = -INFINITY;
        let mut best_move = moves[0];

        for &m in moves {
            board.make_move(m);
            let score = -self.pvs(board, depth - 1, -beta, -alpha, true);
            board.unmake_move();

            if score > best_score {
                best_score = score;
                best_move = m;
            }
            if score > alpha {
                alpha = score;
                // only reachable under an aspiration window
                if alpha >= beta {
                    break;
                }
            }
        }

        (best_score, best_move)
    }

    /// Returns a side-to-move-positive score: exact inside (alpha, beta),
    /// an upper bound at or below alpha, or a lower bound at or above
    /// beta.
    fn pvs(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: Score,
        beta: Score,
        null_allowed: bool,
    ) -> Score {
        self.nodes += 1;

        if board.is_repetition() || board.is_fifty_move_rule() {
            return 0;
        }

        let key = board.key();
        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(key) {
            tt_move = entry.best_move;
            // mate scores are not ply-adjusted, so they never cut
            if entry.depth as i32 >= depth && entry.score.abs() < MATE - 100 {
                match entry.flag {
                    TTFlag::Exact => return entry.score,
                    TTFlag::LowerBound if entry.score >= beta => return entry.score,
                    TTFlag::UpperBound if entry.score <= alpha => return entry.score,
                    _ => {}
                }
            }
        }

        let in_check = board.in_check();

        // razoring: hopeless-looking shallow nodes drop straight into
        // quiescence, and its verdict stands if it stays under beta
        if depth <= 3 && !in_check && beta.abs() < MATE - 100 {
            let margin = 300 + 50 * depth;
            let static_eval = evaluate(board);
            if static_eval + margin < beta {
                let verified = self.quiesce(board, alpha, beta);
                if verified < beta {
                    return verified;
                }
            }
        }

        if depth <= 0 {
            return self.quiesce(board, alpha, beta);
        }

        let pv_node = beta - alpha > 1;

        // reverse futility: so far above beta that even a conservative
        // discount keeps us there
        if depth <= 7 && !in_check && !pv_node && beta.abs() < MATE - 100 {
            let static_eval = evaluate(board);
            let margin = 120 * depth;
            if static_eval - margin >= beta {
                return static_eval - margin;
            }
        }

        // null move: hand the opponent a free tempo; if the position
        // still beats beta it is good enough to prune
        if null_allowed
            && board.should_try_null_move(depth)
            && beta < MATE - 100
            && alpha > -MATE + 100
        {
            board.make_null_move();
            let score = -self.pvs(board, depth - 3, -beta, -beta + 1, false);
            board.unmake_null_move();

            if score >= beta {
                // an unverified mate from a null search is not trustworthy
                return if score >= MATE - 100 { beta } else { score };
            }
        }

        let mut moves = board.generate_legal();
        if moves.is_empty() {
            return if in_check {
                -(MATE - (self.max_depth - depth))
            } else {
                0
            };
        }

        let killers = self
            .killers
            .get(depth as usize)
            .copied()
            .unwrap_or([None; 2]);
        order_moves(board, &mut moves, tt_move, Some(&killers));

        let original_alpha = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = moves[0];

        // futility precomputation: when the static eval is far below
        // alpha at shallow depth, quiet non-checking moves are skipped
        let mut static_eval = 0;
        let mut static_eval_computed = false;
        let mut futility = false;
        let mut futility_margin = 0;
        if depth <= 8 && !in_check && !pv_node && alpha.abs() < MATE - 100 {
            static_eval = evaluate(board);
            static_eval_computed = true;
            futility_margin = 100 + 50 * depth;
            if static_eval + futility_margin < alpha {
                futility = true;
            }
        }

        let mut move_count = 0;
        let mut quiets_seen = 0;

        for &m in moves.iter() {
            move_count += 1;
            let is_quiet = !m.is_capture() && !m.is_promotion();
            if is_quiet {
                quiets_seen += 1;
            }

            if futility && is_quiet && !board.gives_check(m) {
                continue;
            }

            // tighter margin right above the horizon
            if depth == 1
                && !in_check
                && !pv_node
                && is_quiet
                && alpha.abs() < MATE - 100
                && !board.gives_check(m)
            {
                if !static_eval_computed {
                    static_eval = evaluate(board);
                    static_eval_computed = true;
                }
                if static_eval + 200 < alpha {
                    continue;
                }
            }

            // late move pruning: enough quiet moves tried, the rest are noise
            if depth <= 4 && !in_check && !pv_node && quiets_seen >= 3 + depth * depth {
                continue;
            }

            board.make_move(m);
            let gives_check = board.in_check();
            let new_depth = if gives_check { depth + 1 } else { depth }; // check extension

            let score;
            if move_count == 1 {
                score = -self.pvs(board, new_depth - 1, -beta, -alpha, true);
            } else {
                let mut s;
                if depth >= 3 && move_count > 3 && is_quiet && !gives_check {
                    // late move reduction, softened when the node hovers
                    // near alpha
                    let mut reduction =
                        1 + if depth > 6 { 1 } else { 0 } + if move_count > 6 { 1 } else { 0 };
                    if futility && static_eval + futility_margin / 2 > alpha {
                        reduction = (reduction - 1).max(1);
                    }
                    s = -self.pvs(board, new_depth - 1 - reduction, -alpha - 1, -alpha, true);
                    if s > alpha {
                        s = -self.pvs(board, new_depth - 1, -alpha - 1, -alpha, true);
                    }
                } else {
                    s = -self.pvs(board, new_depth - 1, -alpha - 1, -alpha, true);
                }

                if s > alpha && s < beta {
                    s = -self.pvs(board, new_depth - 1, -beta, -alpha, true);
                }
                score = s;
            }
            board.unmake_move();

            if score > best_score {
                best_score = score;
                best_move = m;
            }

            if score >= beta {
                if !m.is_capture() {
                    if let Some(slots) = self.killers.get_mut(depth as usize) {
                        slots[1] = slots[0];
                        slots[0] = Some(m);
                    }
                }
                self.tt
                    .store(key, score, depth as i16, TTFlag::LowerBound, Some(m));
                return score;
            }

            if score > alpha {
                alpha = score;
            }
        }

        // everything was futility-pruned away: fall back to the eval
        if futility && best_score == -INFINITY {
            return static_eval;
        }

        let flag = if best_score <= original_alpha {
            TTFlag::UpperBound
        } else {
            TTFlag::Exact
        };
        self.tt
            .store(key, best_score, depth as i16, flag, Some(best_move));

        best_score
    }

    /// Resolve captures, promotions, and checks until the position is
    /// quiet, so the horizon never lands in the middle of an exchange.
    fn quiesce(&mut self, board: &mut Board, mut alpha: Score, beta: Score) -> Score {
        self.nodes += 1;

        let stand_pat = evaluate(board);
        if stand_pat >= beta {
            return stand_pat;
        }
        // even winning a whole queen would not reach alpha
        if stand_pat + DELTA_MARGIN < alpha {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let legal = board.generate_legal();
        let mut tactical = MoveList::new();
        for &m in legal.iter() {
            if m.is_capture() || m.is_promotion() || board.gives_check(m) {
                tactical.push(m);
            }
        }
        if tactical.is_empty() {
            return stand_pat;
        }

        order_moves(board, &mut tactical, None, None);

        for &m in tactical.iter() {
            // per-move delta cutoff on the approximate material swing
            let gain = match m.capture {
                Some(victim) => MATERIAL[victim.index()] - MATERIAL[m.piece.index()],
                None => 0,
            };
            if stand_pat + gain + DELTA_MARGIN < alpha {
                continue;
            }

            board.make_move(m);
            let score = -self.quiesce(board, -beta, -alpha);
            board.unmake_move();

            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }

    #[cfg(test)]
    fn nodes(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_move_from_startpos() {
        let board = Board::new();
        let mut search = Search::new(4);
        let (mv, _) = search.best_move(&board).expect("startpos has moves");
        let mut check = board.clone();
        assert!(check.generate_legal().contains(&mv));
        assert!(search.nodes() > 0);
    }

    #[test]
    fn deterministic_across_runs() {
        let board = Board::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        )
        .unwrap();
        let first = Search::new(4).best_move(&board).unwrap();
        let second = Search::new(4).best_move(&board).unwrap();
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn mates_in_one_with_the_queen() {
        let board = Board::from_fen("k7/8/1K6/2Q5/8/8/8/8 w - - 0 1").unwrap();
        let mut search = Search::new(3);
        let (mv, score) = search.best_move(&board).unwrap();

        let mut check = board.clone();
        check.make_move(mv);
        assert!(check.in_check());
        assert!(check.generate_legal().is_empty(), "{mv} is not mate");
        assert!(score > 900.0, "mate score expected, got {score}");
    }

    #[test]
    fn mates_in_one_with_the_rook() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mut search = Search::new(2);
        let (mv, score) = search.best_move(&board).unwrap();
        assert_eq!(mv.uci(), "a1a8");
        assert!(score * 100.0 >= (MATE - 10) as f64);
    }

    #[test]
    fn grabs_the_hanging_queen() {
        // only capture on the board wins a queen for nothing
        let board = Board::from_fen("k7/8/8/3q4/4P3/8/8/7K w - - 0 1").unwrap();
        for depth in 1..=4 {
            let mut search = Search::new(depth);
            let (mv, _) = search.best_move(&board).unwrap();
            assert_eq!(mv.uci(), "e4d5", "depth {depth}");
        }
    }

    #[test]
    fn terminal_positions_return_none() {
        // checkmate
        let board = Board::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        assert!(Search::new(3).best_move(&board).is_none());
        assert!(board.in_check());

        // stalemate
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(Search::new(3).best_move(&board).is_none());
        assert!(!board.in_check());
    }

    #[test]
    fn balanced_opening_stays_balanced() {
        let board = Board::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        )
        .unwrap();
        let mut search = Search::new(4);
        let (mv, score) = search.best_move(&board).unwrap();
        let mut check = board.clone();
        assert!(check.generate_legal().contains(&mv));
        assert!(score.abs() < 2.0, "score {score} out of balance");
    }

    #[test]
    fn losing_side_heads_for_repetition() {
        // Black is a knight and two pawns down, but Qe1+/Qh4+ shuttles
        // the white king between g1 and h2 forever: nothing can block
        // f1 or h3 and nothing can take the queen. The search should
        // value the position as a draw, not as lost material.
        let board = Board::from_fen("QN5k/8/8/8/7q/8/5PP1/6K1 b - - 0 1").unwrap();
        let mut search = Search::new(5);
        let (mv, score) = search.best_move(&board).unwrap();

        // white-positive score; a material count would say roughly +5
        assert!(
            score < 2.0,
            "Black should hold the draw, got {score} after {mv}"
        );
        let mut check = board.clone();
        assert!(check.gives_check(mv), "perpetual starts with a check");
    }

    #[test]
    fn repetition_scores_zero_in_search() {
        let mut board = Board::new();
        for token in ["g1f3", "g8f6", "f3g1", "f6g8"] {
            board.make_move(board.from_uci(token).unwrap());
        }
        assert!(board.is_repetition());
        let mut search = Search::new(3);
        let score = search.pvs(&mut board, 3, -INFINITY, INFINITY, true);
        assert_eq!(score, 0);
    }

    #[test]
    fn tt_seeds_later_iterations() {
        let board = Board::new();
        let mut search = Search::new(4);
        search.best_move(&board).unwrap();
        let first_nodes = search.nodes();

        // warm table: a second identical search revisits fewer nodes
        let mut warm = Search::new(4);
        warm.best_move(&board).unwrap();
        warm.best_move(&board).unwrap();
        assert!(warm.nodes() <= first_nodes);
    }
}

// The search trusts order_moves to put the TT move first: a PVS node
// searches move one with the full window and the rest with null
// windows, so a good first move makes every sibling cheap.
//
// Mate scores bypass TT cutoffs entirely; the stored distance would be
// relative to the wrong root otherwise.
