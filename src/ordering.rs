//! Move ordering. Better ordering means earlier cutoffs; the schedule
//! puts the hash/PV move first, then killers, captures by MVV-LVA,
//! promotions, checking moves, and castling.

use arrayvec::ArrayVec;

use crate::board::{Board, Move, MoveList};
use crate::pst::MATERIAL;
use crate::types::Score;

const PV_SCORE: Score = 10_000;
const KILLER_0_SCORE: Score = 8_000;
const KILLER_1_SCORE: Score = 7_000;
const CAPTURE_SCORE: Score = 1_000;
const PROMOTION_SCORE: Score = 900;
const CHECK_SCORE: Score = 50;
const CASTLE_SCORE: Score = 25;

/// Sort `moves` best-first. The sort is stable, so equal scores keep
/// their generation order.
pub fn order_moves(
    board: &mut Board,
    moves: &mut MoveList,
    pv_move: Option<Move>,
    killers: Option<&[Option<Move>; 2]>,
) {
    let mut scored: ArrayVec<(Score, Move), 256> = moves
        .iter()
        .map(|&m| (score_move(board, m, pv_move, killers), m))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    moves.clear();
    moves.extend(scored.into_iter().map(|(_, m)| m));
}

fn score_move(
    board: &mut Board,
    m: Move,
    pv_move: Option<Move>,
    killers: Option<&[Option<Move>; 2]>,
) -> Score {
    let mut score = 0;

    if pv_move == Some(m) {
        score += PV_SCORE;
    }

    if let Some(killers) = killers {
        if killers[0] == Some(m) {
            score += KILLER_0_SCORE;
        } else if killers[1] == Some(m) {
            score += KILLER_1_SCORE;
        }
    }

    if m.is_capture() {
        score += CAPTURE_SCORE;
        if let Some(victim) = m.capture {
            // most valuable victim first, cheapest attacker as tiebreak
            score += MATERIAL[victim.index()] - MATERIAL[m.piece.index()] / 10;
        }
    }

    if m.is_promotion() {
        score += PROMOTION_SCORE;
        if let Some(promo) = m.promo {
            score += MATERIAL[promo.index()] / 10;
        }
    }

    if board.gives_check(m) {
        score += CHECK_SCORE;
    }

    if m.is_castle() {
        score += CASTLE_SCORE;
    }

    score
}
