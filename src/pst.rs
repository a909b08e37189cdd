//! Material values, piece-square tables, and game-phase weights.
//!
//! Tables are indexed by square from White's point of view (a1 = 0,
//! first row = rank 1); Black mirrors vertically with `sq ^ 56`. Each
//! piece has an opening and an endgame table, blended by the evaluator
//! according to the remaining material.

use crate::types::Score;

/// Centipawn material values, indexed by `Piece::index()`.
pub const MATERIAL: [Score; 6] = [100, 320, 330, 500, 900, 0];

/// Phase contribution per piece type. All minor and major pieces on the
/// board sum to `MAX_PHASE`.
pub const PHASE_WEIGHT: [Score; 6] = [0, 1, 1, 2, 4, 0];
pub const MAX_PHASE: Score = 24;

#[rustfmt::skip]
pub const OPENING_PST: [[Score; 64]; 6] = [
    // pawn
    [
        0,  0,  0,  0,   0,   0,  0,  0,  // rank 1
        5,  10, 10, -20, -20, 10, 10, 5,  // rank 2 - discourage staying home
        10, 10, 20, 30,  30,  20, 10, 10, // rank 3
        5,  5,  10, 50,  50,  10, 5,  5,  // rank 4 - strong central control
        0,  0,  0,  60,  60,  0,  0,  0,  // rank 5 - advanced central pawns
        5,  -5, -10, 20, 20, -10, -5, 5,  // rank 6
        5,  10, 10, -20, -20, 10, 10, 5,  // rank 7
        0,  0,  0,  0,   0,   0,  0,  0,  // rank 8
    ],
    // knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20, 0,   0,   0,   0,   -20, -40,
        -30, 0,   10,  15,  15,  10,  0,   -30,
        -30, 5,   15,  20,  20,  15,  5,   -30,
        -30, 0,   15,  20,  20,  15,  0,   -30,
        -30, 5,   10,  15,  15,  10,  5,   -30,
        -40, -20, 0,   5,   5,   0,   -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10, 0,   0,   0,   0,   0,   0,   -10,
        -10, 0,   5,   10,  10,  5,   0,   -10,
        -10, 5,   5,   10,  10,  5,   5,   -10,
        -10, 0,   10,  10,  10,  10,  0,   -10,
        -10, 10,  10,  10,  10,  10,  10,  -10,
        -10, 5,   0,   0,   0,   0,   5,   -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // rook
    [
        0,  0,  0,  0,  0,  0,  0,  0,
        -5, 0,  0,  0,  0,  0,  0,  -5,
        -5, 0,  0,  0,  0,  0,  0,  -5,
        -5, 0,  0,  0,  0,  0,  0,  -5,
        -5, 0,  0,  0,  0,  0,  0,  -5,
        -5, 0,  0,  0,  0,  0,  0,  -5,
        5,  10, 10, 10, 10, 10, 10, 5,  // rank 7 bonus
        0,  0,  0,  5,  5,  0,  0,  0,
    ],
    // queen
    [
        -20, -10, -10, -5, -5, -10, -10, -20,
        -10, 0,   0,   0,  0,  0,   0,   -10,
        -10, 0,   5,   5,  5,  5,   0,   -10,
        -5,  0,   5,   5,  5,  5,   0,   -5,
        0,   0,   5,   5,  5,  5,   0,   -5,
        -10, 5,   5,   5,  5,  5,   0,   -10,
        -10, 0,   5,   0,  0,  0,   0,   -10,
        -20, -10, -10, -5, -5, -10, -10, -20,
    ],
    // king - hide behind the pawn shelter while material is on the board
    [
        20,  30,  10,  0,   0,   10,  30,  20,
        20,  20,  0,   0,   0,   0,   20,  20,
        -10, -20, -20, -20, -20, -20, -20, -10,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
    ],
];

#[rustfmt::skip]
pub const ENDGAME_PST: [[Score; 64]; 6] = [
    // pawn - every step toward promotion counts
    [
        0,  0,  0,  0,  0,  0,  0,  0,
        10, 10, 10, 10, 10, 10, 10, 10,
        15, 15, 15, 15, 15, 15, 15, 15,
        25, 25, 25, 25, 25, 25, 25, 25,
        40, 40, 40, 40, 40, 40, 40, 40,
        60, 60, 60, 60, 60, 60, 60, 60,
        90, 90, 90, 90, 90, 90, 90, 90,
        0,  0,  0,  0,  0,  0,  0,  0,
    ],
    // knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20, 0,   0,   0,   0,   -20, -40,
        -30, 0,   10,  15,  15,  10,  0,   -30,
        -30, 0,   15,  20,  20,  15,  0,   -30,
        -30, 0,   15,  20,  20,  15,  0,   -30,
        -30, 0,   10,  15,  15,  10,  0,   -30,
        -40, -20, 0,   0,   0,   0,   -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10, 0,   0,   0,   0,   0,   0,   -10,
        -10, 0,   5,   10,  10,  5,   0,   -10,
        -10, 0,   10,  15,  15,  10,  0,   -10,
        -10, 0,   10,  15,  15,  10,  0,   -10,
        -10, 0,   5,   10,  10,  5,   0,   -10,
        -10, 0,   0,   0,   0,   0,   0,   -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // rook
    [
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0,
        5, 10, 10, 10, 10, 10, 10, 5,
        0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // queen
    [
        -10, -5, -5, -5, -5, -5, -5, -10,
        -5,  0,  0,  0,  0,  0,  0,  -5,
        -5,  0,  5,  5,  5,  5,  0,  -5,
        -5,  0,  5,  10, 10, 5,  0,  -5,
        -5,  0,  5,  10, 10, 5,  0,  -5,
        -5,  0,  5,  5,  5,  5,  0,  -5,
        -5,  0,  0,  0,  0,  0,  0,  -5,
        -10, -5, -5, -5, -5, -5, -5, -10,
    ],
    // king - walk to the center once the queens are gone
    [
        -50, -30, -30, -30, -30, -30, -30, -50,
        -30, -10, 0,   0,   0,   0,   -10, -30,
        -30, 0,   20,  30,  30,  20,  0,   -30,
        -30, 0,   30,  40,  40,  30,  0,   -30,
        -30, 0,   30,  40,  40,  30,  0,   -30,
        -30, 0,   20,  30,  30,  20,  0,   -30,
        -30, -10, 0,   0,   0,   0,   -10, -30,
        -50, -30, -30, -30, -30, -30, -30, -50,
    ],
];
