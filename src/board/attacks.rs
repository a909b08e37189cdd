use std::sync::LazyLock;

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// Precomputed leaper attacks. Slider attacks are generated on the fly
/// by walking rays until the first occupied square or the board edge;
/// wraparound is impossible because rays step in (file, rank) coordinates.
struct Tables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
}

const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

static TABLES: LazyLock<Tables> = LazyLock::new(|| {
    let mut knight = [Bitboard(0); 64];
    let mut king = [Bitboard(0); 64];
    let mut pawn = [[Bitboard(0); 64]; 2];

    for i in 0..64u8 {
        let sq = Square::new(i);

        for (df, dr) in KNIGHT_DIRS {
            if let Some(dst) = sq.offset(df, dr) {
                knight[i as usize] |= Bitboard::from_square(dst);
            }
        }

        for (df, dr) in KING_DIRS {
            if let Some(dst) = sq.offset(df, dr) {
                king[i as usize] |= Bitboard::from_square(dst);
            }
        }

        // white pawns capture toward rank 8, black toward rank 1
        for df in [-1i8, 1] {
            if let Some(dst) = sq.offset(df, 1) {
                pawn[Color::White.index()][i as usize] |= Bitboard::from_square(dst);
            }
            if let Some(dst) = sq.offset(df, -1) {
                pawn[Color::Black.index()][i as usize] |= Bitboard::from_square(dst);
            }
        }
    }

    Tables { knight, king, pawn }
});

/// Force table construction; otherwise tables build lazily on first use.
pub fn init() {
    LazyLock::force(&TABLES);
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    TABLES.knight[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    TABLES.king[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks (the two forward diagonals).
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    TABLES.pawn[color.index()][sq.index()]
}

/// Walk the given rays from `sq`, including the first occupied square hit.
fn ray_attacks(sq: Square, occupied: Bitboard, dirs: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard(0);
    for &(df, dr) in dirs {
        let mut cur = sq;
        while let Some(next) = cur.offset(df, dr) {
            attacks |= Bitboard::from_square(next);
            if occupied.contains(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRS)
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRS)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}
