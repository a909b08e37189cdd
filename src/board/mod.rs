pub(crate) mod attacks;
mod bitboard;
mod board;
mod chessmove;
mod movegen;
mod piece;
mod square;
pub(crate) mod zobrist;

pub use bitboard::{Bitboard, EMPTY};
pub use board::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, START_FEN};
pub use chessmove::{
    Move, CAPTURE, DOUBLE_PUSH, EN_PASSANT, KING_CASTLE, PROMOTION, QUEEN_CASTLE, QUIET,
};
pub use movegen::{perft, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

/// Build the shared read-only tables up front. Everything also
/// initializes lazily on first use, so this is optional.
pub fn init() {
    attacks::init();
    zobrist::init();
}
