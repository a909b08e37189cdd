use arrayvec::ArrayVec;

use super::attacks;
use super::board::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::chessmove::{Move, CAPTURE, DOUBLE_PUSH, EN_PASSANT, KING_CASTLE, PROMOTION, QUEEN_CASTLE};
use super::piece::{Color, Piece};
use super::square::Square;

/// Fixed-capacity move buffer; no legal position exceeds it, so move
/// generation never touches the heap.
pub type MoveList = ArrayVec<Move, 256>;

impl Board {
    /// All moves that obey piece geometry. The mover's king may be left
    /// in check; `generate_legal` filters those out.
    pub fn generate_pseudo(&self) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move();

        self.pawn_moves(us, &mut moves);
        self.knight_moves(us, &mut moves);
        self.slider_moves(us, Piece::Bishop, &mut moves);
        self.slider_moves(us, Piece::Rook, &mut moves);
        self.slider_moves(us, Piece::Queen, &mut moves);
        self.king_moves(us, &mut moves);

        moves
    }

    /// Pseudo-legal moves filtered by playing each one and verifying the
    /// mover's king is not left attacked.
    pub fn generate_legal(&mut self) -> MoveList {
        let us = self.side_to_move();
        let pseudo = self.generate_pseudo();
        let mut legal = MoveList::new();
        for m in pseudo {
            self.make_move(m);
            if !self.is_attacked(self.king_square(us), !us) {
                legal.push(m);
            }
            self.unmake_move();
        }
        legal
    }

    fn pawn_moves(&self, us: Color, moves: &mut MoveList) {
        let them = !us;
        let empty = !self.occupancy_all();
        let enemies = self.occupancy(them);
        let (dr, start_rank, promo_rank) = match us {
            Color::White => (1i8, 1u8, 7u8),
            Color::Black => (-1, 6, 0),
        };

        for from in self.pieces(us, Piece::Pawn).squares() {
            // pushes; pawns never sit on the last rank, so one step
            // forward always exists
            let step = from.offset(0, dr).expect("pawn on a back rank");
            if empty.contains(step) {
                if step.rank() == promo_rank {
                    for promo in Piece::PROMOTIONS {
                        moves.push(Move::new(from, step, Piece::Pawn, None, Some(promo), PROMOTION));
                    }
                } else {
                    moves.push(Move::quiet(from, step, Piece::Pawn));
                    if from.rank() == start_rank {
                        let double = step.offset(0, dr).expect("double push inside board");
                        if empty.contains(double) {
                            moves.push(Move::new(
                                from,
                                double,
                                Piece::Pawn,
                                None,
                                None,
                                DOUBLE_PUSH,
                            ));
                        }
                    }
                }
            }

            // captures
            for to in (attacks::pawn_attacks(us, from) & enemies).squares() {
                let victim = self.piece_at(to).map(|(_, p)| p);
                if to.rank() == promo_rank {
                    for promo in Piece::PROMOTIONS {
                        moves.push(Move::new(
                            from,
                            to,
                            Piece::Pawn,
                            victim,
                            Some(promo),
                            PROMOTION | CAPTURE,
                        ));
                    }
                } else {
                    moves.push(Move::new(from, to, Piece::Pawn, victim, None, CAPTURE));
                }
            }

            // en passant: the target square is empty, the captured pawn
            // sits beside the mover
            if let Some(ep) = self.ep_square() {
                if attacks::pawn_attacks(us, from).contains(ep) {
                    moves.push(Move::new(
                        from,
                        ep,
                        Piece::Pawn,
                        Some(Piece::Pawn),
                        None,
                        EN_PASSANT | CAPTURE,
                    ));
                }
            }
        }
    }

    fn knight_moves(&self, us: Color, moves: &mut MoveList) {
        let own = self.occupancy(us);
        for from in self.pieces(us, Piece::Knight).squares() {
            for to in (attacks::knight_attacks(from) & !own).squares() {
                self.push_piece_move(from, to, Piece::Knight, moves);
            }
        }
    }

    fn slider_moves(&self, us: Color, piece: Piece, moves: &mut MoveList) {
        let own = self.occupancy(us);
        let occ = self.occupancy_all();
        for from in self.pieces(us, piece).squares() {
            let targets = match piece {
                Piece::Bishop => attacks::bishop_attacks(from, occ),
                Piece::Rook => attacks::rook_attacks(from, occ),
                Piece::Queen => attacks::queen_attacks(from, occ),
                _ => unreachable!("not a slider"),
            };
            for to in (targets & !own).squares() {
                self.push_piece_move(from, to, piece, moves);
            }
        }
    }

    fn king_moves(&self, us: Color, moves: &mut MoveList) {
        let own = self.occupancy(us);
        let from = self.king_square(us);
        for to in (attacks::king_attacks(from) & !own).squares() {
            self.push_piece_move(from, to, Piece::King, moves);
        }
        self.castling_moves(us, from, moves);
    }

    /// Castling requires the right to still exist, an empty corridor,
    /// and none of the king's origin, transit, or destination squares
    /// attacked.
    fn castling_moves(&self, us: Color, king: Square, moves: &mut MoveList) {
        let them = !us;
        let occ = self.occupancy_all();
        let rights = self.castling_rights();
        let (ks_right, qs_right, back_rank) = match us {
            Color::White => (CASTLE_WK, CASTLE_WQ, 0u8),
            Color::Black => (CASTLE_BK, CASTLE_BQ, 7),
        };

        if king != Square::from_coords(back_rank, 4) {
            return;
        }

        if rights & ks_right != 0 {
            let f = Square::from_coords(back_rank, 5);
            let g = Square::from_coords(back_rank, 6);
            if !occ.contains(f)
                && !occ.contains(g)
                && !self.is_attacked(king, them)
                && !self.is_attacked(f, them)
                && !self.is_attacked(g, them)
            {
                moves.push(Move::new(king, g, Piece::King, None, None, KING_CASTLE));
            }
        }

        if rights & qs_right != 0 {
            let b = Square::from_coords(back_rank, 1);
            let c = Square::from_coords(back_rank, 2);
            let d = Square::from_coords(back_rank, 3);
            if !occ.contains(b)
                && !occ.contains(c)
                && !occ.contains(d)
                && !self.is_attacked(king, them)
                && !self.is_attacked(d, them)
                && !self.is_attacked(c, them)
            {
                moves.push(Move::new(king, c, Piece::King, None, None, QUEEN_CASTLE));
            }
        }
    }

    #[inline]
    fn push_piece_move(&self, from: Square, to: Square, piece: Piece, moves: &mut MoveList) {
        match self.piece_at(to) {
            Some((_, victim)) => {
                moves.push(Move::new(from, to, piece, Some(victim), None, CAPTURE))
            }
            None => moves.push(Move::quiet(from, to, piece)),
        }
    }
}

/// Count leaf nodes of the legal move tree to the given depth.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.generate_legal();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for m in moves {
        board.make_move(m);
        nodes += perft(board, depth - 1);
        board.unmake_move();
    }
    nodes
}


// Legality by make/unmake: every pseudo-legal candidate is played, the
// king-attack test decides, the move is unwound. Pin-aware generation
// would be faster but changes nothing observable.
