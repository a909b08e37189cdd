//! End-to-end engine scenarios: fixed positions in, moves and scores out.

use cinder::board::{Board, Piece};
use cinder::search::Search;

#[test]
fn startpos_depth_4_returns_a_legal_move() {
    let board = Board::new();
    let mut search = Search::new(4);
    let (mv, _) = search.best_move(&board).expect("start position has moves");
    let mut check = board.clone();
    assert!(check.generate_legal().contains(&mv));
}

#[test]
fn quiet_italian_position_stays_within_two_pawns() {
    let board = Board::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();
    let mut search = Search::new(5);
    let (mv, score) = search.best_move(&board).expect("legal moves exist");
    let mut check = board.clone();
    assert!(check.generate_legal().contains(&mv));
    assert!(
        score.abs() < 2.0,
        "balanced opening scored {score:+.2} pawns"
    );
}

#[test]
fn back_rank_mate_in_one_is_found_at_depth_2() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut search = Search::new(2);
    let (mv, score) = search.best_move(&board).unwrap();

    assert_eq!(mv.piece, Piece::Rook);
    let mut check = board.clone();
    check.make_move(mv);
    assert!(check.in_check() && check.generate_legal().is_empty(), "{mv} is not mate");
    assert!(score >= 999.0, "mate should score as mate, got {score}");
}

#[test]
fn castling_moves_are_available_for_both_sides() {
    let mut white = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let ucis: Vec<String> = white.generate_legal().iter().map(|m| m.uci()).collect();
    assert!(ucis.contains(&"e1g1".to_string()));
    assert!(ucis.contains(&"e1c1".to_string()));

    let mut black = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let ucis: Vec<String> = black.generate_legal().iter().map(|m| m.uci()).collect();
    assert!(ucis.contains(&"e8g8".to_string()));
    assert!(ucis.contains(&"e8c8".to_string()));
}

#[test]
fn en_passant_after_the_classic_sequence() {
    let mut board = Board::new();
    for token in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        let m = board.from_uci(token).unwrap();
        board.make_move(m);
    }
    let legal = board.generate_legal();
    let ep = legal
        .iter()
        .find(|m| m.uci() == "e5d6")
        .expect("en-passant capture missing");
    assert!(ep.is_en_passant());
    assert!(ep.is_capture());
}

#[test]
fn promotion_expansion_is_exactly_four_moves() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let legal = board.generate_legal();

    let promos: Vec<String> = legal
        .iter()
        .filter(|m| m.is_promotion())
        .map(|m| m.uci())
        .collect();
    assert_eq!(promos, vec!["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);

    // everything else is a king move
    assert!(legal
        .iter()
        .filter(|m| !m.is_promotion())
        .all(|m| m.piece == Piece::King));
}

#[test]
fn search_is_deterministic() {
    let board = Board::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();
    let a = Search::new(4).best_move(&board).unwrap();
    let b = Search::new(4).best_move(&board).unwrap();
    assert_eq!(a.0, b.0);
    assert_eq!(a.1, b.1);
}

#[test]
fn returned_moves_are_always_legal() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "8/P7/8/8/8/8/8/k6K w - - 0 1",
        "k7/8/1K6/2Q5/8/8/8/8 w - - 0 1",
    ];
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        let mut search = Search::new(3);
        let (mv, _) = search.best_move(&board).expect("position has moves");
        let mut check = board.clone();
        assert!(check.generate_legal().contains(&mv), "{fen} gave {mv}");
    }
}
