//! Integration tests for atomic chess played through the core engine.
//!
//! Covers capture legality around the kings, explosion mechanics, and the
//! atomic-specific ways a game can end.

use std::sync::Arc;

use fission_atomic::{Atomic, explode_surrounding_pieces, is_special_draw, is_special_end, legal_moves};
use fission_core::{
    CastleSide, Color, Game, MoveError, Piece, Role, Situation, Square, Standard, Status, perft, status,
};

fn situation(fen: &str) -> Situation {
    fen.parse().unwrap()
}

fn atomic_game(fen: &str) -> Game {
    Game::from_situation(Arc::new(Atomic), situation(fen))
}

// ── Capture legality ──────────────────────────────────────────────────────────

#[test]
fn no_capture_lands_next_to_own_king() {
    for fen in [
        "4k3/8/8/8/8/8/3p4/3RK3 w - - 0 1",
        "4k3/8/8/8/8/3rb3/2K1P3/8 w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "4k3/5p2/8/7Q/8/8/4r3/4K3 w - - 0 1",
    ] {
        let s = situation(fen);
        let Some(king) = s.board().king_of(s.turn()) else {
            continue;
        };
        let perimeter = king.surrounding();
        for mv in legal_moves(&s).values().flatten() {
            assert!(
                !(mv.captures && perimeter.contains(mv.to)),
                "{mv} in {fen} blows up its own king"
            );
        }
    }
}

#[test]
fn king_next_to_piece_cannot_take_it() {
    let s = situation("4k3/8/8/8/8/8/4n3/4K3 w - - 0 1");
    assert!(
        legal_moves(&s)
            .get(&Square::E1)
            .is_none_or(|moves| moves.iter().all(|mv| mv.to != Square::E2)),
        "Kxe2 must never be legal"
    );
}

#[test]
fn king_excluded_from_counter_threats() {
    // White is in check from the queen on d2, which stands next to the black king.
    let s = situation("8/8/8/8/5p2/4k3/3q3B/4K3 w - - 0 1");
    assert!(s.is_check());
    let moves = legal_moves(&s);
    let king_moves = moves.get(&Square::E1).cloned().unwrap_or_default();
    assert!(king_moves.iter().all(|mv| !mv.captures), "the king never captures");
    assert!(
        moves[&Square::H2].iter().any(|mv| mv.to == Square::F4),
        "Bxf4 blows up the king on e3"
    );
}

#[test]
fn counter_threat_answers_check() {
    let mut game = atomic_game("4k3/5p2/8/7Q/8/8/4r3/4K3 w - - 0 1");
    game.play_uci("h5f7").unwrap();
    assert_eq!(game.situation().board().king_of(Color::Black), None);
    assert_eq!(
        game.status(),
        Some(Status::VariantEnd { winner: Some(Color::White) })
    );
}

// ── Explosions ────────────────────────────────────────────────────────────────

#[test]
fn knight_on_d5_explodes_with_bishop_but_not_pawn() {
    let mut game = atomic_game("4k3/8/8/3n4/2BP1N2/8/8/4K3 w - - 0 1");
    let mv = game.play_uci("f4d5").unwrap();
    let board = game.situation().board();
    assert_eq!(board.piece_at(Square::D5), None);
    assert_eq!(board.piece_at(Square::C4), None);
    assert_eq!(board.piece_at(Square::D4), Some(Piece::new(Role::Pawn, Color::White)));
    assert_eq!(mv.after, *board, "the played move carries the exploded board");
}

#[test]
fn exploded_move_is_stable() {
    let s = situation("4k3/8/8/3n4/2BP1N2/8/8/4K3 w - - 0 1");
    let mv = legal_moves(&s)[&Square::F4]
        .iter()
        .copied()
        .find(|mv| mv.to == Square::D5)
        .unwrap();
    let once = explode_surrounding_pieces(mv);
    assert_eq!(explode_surrounding_pieces(once), once);
}

#[test]
fn pawns_in_blast_survive() {
    let mut game = atomic_game("4k3/8/8/2ppp3/2pnp3/2PPP3/8/4K2Q w - - 0 1");
    game.play_uci("h1d5").unwrap_err();
    game.play_uci("e3d4").unwrap();
    let board = game.situation().board();
    assert_eq!(board.piece_at(Square::D4), None, "pawn on the capture square goes");
    assert_eq!(board.piece_at(Square::E3), None, "the capturer moved away");
    for sq in [Square::C5, Square::D5, Square::E5, Square::C4, Square::E4, Square::C3, Square::D3] {
        assert_eq!(board.role_at(sq), Some(Role::Pawn), "pawn on {sq} survives");
    }
}

#[test]
fn exploded_rook_loses_castling_right() {
    let mut game = atomic_game("r3k2r/6p1/8/8/8/8/1Q6/R3K2R w KQkq - 0 1");
    game.play_uci("b2g7").unwrap();
    let s = game.situation();
    assert_eq!(s.board().piece_at(Square::H8), None);
    assert!(!s.castling().has(Color::Black, CastleSide::KingSide));
    assert!(s.castling().has(Color::Black, CastleSide::QueenSide));
    assert_eq!(s.halfmove_clock(), 0);
}

// ── Game end ──────────────────────────────────────────────────────────────────

#[test]
fn blowing_up_the_king_ends_the_game() {
    let mut game = atomic_game("4k3/5p2/8/7Q/8/8/8/4K3 w - - 0 1");
    game.play_uci("h5f7").unwrap();
    assert!(is_special_end(game.situation()));
    assert_eq!(game.status().and_then(Status::winner), Some(Color::White));
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.play_uci("e1e2"), Err(MoveError::GameOver));
}

#[test]
fn special_end_iff_not_two_kings() {
    assert!(!is_special_end(&Situation::starting_position()));
    assert!(is_special_end(&situation("4k3/8/8/8/8/8/8/8 w - - 0 1")));
    assert!(is_special_end(&situation("8/8/8/8/8/8/8/8 w - - 0 1")));
}

#[test]
fn opposite_colored_bishops_are_a_draw() {
    let s = situation("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
    assert!(is_special_draw(&s));
    assert_eq!(status(&Atomic, &s), Some(Status::VariantDraw));
}

#[test]
fn queen_against_bare_king_plays_on() {
    let s = situation("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    assert!(!is_special_draw(&s));
    assert_eq!(status(&Atomic, &s), None);
}

#[test]
fn orthodox_material_draw_is_disabled() {
    // Two same-colored bishops cannot mate, but they can still explode a king.
    let s = situation("4k3/8/8/8/8/4B3/8/2B1K3 w - - 0 1");
    assert_eq!(status(&Standard, &s), Some(Status::InsufficientMaterial));
    assert_eq!(status(&Atomic, &s), None);
}

// ── Perft regression ──────────────────────────────────────────────────────────

#[test]
fn atomic_perft_startpos() {
    let s = Situation::starting_position();
    assert_eq!(perft(&Atomic, &s, 1), 20);
    assert_eq!(perft(&Atomic, &s, 2), 400);
    assert_eq!(perft(&Atomic, &s, 3), 8_902);
}
