//! What a capture does to the board.

use fission_core::{Bitboard, Move, Role};
use tracing::debug;

/// Blow up the capture square of `mv`.
///
/// The capturing and the captured piece vanish together with every
/// non-pawn piece on the adjacent squares. Pawns next to the blast survive;
/// a pawn on the capture square itself does not. Quiet moves come back
/// unchanged, and so does a move whose `after` board already shows the blast.
pub fn explode_surrounding_pieces(mv: Move) -> Move {
    if !mv.captures {
        return mv;
    }

    let board = mv.after;
    let bystanders = mv.to.surrounding() & board.occupied() & !board.by_role(Role::Pawn);
    let blast = bystanders | Bitboard::from(mv.to);
    let after = board.without(blast);

    debug!(mv = %mv, bystanders = ?bystanders, "explosion");
    mv.with_after(after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fission_core::{Color, Piece, Situation, Square};

    fn capture(fen: &str, from: Square, to: Square) -> Move {
        let situation: Situation = fen.parse().unwrap();
        situation
            .standard_legal_moves()
            .remove(&from)
            .and_then(|moves| moves.into_iter().find(|mv| mv.to == to))
            .unwrap_or_else(|| panic!("{from}{to} should be legal in {fen}"))
    }

    #[test]
    fn quiet_move_unchanged() {
        let situation = Situation::starting_position();
        let mv = situation.standard_legal_moves()[&Square::E2][0];
        assert_eq!(explode_surrounding_pieces(mv), mv);
    }

    #[test]
    fn blast_takes_both_pieces_and_neighbours() {
        // Nxd5 with Bc4, Pd4 and Qc6 around the victim.
        let mv = capture("4k3/8/2q5/3n4/2BP1N2/8/8/4K3 w - - 0 1", Square::F4, Square::D5);
        let after = explode_surrounding_pieces(mv).after;
        assert_eq!(after.piece_at(Square::D5), None, "capturer and victim vanish");
        assert_eq!(after.piece_at(Square::C4), None, "bishop in range explodes");
        assert_eq!(after.piece_at(Square::C6), None, "queen in range explodes");
        assert_eq!(
            after.piece_at(Square::D4),
            Some(Piece::new(Role::Pawn, Color::White)),
            "pawns next to the blast survive"
        );
        assert_eq!(after.occupied().count(), 3);
    }

    #[test]
    fn pawn_on_capture_square_dies() {
        let mv = capture("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", Square::E4, Square::D5);
        let after = explode_surrounding_pieces(mv).after;
        assert!(after.by_role(Role::Pawn).is_empty());
    }

    #[test]
    fn identity_of_move_is_kept() {
        let mv = capture("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", Square::E4, Square::D5);
        let exploded = explode_surrounding_pieces(mv);
        assert_eq!((exploded.from, exploded.to, exploded.captures), (mv.from, mv.to, mv.captures));
        assert_eq!(exploded.piece, mv.piece);
    }

    #[test]
    fn exploding_twice_changes_nothing() {
        let mv = capture("4k3/8/2q5/3n4/2BP1N2/8/8/4K3 w - - 0 1", Square::F4, Square::D5);
        let once = explode_surrounding_pieces(mv);
        assert_eq!(explode_surrounding_pieces(once), once);
    }

    #[test]
    fn en_passant_blast_centers_on_target() {
        let mv = capture("4k3/8/2n5/3pP3/8/8/8/4K3 w - d6 0 1", Square::E5, Square::D6);
        let after = explode_surrounding_pieces(mv).after;
        assert_eq!(after.piece_at(Square::D5), None, "victim removed by the capture itself");
        assert_eq!(after.piece_at(Square::D6), None);
        assert_eq!(after.piece_at(Square::C6), None, "knight next to d6 explodes");
    }
}
