//! Move generation.
//!
//! Generation happens in two stages. Each [`Actor`] lists its candidate
//! moves: everything the piece can do by its movement rules, without asking
//! whether its own king ends up attacked. [`Situation::standard_legal_moves`]
//! then keeps the candidates that leave the mover's king safe on the
//! resulting board. Variants that need the unfiltered candidates (the atomic
//! king-threat rule, for one) read the actors directly.

mod castling;
mod pawns;
mod pieces;

use std::collections::BTreeMap;

use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::piece::Piece;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

/// Legal moves grouped by origin square.
pub type MoveMap = BTreeMap<Square, Vec<Move>>;

/// A piece of the side to move with its candidate moves.
#[derive(Debug, Clone)]
pub struct Actor {
    pub piece: Piece,
    /// Where the piece stands.
    pub square: Square,
    /// Pseudo-legal moves; own-king safety is not yet checked.
    pub moves: Vec<Move>,
}

impl Actor {
    #[inline]
    pub fn is(&self, role: Role) -> bool {
        self.piece.is(role)
    }
}

impl Situation {
    /// One actor per piece of the side to move, a1 first.
    pub fn actors(&self) -> Vec<Actor> {
        let us = self.turn();
        self.board()
            .pieces()
            .filter(|(_, piece)| piece.color == us)
            .map(|(square, piece)| {
                let mut moves = Vec::new();
                match piece.role {
                    Role::Pawn => pawns::gen_pawn(self, square, piece, &mut moves),
                    Role::King => {
                        pieces::gen_piece(self, square, piece, &mut moves);
                        castling::gen_castles(self, square, piece, &mut moves);
                    }
                    _ => pieces::gen_piece(self, square, piece, &mut moves),
                }
                Actor { piece, square, moves }
            })
            .collect()
    }

    /// True when `mv` leaves the mover's king unattacked; always true without a king.
    pub fn keeps_king_safe(&self, mv: &Move) -> bool {
        let us = self.turn();
        mv.after
            .king_of(us)
            .is_none_or(|king| !mv.after.is_attacked(king, !us))
    }

    /// Legal moves under orthodox rules. Origins without moves are absent.
    pub fn standard_legal_moves(&self) -> MoveMap {
        self.actors()
            .into_iter()
            .filter_map(|actor| {
                let moves: Vec<Move> = actor
                    .moves
                    .into_iter()
                    .filter(|mv| self.keeps_king_safe(mv))
                    .collect();
                (!moves.is_empty()).then_some((actor.square, moves))
            })
            .collect()
    }
}

/// Total number of moves in a map.
pub fn move_count(moves: &MoveMap) -> usize {
    moves.values().map(Vec::len).sum()
}

/// Find the move `from`-`to` in `moves`.
///
/// A promoting move without an explicit role promotes to a queen. Naming a
/// promotion role for a move that does not promote is an error.
pub fn select_move(
    moves: &MoveMap,
    from: Square,
    to: Square,
    promotion: Option<Role>,
) -> Result<Move, MoveError> {
    let candidates: Vec<&Move> = moves
        .get(&from)
        .map(|list| list.iter().filter(|mv| mv.to == to).collect())
        .unwrap_or_default();

    let first = candidates.first().ok_or(MoveError::Illegal { from, to })?;
    if first.kind != MoveKind::Promotion {
        return match promotion {
            None => Ok(**first),
            Some(_) => Err(MoveError::UnexpectedPromotion { from, to }),
        };
    }

    let wanted = promotion.unwrap_or(Role::Queen);
    candidates
        .into_iter()
        .find(|mv| mv.promotion == Some(wanted))
        .copied()
        .ok_or(MoveError::Illegal { from, to })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::square::Square;

    fn legal(fen: &str) -> MoveMap {
        fen.parse::<Situation>().unwrap().standard_legal_moves()
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = Situation::starting_position().standard_legal_moves();
        assert_eq!(move_count(&moves), 20);
        assert_eq!(moves.len(), 10, "8 pawns and 2 knights can move");
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let moves = legal("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(!moves.contains_key(&Square::E2), "pinned knight should have 0 moves");
    }

    #[test]
    fn double_check_king_only() {
        let s: Situation = "4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1".parse().unwrap();
        for (from, _) in s.standard_legal_moves() {
            assert_eq!(s.board().role_at(from), Some(Role::King), "only king moves in double check");
        }
    }

    #[test]
    fn castling_not_through_check() {
        let moves = legal("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = moves
            .values()
            .flatten()
            .filter(|mv| mv.kind == MoveKind::Castle)
            .collect();
        assert_eq!(castles.len(), 1);
        assert_eq!(castles[0].to, Square::C1);
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        let moves = legal("4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1");
        assert!(moves.values().flatten().all(|mv| mv.kind != MoveKind::EnPassant));
    }

    #[test]
    fn en_passant_generated() {
        let moves = legal("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let ep: Vec<_> = moves.values().flatten().filter(|mv| mv.kind == MoveKind::EnPassant).collect();
        assert_eq!(ep.len(), 1);
        assert!(ep[0].captures);
    }

    #[test]
    fn actors_ignore_own_king_safety() {
        let s: Situation = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let knight = s
            .actors()
            .into_iter()
            .find(|actor| actor.square == Square::E2)
            .unwrap();
        assert_eq!(knight.piece.color, Color::White);
        assert!(knight.is(Role::Knight));
        assert_eq!(knight.moves.len(), 6);
    }

    #[test]
    fn kingless_side_keeps_every_candidate() {
        let moves = legal("4k3/8/8/8/8/8/8/R6r w - - 0 1");
        assert_eq!(move_count(&moves), 14);
    }

    #[test]
    fn select_move_defaults_to_queen() {
        let moves = legal("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves[&Square::A7].len(), 4);
        let mv = select_move(&moves, Square::A7, Square::A8, None).unwrap();
        assert_eq!(mv.promotion, Some(Role::Queen));
        let mv = select_move(&moves, Square::A7, Square::A8, Some(Role::Knight)).unwrap();
        assert_eq!(mv.promotion, Some(Role::Knight));
    }

    #[test]
    fn select_move_errors() {
        let moves = Situation::starting_position().standard_legal_moves();
        assert_eq!(
            select_move(&moves, Square::E2, Square::E5, None),
            Err(MoveError::Illegal { from: Square::E2, to: Square::E5 })
        );
        assert_eq!(
            select_move(&moves, Square::E2, Square::E4, Some(Role::Queen)),
            Err(MoveError::UnexpectedPromotion { from: Square::E2, to: Square::E4 })
        );
        assert!(select_move(&moves, Square::E2, Square::E4, None).is_ok());
    }
}
