//! Castling generation.

use crate::castle_rights::{CastleSide, king_home};
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

/// Squares strictly between `a` and `b` on the same rank.
fn between_on_rank(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let (lo, hi) = (a.file().min(b.file()), a.file().max(b.file()));
    let rank = a.rank() as i8;
    (lo + 1..hi).filter_map(move |file| Square::from_coords(file as i8, rank))
}

/// Castling moves for the king on `from`.
///
/// The king may not castle out of, through, or into check.
pub(super) fn gen_castles(situation: &Situation, from: Square, king: Piece, list: &mut Vec<Move>) {
    let us = king.color;
    let board = situation.board();
    if from != king_home(us) || situation.is_check() {
        return;
    }

    for side in CastleSide::ALL {
        if !situation.castling().has(us, side) {
            continue;
        }
        let rook_home = side.rook_home(us);
        if board.piece_at(rook_home) != Some(Piece::new(Role::Rook, us)) {
            continue;
        }
        if between_on_rank(from, rook_home).any(|sq| board.occupied().contains(sq)) {
            continue;
        }
        let target = side.king_target(us);
        let path_attacked = between_on_rank(from, target)
            .chain(std::iter::once(target))
            .any(|sq| board.is_attacked(sq, !us));
        if path_attacked {
            continue;
        }
        list.push(situation.make_move(king, from, target, MoveKind::Castle, None));
    }
}
