//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

/// Candidate moves for the pawn of `piece.color` on `from`.
pub(super) fn gen_pawn(situation: &Situation, from: Square, piece: Piece, list: &mut Vec<Move>) {
    let board = situation.board();
    let us = piece.color;
    let occupied = board.occupied();
    let enemy = board.by_color(!us);
    let forward = us.fold(1, -1);
    let start_rank = us.fold(1, 6);
    let promotion_rank = (!us).back_rank();

    let mut push = |to: Square, kind: MoveKind| {
        if to.rank() == promotion_rank {
            for role in Role::PROMOTIONS {
                list.push(situation.make_move(piece, from, to, MoveKind::Promotion, Some(role)));
            }
        } else {
            list.push(situation.make_move(piece, from, to, kind, None));
        }
    };

    // Pushes
    if let Some(one) = from.offset(0, forward).filter(|sq| !occupied.contains(*sq)) {
        push(one, MoveKind::Normal);
        if from.rank() == start_rank
            && let Some(two) = one.offset(0, forward).filter(|sq| !occupied.contains(*sq))
        {
            push(two, MoveKind::DoublePush);
        }
    }

    // Captures
    for to in pawn_attacks(us, from) & enemy {
        push(to, MoveKind::Normal);
    }

    // En passant: the target is empty and an enemy pawn stands right behind it.
    if let Some(ep) = situation.en_passant()
        && pawn_attacks(us, from).contains(ep)
        && !occupied.contains(ep)
        && Square::from_coords(ep.file() as i8, from.rank() as i8)
            .and_then(|sq| board.piece_at(sq))
            == Some(Piece::new(Role::Pawn, !us))
    {
        list.push(situation.make_move(piece, from, ep, MoveKind::EnPassant, None));
    }
}
