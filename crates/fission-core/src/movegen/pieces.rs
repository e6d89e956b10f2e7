//! Knight, slider and plain king moves.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

/// Squares `piece` on `from` reaches, own pieces excluded.
fn targets(situation: &Situation, from: Square, piece: Piece) -> Bitboard {
    let board = situation.board();
    let occupied = board.occupied();
    let reach = match piece.role {
        Role::Knight => knight_attacks(from),
        Role::Bishop => bishop_attacks(from, occupied),
        Role::Rook => rook_attacks(from, occupied),
        Role::Queen => queen_attacks(from, occupied),
        Role::King => king_attacks(from),
        Role::Pawn => Bitboard::EMPTY,
    };
    reach & !board.by_color(piece.color)
}

pub(super) fn gen_piece(situation: &Situation, from: Square, piece: Piece, list: &mut Vec<Move>) {
    list.extend(
        targets(situation, from, piece)
            .map(|to| situation.make_move(piece, from, to, MoveKind::Normal, None)),
    );
}
