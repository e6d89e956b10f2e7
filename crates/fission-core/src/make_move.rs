//! Building base-engine moves: the placement a move produces, copy-make style.

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

impl Situation {
    /// Describe `piece` going from `from` to `to` and compute the resulting board.
    ///
    /// The source board is never modified. No legality checks happen here.
    pub(crate) fn make_move(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        kind: MoveKind,
        promotion: Option<Role>,
    ) -> Move {
        let board = self.board();
        let lifted = board.without(from.bitboard());

        let (after, captures) = match kind {
            MoveKind::EnPassant => {
                // The taken pawn sits beside the mover, behind the target square.
                let victim = Square::from_coords(to.file() as i8, from.rank() as i8);
                let cleared = victim.map_or(lifted, |sq| lifted.without(sq.bitboard()));
                (cleared.put(to, piece), true)
            }
            MoveKind::Castle => {
                let side = if to.file() > from.file() {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                let rook = Piece::new(Role::Rook, piece.color);
                let after = lifted
                    .without(side.rook_home(piece.color).bitboard())
                    .put(to, piece)
                    .put(side.rook_target(piece.color), rook);
                (after, false)
            }
            MoveKind::Normal | MoveKind::DoublePush | MoveKind::Promotion => {
                let captures = board.by_color(!piece.color).contains(to);
                let landed = Piece::new(promotion.unwrap_or(piece.role), piece.color);
                (lifted.put(to, landed), captures)
            }
        };

        Move {
            piece,
            from,
            to,
            promotion,
            captures,
            kind,
            after,
        }
    }
}
