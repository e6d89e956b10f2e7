//! A board together with everything needed to decide the next ply.

use std::fmt;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide, king_home};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::role::Role;
use crate::square::Square;

/// Placement, side to move, castling and en passant state, and move counters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Situation {
    board: Board,
    turn: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Situation {
    /// A situation with no castling rights, no en passant target and fresh counters.
    pub fn new(board: Board, turn: Color) -> Situation {
        Situation {
            board,
            turn,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Standard initial placement, White to move, all castling rights.
    pub fn starting_position() -> Situation {
        Situation::new(Board::standard(), Color::White).with_castling(CastleRights::ALL)
    }

    /// Replace the castling rights.
    #[must_use]
    pub fn with_castling(self, castling: CastleRights) -> Situation {
        Situation { castling, ..self }
    }

    /// Replace the en passant target square.
    #[must_use]
    pub fn with_en_passant(self, en_passant: Option<Square>) -> Situation {
        Situation { en_passant, ..self }
    }

    /// Replace the halfmove clock and fullmove number.
    #[must_use]
    pub fn with_counters(self, halfmove_clock: u16, fullmove_number: u16) -> Situation {
        Situation {
            halfmove_clock,
            fullmove_number,
            ..self
        }
    }

    /// Return the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant, set only right after a double push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Starts at 1 and increments after Black moves. Saturates at `u16::MAX`.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// True when the side to move has a king and it is attacked.
    pub fn is_check(&self) -> bool {
        self.board
            .king_of(self.turn)
            .is_some_and(|king| self.board.is_attacked(king, !self.turn))
    }

    /// The situation after `mv`, which must have been generated for `self`.
    ///
    /// Only `mv.after` is trusted for placement, so a variant may hand in a
    /// move whose board differs from what the base engine produced.
    pub fn play(&self, mv: &Move) -> Situation {
        let us = self.turn;
        let after = mv.after;

        let mut castling = self.castling.revoke_touched(&[mv.from, mv.to]);
        for color in Color::ALL {
            let king_home_kept = after.piece_at(king_home(color)) == Some(Piece::new(Role::King, color));
            for side in CastleSide::ALL {
                let rook_home_kept =
                    after.piece_at(side.rook_home(color)) == Some(Piece::new(Role::Rook, color));
                if !(king_home_kept && rook_home_kept) {
                    castling = castling.without(color, side);
                }
            }
        }

        let en_passant = match mv.kind {
            MoveKind::DoublePush => {
                Square::from_coords(mv.from.file() as i8, (mv.from.rank() + mv.to.rank()) as i8 / 2)
            }
            _ => None,
        };

        let halfmove_clock = if mv.piece.is(Role::Pawn) || mv.captures {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        Situation {
            board: after,
            turn: !us,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number: self.fullmove_number.saturating_add(us.fold(0, 1)),
        }
    }
}

impl fmt::Debug for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Situation(\"{self}\")")
    }
}

#[cfg(test)]
mod tests {
    use super::Situation;
    use crate::castle_rights::CastleSide;
    use crate::color::Color;
    use crate::square::Square;

    fn play_uci(situation: &Situation, uci: &str) -> Situation {
        let mv = situation
            .standard_legal_moves()
            .into_values()
            .flatten()
            .find(|mv| mv.to_string() == uci)
            .unwrap_or_else(|| panic!("{uci} is not legal in {situation}"));
        situation.play(&mv)
    }

    #[test]
    fn double_push_sets_en_passant() {
        let after = play_uci(&Situation::starting_position(), "e2e4");
        assert_eq!(after.en_passant(), Some(Square::E3));
        assert_eq!(after.turn(), Color::Black);
        assert_eq!(after.halfmove_clock(), 0);
        assert_eq!(after.fullmove_number(), 1);
    }

    #[test]
    fn counters_advance() {
        let s = play_uci(&Situation::starting_position(), "g1f3");
        assert_eq!(s.halfmove_clock(), 1);
        assert_eq!(s.en_passant(), None);
        let s = play_uci(&s, "g8f6");
        assert_eq!(s.fullmove_number(), 2);
        assert_eq!(s.halfmove_clock(), 2);
    }

    #[test]
    fn fullmove_number_saturates() {
        let s: Situation = "4k3/8/8/8/8/8/8/Q3K3 b - - 0 65535".parse().unwrap();
        let after = play_uci(&s, "e8d8");
        assert_eq!(after.fullmove_number(), u16::MAX);
        assert_eq!(after.turn(), Color::White);
    }

    #[test]
    fn rook_move_revokes_one_side() {
        let s: Situation = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1".parse().unwrap();
        let after = play_uci(&s, "h1g1");
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(after.castling().has(Color::White, CastleSide::QueenSide));
        assert!(after.castling().has(Color::Black, CastleSide::KingSide));
    }

    #[test]
    fn castling_moves_both_pieces() {
        let s: Situation = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1".parse().unwrap();
        let after = play_uci(&s, "e1g1");
        assert_eq!(after.board().king_of(Color::White), Some(Square::G1));
        assert_eq!(after.board().role_at(Square::F1), Some(crate::role::Role::Rook));
        assert_eq!(after.board().piece_at(Square::H1), None);
        assert!(!after.castling().has(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn check_detection() {
        let s: Situation = "4k3/8/8/8/8/8/8/4K2r w - - 0 1".parse().unwrap();
        assert!(s.is_check());
        let s: Situation = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(!s.is_check());
        let kingless: Situation = "4k3/8/8/8/8/8/8/7r w - - 0 1".parse().unwrap();
        assert!(!kingless.is_check());
    }
}
