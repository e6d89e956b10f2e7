//! Moves carry the board they produce.
//!
//! A [`Move`] is generated against a situation and already holds the
//! resulting placement in [`Move::after`]. Variants that change what a move
//! does to the board (explosions, for instance) return a copy with a
//! different `after` via [`Move::with_after`]; the move's identity (piece,
//! squares, capture flag) never changes.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::role::Role;
use crate::square::Square;

/// How the base engine carries a move out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    /// Pawn advancing two ranks; sets the en passant target.
    DoublePush,
    /// Pawn capture onto the en passant target. The victim sits behind `to`.
    EnPassant,
    /// King move of two files; the rook jumps over it.
    Castle,
    /// Pawn reaching the last rank. [`Move::promotion`] holds the new role.
    Promotion,
}

/// A legal (or pseudo-legal) move together with the placement it produces.
///
/// Two moves are equal only if their `after` boards match as well, so an
/// exploded move differs from the orthodox move it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The piece standing on `from` before the move.
    pub piece: Piece,
    /// Source square.
    pub from: Square,
    /// Destination square. For castling this is the king's target square.
    pub to: Square,
    /// Role the pawn becomes, only set for [`MoveKind::Promotion`].
    pub promotion: Option<Role>,
    /// Whether an enemy piece is taken, including en passant.
    pub captures: bool,
    /// How the base engine carries the move out.
    pub kind: MoveKind,
    /// Placement once the move has been played.
    pub after: Board,
}

impl Move {
    /// The same move producing a different placement.
    #[must_use]
    pub fn with_after(self, after: Board) -> Move {
        Move { after, ..self }
    }

    /// Square of the piece taken, which differs from `to` for en passant.
    pub fn capture_square(&self) -> Option<Square> {
        if !self.captures {
            return None;
        }
        match self.kind {
            MoveKind::EnPassant => Square::from_coords(self.to.file() as i8, self.from.rank() as i8),
            _ => Some(self.to),
        }
    }

    /// Return the UCI form of this move, dropping the board.
    pub fn uci(&self) -> UciMove {
        UciMove {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uci())
    }
}

/// A move in UCI long algebraic form, such as `e2e4` or `e7e8q`.
///
/// Parsing only checks the text; whether the move is legal is decided by
/// [`select_move`](crate::select_move) against a concrete position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UciMove {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Promotion role from the optional fifth character (`n`, `b`, `r` or `q`).
    pub promotion: Option<Role>,
}

impl FromStr for UciMove {
    type Err = MoveError;

    /// Parse `e2e4` or `e7e8q`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MalformedUci`] for wrong length, unknown squares,
    /// or a promotion letter that is not a lowercase `n`, `b`, `r` or `q`.

    fn from_str(s: &str) -> Result<UciMove, MoveError> {
        let malformed = || MoveError::MalformedUci { found: s.to_string() };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(malformed());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(malformed)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(malformed)?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match Role::from_char(c) {
                Some(role) if Role::PROMOTIONS.contains(&role) && c.is_ascii_lowercase() => Some(role),
                _ => return Err(malformed()),
            },
        };
        Ok(UciMove { from, to, promotion })
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{role}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UciMove;
    use crate::role::Role;
    use crate::square::Square;

    #[test]
    fn parse_plain_and_promotion() {
        let mv: UciMove = "e2e4".parse().unwrap();
        assert_eq!(mv.from, Square::E2);
        assert_eq!(mv.to, Square::E4);
        assert_eq!(mv.promotion, None);

        let promo: UciMove = "e7e8n".parse().unwrap();
        assert_eq!(promo.promotion, Some(Role::Knight));
        assert_eq!(promo.to_string(), "e7e8n");
    }

    #[test]
    fn reject_malformed() {
        for bad in ["", "e2", "e2e9", "e7e8k", "e7e8Q", "e2e4e5", "z1a1"] {
            assert!(bad.parse::<UciMove>().is_err(), "{bad} should not parse");
        }
    }
}
